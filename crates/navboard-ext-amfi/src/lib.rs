//! # Navboard Ext AMFI
//!
//! Access to the AMFI portal's NAV history report:
//! - report date selection and formatting
//! - TOML configuration (endpoint, query parameter, category marker)
//! - one-shot blocking download
//!
//! Parsing lives in `navboard-core`; this crate only produces the raw bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;
mod date;
mod error;

pub use client::*;
pub use config::*;
pub use date::*;
pub use error::*;

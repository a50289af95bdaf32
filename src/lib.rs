//! Convert PagSeguro settled-transaction XML exports into OFX 1.02 bank statements.
//!
//! ```rust,ignore
//! use pagseguro_ofx::{ConverterBuilder, OfxConfig};
//!
//! ConverterBuilder::new()
//!     .filename("pagseguro.xml")
//!     .config(OfxConfig::default())
//!     .write_to("statement.ofx")?;
//! ```

mod builder;
mod config;
mod types;

pub mod errors;
pub mod parsers;
pub mod writers;

pub use builder::{ConverterBuilder, convert_file};
pub use config::OfxConfig;
pub use parsers::prelude::*;
pub use types::{FEE_DESCRIPTION, Transaction, TransactionKind};
pub use writers::prelude::*;

//! vendas-clean - cleaning pipeline for semicolon-delimited sales exports
//!
//! Reads a raw `;`-delimited sales export into an in-memory table, then runs
//! a fixed sequence of cleaning stages: column-name normalization, text
//! normalization, date coercion, essential-row filtering, null fills, and
//! empty-column pruning. The cleaned table is written back as `;`-delimited
//! text.

pub mod clean;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use clean::{CleanReport, Cleaner};
pub use config::CleanConfig;
pub use error::CleanError;
pub use model::Table;

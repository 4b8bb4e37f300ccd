//! Parser layer for reading the raw sales export

mod csv;

pub use self::csv::{read_csv, DELIMITER};

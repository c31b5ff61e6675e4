//! Ward table ingestion.
//!
//! Reads the rectangular ward covariate table produced by upstream spatial
//! extraction into a Polars DataFrame, and writes scored tables back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wardrisk_ingest::{read_ward_table, write_ward_table};
//!
//! let mut wards = read_ward_table(Path::new("data/niger_wards.csv"))?;
//! write_ward_table(&mut wards, Path::new("out/niger_wards_scores.csv"))?;
//! ```

mod error;
mod reader;
mod writer;

pub use error::{IngestError, Result};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, read_ward_table, validate_dataframe_shape,
    validate_encoding,
};
pub use writer::write_ward_table;

pub mod combined;
pub mod models;
pub mod table;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not write output file: {0}")]
    File(#[from] std::io::Error),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

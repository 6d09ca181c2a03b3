//! Startup dataset loading.
//!
//! The dataset is a headered CSV with the columns `ReviewId`, `ReviewBody`,
//! `Location` and `Timestamp` (any extra columns are ignored). Rows that fail
//! to parse are logged and skipped so one bad line does not keep the service
//! from starting; I/O failures and missing columns are fatal.

use std::io::Read;
use std::path::Path;

use crate::error::DatasetError;
use crate::model::Review;

const REQUIRED_COLUMNS: [&str; 4] = ["ReviewId", "ReviewBody", "Location", "Timestamp"];

/// Load every parseable review from the CSV file at `path`, in file order.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Review>, DatasetError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let reviews = read_csv(file)?;
    tracing::info!(path = %path.display(), count = reviews.len(), "dataset loaded");
    Ok(reviews)
}

/// Parse reviews from any CSV reader.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Review>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut reviews = Vec::new();
    for (row, record) in reader.deserialize::<Review>().enumerate() {
        match record {
            Ok(review) => reviews.push(review),
            // Header is line 1, so data row 0 sits on line 2.
            Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => return Err(err.into()),
            Err(err) => tracing::warn!(line = row + 2, error = %err, "skipping unparseable dataset row"),
        }
    }
    Ok(reviews)
}

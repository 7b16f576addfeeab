use std::error::Error;
use std::fmt::Display;

use polars::error::PolarsError;

use crate::data_structs::RecordError;

pub type Result<T> = std::result::Result<T, GtfError>;

/// Errors surfaced while reading a GTF source into a table.
///
/// Record-level malformation is fatal and aborts the whole read; no partial
/// table is returned. Attribute-field irregularities are never fatal and are
/// not represented here (the offending chunk is skipped instead, see
/// [`Attributes`](crate::data_structs::Attributes)).
#[derive(Debug)]
pub enum GtfError {
    /// A record line that cannot be minimally tokenized. Carries the 1-based
    /// line number and the raw line so the bad input can be located.
    MalformedRecord {
        line_number: usize,
        line:        String,
        source:      RecordError,
    },
    Io(std::io::Error),
    Polars(PolarsError),
}

impl Display for GtfError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            GtfError::MalformedRecord {
                line_number,
                line,
                source,
            } => {
                write!(
                    f,
                    "Malformed record at line {}: {}: {:?}",
                    line_number, source, line
                )
            },
            GtfError::Io(e) => write!(f, "IO error: {}", e),
            GtfError::Polars(e) => write!(f, "Polars error: {}", e),
        }
    }
}

impl Error for GtfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GtfError::MalformedRecord { source, .. } => Some(source),
            GtfError::Io(e) => Some(e),
            GtfError::Polars(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for GtfError {
    fn from(e: std::io::Error) -> Self { GtfError::Io(e) }
}

impl From<PolarsError> for GtfError {
    fn from(e: PolarsError) -> Self { GtfError::Polars(e) }
}

//! Core data structures for representing GTF records in transit.
//!
//! Key components of this module include:
//!
//! - [`GtfRecord`]: one tokenized record line with typed fixed fields,
//!   borrowing from the input line.
//! - [`Attributes`]: a lazy iterator decoding the semicolon-delimited
//!   key/value sub-grammar of the ninth field.
//! - [`AttrValue`]: the tagged cell an attribute column stores per row
//!   (null / scalar / list).
//!
//! Records are transient: each one is consumed into the column buffers of
//! [`crate::io::gtf`] before the next line is read.

mod attributes;
mod record;

pub use attributes::{
    AttrValue,
    Attributes,
};
pub use record::{
    GtfRecord,
    RecordError,
    GTF_FIELD_COUNT,
};

mod columns;
mod read;
mod schema;

pub use {
    read::{read_gtf, GtfReader, GtfReaderBuilder},
    schema::GtfColumns,
};

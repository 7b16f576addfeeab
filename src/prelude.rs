pub use crate::data_structs::{
    AttrValue,
    Attributes,
    GtfRecord,
    RecordError,
};
pub use crate::error::{
    GtfError,
    Result,
};
#[cfg(feature = "compression")]
pub use crate::io::compression::Compression;
pub use crate::io::gtf::{
    read_gtf,
    GtfColumns,
    GtfReader,
    GtfReaderBuilder,
};

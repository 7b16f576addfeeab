use polars::prelude::*;

use crate::utils::schema_from_arrays;

/// The eight fixed columns every GTF table starts with.
///
/// Attribute columns follow these in order of first appearance and are not
/// part of the static schema: their set is discovered while reading.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GtfColumns {
    Seqname,
    Source,
    Feature,
    Start,
    End,
    Score,
    Strand,
    Frame,
}

impl GtfColumns {
    /// Returns the string representation of the column name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GtfColumns::Seqname => "seqname",
            GtfColumns::Source => "source",
            GtfColumns::Feature => "feature",
            GtfColumns::Start => "start",
            GtfColumns::End => "end",
            GtfColumns::Score => "score",
            GtfColumns::Strand => "strand",
            GtfColumns::Frame => "frame",
        }
    }

    /// Returns the Polars DataType for the column.
    pub const fn dtype(&self) -> DataType {
        match self {
            GtfColumns::Seqname => DataType::String,
            GtfColumns::Source => DataType::String,
            GtfColumns::Feature => DataType::String,
            GtfColumns::Start => DataType::Int64,
            GtfColumns::End => DataType::Int64,
            GtfColumns::Score => DataType::Float64,
            GtfColumns::Strand => DataType::String,
            GtfColumns::Frame => DataType::String,
        }
    }

    /// Returns an array containing all fixed column names as strings.
    pub const fn colnames() -> [&'static str; 8] {
        [
            GtfColumns::Seqname.as_str(),
            GtfColumns::Source.as_str(),
            GtfColumns::Feature.as_str(),
            GtfColumns::Start.as_str(),
            GtfColumns::End.as_str(),
            GtfColumns::Score.as_str(),
            GtfColumns::Strand.as_str(),
            GtfColumns::Frame.as_str(),
        ]
    }

    pub const fn dtypes() -> [DataType; 8] {
        [
            GtfColumns::Seqname.dtype(),
            GtfColumns::Source.dtype(),
            GtfColumns::Feature.dtype(),
            GtfColumns::Start.dtype(),
            GtfColumns::End.dtype(),
            GtfColumns::Score.dtype(),
            GtfColumns::Strand.dtype(),
            GtfColumns::Frame.dtype(),
        ]
    }

    /// Checks if the given string matches any of the fixed column names.
    pub fn has_name(name: &str) -> bool {
        Self::colnames().contains(&name)
    }

    /// Returns the Polars Schema for the fixed columns.
    pub fn schema() -> Schema {
        schema_from_arrays(&Self::colnames(), &Self::dtypes())
    }
}

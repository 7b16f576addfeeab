use std::error::Error;
use std::fmt::Display;

use crate::data_structs::attributes::Attributes;

/// Number of tab-separated fields in a GTF record line.
pub const GTF_FIELD_COUNT: usize = 9;

/// One tokenized GTF record line.
///
/// Fixed fields are typed the way the resulting table stores them: `start`
/// and `end` as integers, `score` as an optional float (`.` encodes null).
/// `strand` and `frame` pass through verbatim with no validation, since GTF
/// producers vary and rejecting unusual values would break real files. The
/// record borrows from the input line and is consumed immediately into the
/// column buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct GtfRecord<'a> {
    pub seqname:    &'a str,
    pub source:     &'a str,
    pub feature:    &'a str,
    pub start:      i64,
    pub end:        i64,
    pub score:      Option<f64>,
    pub strand:     &'a str,
    pub frame:      &'a str,
    pub attributes: &'a str,
}

/// Why a record line could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Fewer than [`GTF_FIELD_COUNT`] tab-separated fields were present.
    FieldCount(usize),
    /// `start` or `end` held non-numeric content.
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },
}

impl Display for RecordError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            RecordError::FieldCount(n) => {
                write!(
                    f,
                    "expected {} tab-separated fields, found {}",
                    GTF_FIELD_COUNT, n
                )
            },
            RecordError::InvalidCoordinate { field, value } => {
                write!(f, "non-numeric {} field {:?}", field, value)
            },
        }
    }
}

impl Error for RecordError {}

fn parse_coordinate(
    field: &'static str,
    value: &str,
) -> Result<i64, RecordError> {
    value
        .parse::<i64>()
        .map_err(|_| {
            RecordError::InvalidCoordinate {
                field,
                value: value.to_string(),
            }
        })
}

impl<'a> GtfRecord<'a> {
    /// Whether a line carries no record at all (blank or `#`-prefixed).
    pub fn is_ignored(line: &str) -> bool {
        line.is_empty() || line.starts_with('#')
    }

    /// Tokenizes one non-ignored line into its nine positional fields.
    ///
    /// Extra tabs beyond the ninth field stay part of the attributes field.
    /// An unparseable `score` is treated as null rather than rejected, same
    /// as the `.` literal; only the field count and the coordinates can make
    /// a line malformed.
    pub fn parse(line: &'a str) -> Result<Self, RecordError> {
        let fields = line
            .splitn(GTF_FIELD_COUNT, '\t')
            .collect::<Vec<_>>();
        if fields.len() < GTF_FIELD_COUNT {
            return Err(RecordError::FieldCount(fields.len()));
        }

        Ok(Self {
            seqname:    fields[0],
            source:     fields[1],
            feature:    fields[2],
            start:      parse_coordinate("start", fields[3])?,
            end:        parse_coordinate("end", fields[4])?,
            score:      match fields[5] {
                "." => None,
                other => other.parse::<f64>().ok(),
            },
            strand:     fields[6],
            frame:      fields[7],
            attributes: fields[8],
        })
    }

    /// Lazy iterator over the attribute key/value pairs of this record.
    pub fn attributes(&self) -> Attributes<'a> {
        Attributes::new(self.attributes)
    }
}

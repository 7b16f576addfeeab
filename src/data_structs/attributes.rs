use polars::prelude::*;

use crate::plsmallstr;

/// Lazy iterator over the `(key, value)` pairs of a GTF attributes field.
///
/// The field is split on `;` into candidate chunks; each chunk is trimmed
/// and split on its first run of whitespace into a key and a value, and one
/// pair of wrapping double quotes is stripped from the value. Chunks that
/// produce no key/value split (stray whitespace, trailing `;`) are skipped
/// rather than failing the record: producers disagree on minor formatting,
/// and over-strict parsing would reject legitimate files.
///
/// Restarting is cheap: the iterator borrows the field, so calling
/// [`GtfRecord::attributes`](crate::data_structs::GtfRecord::attributes)
/// again yields a fresh pass over the same pairs.
///
/// Known limitation: semicolons inside quoted values are not specially
/// handled, matching common producer behavior of never quoting semicolons.
/// A value containing `;` splits mid-value, yielding a truncated pair and a
/// skipped stray chunk.
#[derive(Debug, Clone)]
pub struct Attributes<'a> {
    chunks: std::str::Split<'a, char>,
}

impl<'a> Attributes<'a> {
    pub fn new(field: &'a str) -> Self {
        Self {
            chunks: field.split(';'),
        }
    }
}

impl<'a> Iterator for Attributes<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let chunk = self.chunks.next()?.trim();
            let Some((key, rest)) = chunk.split_once(char::is_whitespace)
            else {
                // No key/value split in this chunk. Skip it.
                continue;
            };

            let value = rest.trim_start();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            return Some((key, value));
        }
    }
}

/// One cell of an attribute column.
///
/// The shape is decided per record: a key absent from the record is
/// [`Null`](AttrValue::Null), a key seen once is a
/// [`Scalar`](AttrValue::Scalar), a key seen more than once is a
/// [`List`](AttrValue::List) in encounter order. No global file statistic
/// influences the shape of an individual cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Null,
    Scalar(String),
    List(Vec<String>),
}

impl AttrValue {
    /// Records one more occurrence of the key within the current row.
    pub fn push(
        &mut self,
        value: &str,
    ) {
        *self = match std::mem::replace(self, AttrValue::Null) {
            AttrValue::Null => AttrValue::Scalar(value.to_string()),
            AttrValue::Scalar(first) => {
                AttrValue::List(vec![first, value.to_string()])
            },
            AttrValue::List(mut values) => {
                values.push(value.to_string());
                AttrValue::List(values)
            },
        }
    }

    pub(crate) fn into_any_value(self) -> AnyValue<'static> {
        match self {
            AttrValue::Null => AnyValue::Null,
            AttrValue::Scalar(value) => AnyValue::StringOwned(value.into()),
            AttrValue::List(values) => {
                AnyValue::List(Series::new(plsmallstr!(), values))
            },
        }
    }
}

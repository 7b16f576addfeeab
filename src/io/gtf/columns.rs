use indexmap::IndexMap;
use polars::prelude::*;

use crate::data_structs::{AttrValue, GtfRecord};
use crate::io::gtf::schema::GtfColumns;
use crate::plsmallstr;

/// Buffers for the eight fixed GTF fields, filled directly during
/// tokenization.
#[derive(Debug, Default)]
pub(crate) struct FixedColumns {
    seqnames: Vec<String>,
    sources:  Vec<String>,
    features: Vec<String>,
    starts:   Vec<i64>,
    ends:     Vec<i64>,
    scores:   Vec<Option<f64>>,
    strands:  Vec<String>,
    frames:   Vec<String>,
}

impl FixedColumns {
    pub(crate) fn append(
        &mut self,
        record: &GtfRecord,
    ) {
        self.seqnames.push(record.seqname.to_string());
        self.sources.push(record.source.to_string());
        self.features.push(record.feature.to_string());
        self.starts.push(record.start);
        self.ends.push(record.end);
        self.scores.push(record.score);
        self.strands.push(record.strand.to_string());
        self.frames.push(record.frame.to_string());
    }

    pub(crate) fn height(&self) -> usize {
        self.seqnames.len()
    }

    pub(crate) fn into_columns(self) -> Vec<Column> {
        vec![
            Series::new(plsmallstr!(GtfColumns::Seqname.as_str()), self.seqnames)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Source.as_str()), self.sources)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Feature.as_str()), self.features)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Start.as_str()), self.starts)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::End.as_str()), self.ends)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Score.as_str()), self.scores)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Strand.as_str()), self.strands)
                .into_column(),
            Series::new(plsmallstr!(GtfColumns::Frame.as_str()), self.frames)
                .into_column(),
        ]
    }
}

/// Accumulates attribute columns across records.
///
/// The column set grows as new keys are discovered, while every buffer is
/// kept at the same length as the number of records processed so far. The
/// layout is an arena of cell buffers plus a key index: `index` maps a key
/// to its buffer position in order of first appearance, and `height` is the
/// ledger used to backfill nulls for any column created after row 0.
///
/// Within one record, the first occurrence of a key produces a scalar cell,
/// later occurrences promote it to a list in encounter order. Accumulation
/// never fails: a record whose attributes field decodes to zero pairs simply
/// contributes a null cell to every column.
#[derive(Debug, Default)]
pub(crate) struct AttrColumns {
    index:   IndexMap<String, usize>,
    buffers: Vec<Vec<AttrValue>>,
    height:  usize,
}

impl AttrColumns {
    /// Consumes one record's attribute pairs and closes its row.
    pub(crate) fn append<'a, I>(
        &mut self,
        pairs: I,
    ) where
        I: Iterator<Item = (&'a str, &'a str)>, {
        for (key, value) in pairs {
            let idx = match self.index.get(key) {
                Some(&idx) => idx,
                None => {
                    // First sighting of this key anywhere in the file: open
                    // a column, backfilled with nulls for all prior rows.
                    let idx = self.buffers.len();
                    self.index.insert(key.to_string(), idx);
                    self.buffers
                        .push(vec![AttrValue::Null; self.height + 1]);
                    idx
                },
            };

            let buffer = &mut self.buffers[idx];
            if buffer.len() == self.height {
                // First occurrence of this key in the current row.
                buffer.push(AttrValue::Null);
            }
            buffer[self.height].push(value);
        }

        // Close the row: every column untouched by this record gets a null
        // cell so all buffers stay equal length.
        self.height += 1;
        for buffer in self.buffers.iter_mut() {
            if buffer.len() < self.height {
                buffer.push(AttrValue::Null);
            }
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn width(&self) -> usize {
        self.buffers.len()
    }

    /// Hands the accumulated cell buffers to Polars, one column per key in
    /// order of first appearance.
    ///
    /// Cells go over the boundary unmodified (null / scalar / list); dtype
    /// unification is the constructor's business. With non-strict conversion
    /// a column containing any list cell resolves to `List(String)`, while a
    /// never-repeated key stays a plain String column.
    pub(crate) fn into_columns(self) -> PolarsResult<Vec<Column>> {
        let Self { index, mut buffers, .. } = self;

        index
            .into_iter()
            .map(|(key, idx)| {
                let cells = std::mem::take(&mut buffers[idx])
                    .into_iter()
                    .map(AttrValue::into_any_value)
                    .collect::<Vec<_>>();
                Series::from_any_values(plsmallstr!(key), &cells, false)
                    .map(|series| series.into_column())
            })
            .collect()
    }
}

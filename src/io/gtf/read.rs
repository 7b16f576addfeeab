use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    Read,
};
use std::path::Path;

use log::{
    debug,
    info,
};
use polars::prelude::*;

use crate::data_structs::GtfRecord;
use crate::error::{
    GtfError,
    Result,
};
#[cfg(feature = "compression")]
use crate::io::compression::Compression;
use crate::io::gtf::columns::{
    AttrColumns,
    FixedColumns,
};

/// Configures and opens a [`GtfReader`] over a file path.
#[derive(Debug, Default, Clone)]
pub struct GtfReaderBuilder {
    #[cfg(feature = "compression")]
    compression: Option<Compression>,
}

impl GtfReaderBuilder {
    /// Forces a codec instead of detecting one from the file extension.
    #[cfg(feature = "compression")]
    pub fn with_compression(
        mut self,
        compression: Compression,
    ) -> Self {
        self.compression = Some(compression);
        self
    }

    fn get_file_handle(
        &self,
        path: &Path,
    ) -> Result<Box<dyn Read>> {
        let file = File::open(path)?;

        #[cfg(feature = "compression")]
        let handle = {
            let compression = self
                .compression
                .clone()
                .unwrap_or_else(|| Compression::detect(path));
            compression.get_decoder(file)?
        };

        // Compression feature not enabled
        #[cfg(not(feature = "compression"))]
        let handle = Box::new(file) as Box<dyn Read>;

        Ok(handle)
    }

    pub fn build<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<GtfReader<BufReader<Box<dyn Read>>>> {
        let handle = self.get_file_handle(path.as_ref())?;
        Ok(GtfReader::new(BufReader::new(handle)))
    }
}

/// Streams a GTF source into a Polars [`DataFrame`].
///
/// The read is a single synchronous pass: each line is tokenized, its
/// attribute pairs are folded into the growing column set, and the table is
/// assembled once the stream is exhausted. Output row order equals input
/// line order. The reader owns the stream and releases it when dropped,
/// including when [`finish`](GtfReader::finish) fails early.
pub struct GtfReader<R> {
    reader:      R,
    line:        String,
    line_number: usize,
    fixed:       FixedColumns,
    attrs:       AttrColumns,
}

impl<R: BufRead> GtfReader<R> {
    pub fn new(reader: R) -> Self {
        debug!("Creating new GtfReader");
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            fixed: FixedColumns::default(),
            attrs: AttrColumns::default(),
        }
    }

    /// Consumes the stream and assembles the final table.
    ///
    /// Fails with [`GtfError::MalformedRecord`] on the first line that
    /// cannot be minimally tokenized; no partial table is returned.
    /// Attribute-level oddities never fail the read.
    pub fn finish(mut self) -> Result<DataFrame> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                break;
            }
            self.line_number += 1;

            let line = self.line.trim_end_matches(['\n', '\r']);
            if GtfRecord::is_ignored(line) {
                continue;
            }

            let record = GtfRecord::parse(line).map_err(|source| {
                GtfError::MalformedRecord {
                    line_number: self.line_number,
                    line: line.to_string(),
                    source,
                }
            })?;

            self.fixed.append(&record);
            self.attrs.append(record.attributes());
        }

        let height = self.fixed.height();
        let attr_width = self.attrs.width();

        let mut columns = self.fixed.into_columns();
        columns.extend(self.attrs.into_columns()?);
        let df = DataFrame::new(columns)?;

        info!(
            "Assembled GTF table: {} rows, {} columns ({} from attributes)",
            height,
            df.width(),
            attr_width
        );
        Ok(df)
    }
}

/// Loads a Polars DataFrame from a GTF file path.
///
/// With the `compression` feature enabled, `.gz`, `.zst`, `.bz2`, `.xz` and
/// `.lz4` files are decoded transparently based on the extension.
pub fn read_gtf<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    GtfReaderBuilder::default().build(path)?.finish()
}

//! # gtfpolars
//!
//! `gtfpolars` loads Gene Transfer Format (GTF) genomic annotation files
//! into Polars DataFrames. GTF is a line-oriented, tab-delimited format
//! whose ninth column is a semi-structured free-text attributes field;
//! the whole point of this crate is decoding that field into proper
//! columns so annotations can be queried analytically instead of being
//! re-parsed ad hoc.
//!
//! The returned dataframe has the following fixed columns:
//!
//! * `seqname` - name of the chromosome or scaffold, with or without the
//!   `chr` prefix
//! * `source` - program or database that generated the feature
//! * `feature` - feature type name, e.g. `gene`, `exon`, `transcript`,
//!   `CDS`, `five_prime_utr`, ...
//! * `start` - 1-based start position of the feature (Int64)
//! * `end` - 1-based end position of the feature (Int64)
//! * `score` - floating point value, null when the file holds `.`
//! * `strand` - `+` (forward) or `-` (reverse), passed through verbatim
//! * `frame` - `0`, `1`, `2` or `.`, passed through verbatim
//!
//! plus one column per attribute key observed anywhere in the file, in
//! order of first appearance. Attribute keys vary by producer; from
//! Ensembl expect `gene_id`, `gene_name`, `gene_biotype`, `transcript_id`,
//! `exon_id`, `exon_number`, `protein_id`, `tag`, and friends.
//!
//! A key absent from a record yields a null in that row. A key a record
//! repeats (`tag` is the usual offender) yields a list cell with the
//! values in encounter order; such a column resolves to `List(String)`,
//! while a key no record repeats stays a plain String column.
//!
//! ## Reading a file
//!
//! ```no_run
//! use gtfpolars::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let gtf = read_gtf("annotation.gtf")?;
//!     let transcripts = gtf.column("transcript_id")?;
//!     println!("{} records, {} with a transcript", gtf.height(), {
//!         gtf.height() - transcripts.null_count()
//!     });
//!     Ok(())
//! }
//! ```
//!
//! With the `compression` feature enabled, `read_gtf` transparently
//! decodes `.gtf.gz` (and `.zst`, `.bz2`, `.xz`, `.lz4`) paths.
//!
//! ## Reading from any line source
//!
//! ```
//! use std::io::Cursor;
//!
//! use gtfpolars::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let data = "chr1\tEnsembl\tgene\t100\t200\t.\t+\t.\tgene_id \"G1\";\n";
//!     let gtf = GtfReader::new(Cursor::new(data)).finish()?;
//!     assert_eq!(gtf.height(), 1);
//!     Ok(())
//! }
//! ```
//!
//! Malformed record lines (fewer than nine tab-separated fields, or
//! non-numeric coordinates) abort the read with
//! [`GtfError::MalformedRecord`](crate::error::GtfError) naming the line;
//! irregularities inside the attributes field never do, the offending
//! chunk is skipped instead.

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;

#[allow(unused_imports)]
use prelude::*;

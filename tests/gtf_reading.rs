use std::io::Cursor;
use std::path::PathBuf;

use gtfpolars::prelude::*;
use polars::prelude::*;
use rstest::*;

/// A small file exercising the attribute sub-grammar: quoted and unquoted
/// values, repeated keys, sparse keys, comments, blanks and an empty
/// attributes field.
const SAMPLE: &str = "\
#!genome-build GRCh38
chr1\tEnsembl\tgene\t100\t200\t.\t+\t.\tgene_id \"G1\"; gene_name \"Alpha\"; tag \"basic\"; tag \"CCDS\";

chr1\tEnsembl\ttranscript\t100\t180\t0.5\t+\t.\tgene_id \"G1\"; transcript_id \"T1\"; exon_number 1;
# inner comment
chr2\thavana\tgene\t300\t400\t.\t-\t.\tgene_id \"G2\";
chr2\thavana\texon\t300\t350\t.\t-\t0\t
";

fn read_sample() -> DataFrame {
    GtfReader::new(Cursor::new(SAMPLE)).finish().unwrap()
}

fn string_at(
    df: &DataFrame,
    column: &str,
    row: usize,
) -> Option<String> {
    match df.column(column).unwrap().get(row).unwrap() {
        AnyValue::Null => None,
        AnyValue::String(v) => Some(v.to_string()),
        AnyValue::StringOwned(v) => Some(v.to_string()),
        other => panic!("unexpected cell {:?}", other),
    }
}

fn list_at(
    df: &DataFrame,
    column: &str,
    row: usize,
) -> Option<Vec<String>> {
    let series = df
        .column(column)
        .unwrap()
        .as_materialized_series()
        .list()
        .unwrap()
        .get_as_series(row)?;
    Some(
        series
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap().to_string())
            .collect(),
    )
}

#[rstest]
fn test_one_row_per_record_in_input_order() {
    let df = read_sample();

    assert_eq!(df.height(), 4);
    let features = df
        .column("feature")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(features, vec!["gene", "transcript", "gene", "exon"]);
}

#[rstest]
fn test_column_set_is_fixed_plus_key_union() {
    let df = read_sample();

    let expected = vec![
        "seqname",
        "source",
        "feature",
        "start",
        "end",
        "score",
        "strand",
        "frame",
        // attribute keys in order of first appearance
        "gene_id",
        "gene_name",
        "tag",
        "transcript_id",
        "exon_number",
    ];
    assert_eq!(df.get_column_names_str(), expected);
}

#[rstest]
fn test_fixed_columns_match_schema() {
    let df = read_sample();

    for (name, dtype) in GtfColumns::schema().iter() {
        assert_eq!(df.column(name.as_str()).unwrap().dtype(), dtype);
    }
}

#[rstest]
fn test_fixed_field_values() {
    let df = read_sample();

    assert_eq!(string_at(&df, "seqname", 0).unwrap(), "chr1");
    assert_eq!(string_at(&df, "source", 3).unwrap(), "havana");
    assert_eq!(
        df.column("start")
            .unwrap()
            .i64()
            .unwrap()
            .to_vec(),
        vec![Some(100), Some(100), Some(300), Some(300)]
    );
    assert_eq!(
        df.column("end")
            .unwrap()
            .i64()
            .unwrap()
            .to_vec(),
        vec![Some(200), Some(180), Some(400), Some(350)]
    );
    assert_eq!(
        df.column("score")
            .unwrap()
            .f64()
            .unwrap()
            .to_vec(),
        vec![None, Some(0.5), None, None]
    );
    assert_eq!(string_at(&df, "strand", 2).unwrap(), "-");
    assert_eq!(string_at(&df, "frame", 3).unwrap(), "0");
}

#[rstest]
fn test_scalar_cells_stay_scalar() {
    let df = read_sample();

    // gene_id never repeats within a record, so the column stays String.
    assert_eq!(df.column("gene_id").unwrap().dtype(), &DataType::String);
    assert_eq!(string_at(&df, "gene_id", 0).unwrap(), "G1");
    assert_eq!(string_at(&df, "gene_id", 2).unwrap(), "G2");
}

#[rstest]
fn test_repeated_key_becomes_list_in_encounter_order() {
    let df = read_sample();

    assert_eq!(
        df.column("tag").unwrap().dtype(),
        &DataType::List(Box::new(DataType::String))
    );
    assert_eq!(list_at(&df, "tag", 0).unwrap(), vec!["basic", "CCDS"]);
    assert_eq!(list_at(&df, "tag", 1), None);
}

#[rstest]
fn test_absent_key_yields_null() {
    let df = read_sample();

    assert_eq!(string_at(&df, "gene_name", 1), None);
    assert_eq!(string_at(&df, "transcript_id", 0), None);
    assert_eq!(df.column("transcript_id").unwrap().null_count(), 3);
}

#[rstest]
fn test_unquoted_value_kept_as_is() {
    let df = read_sample();
    assert_eq!(string_at(&df, "exon_number", 1).unwrap(), "1");
}

#[rstest]
fn test_empty_attribute_field_contributes_all_null_row() {
    let df = read_sample();

    for key in [
        "gene_id",
        "gene_name",
        "tag",
        "transcript_id",
        "exon_number",
    ] {
        assert!(
            matches!(df.column(key).unwrap().get(3).unwrap(), AnyValue::Null),
            "expected null {} cell for the empty attributes record",
            key
        );
    }
}

#[rstest]
fn test_rereading_is_deterministic() {
    let first = read_sample();
    let second = read_sample();
    assert!(first.equals_missing(&second));
}

#[rstest]
#[case::too_few_fields("chr1\tEnsembl\tgene\t100\t200\t.\t+", 4)]
#[case::non_numeric_start("chr1\tEnsembl\tgene\tx\t200\t.\t+\t.\t", 4)]
#[case::non_numeric_end("chr1\tEnsembl\tgene\t100\ty\t.\t+\t.\t", 4)]
fn test_malformed_record_reports_line_number(
    #[case] bad_line: &str,
    #[case] expected_line_number: usize,
) {
    // Line 1 is a comment and line 3 is blank; both still count toward
    // the reported line number.
    let input = format!(
        "# header\nchr1\tEnsembl\tgene\t1\t2\t.\t+\t.\tgene_id \"G1\";\n\n{}\n",
        bad_line
    );

    let err = GtfReader::new(Cursor::new(input)).finish().unwrap_err();
    match err {
        GtfError::MalformedRecord {
            line_number, line, ..
        } => {
            assert_eq!(line_number, expected_line_number);
            assert_eq!(line, bad_line);
        },
        other => panic!("expected MalformedRecord, got {}", other),
    }
}

#[rstest]
fn test_comment_only_input_yields_empty_table() {
    let df = GtfReader::new(Cursor::new("# a\n\n## b\n"))
        .finish()
        .unwrap();

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 8);
}

#[rstest]
fn test_read_fixture_file() -> anyhow::Result<()> {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.gtf");
    let df = read_gtf(&path)?;

    assert_eq!(df.height(), 5);
    assert_eq!(string_at(&df, "gene_name", 0).unwrap(), "Xkr4");
    assert_eq!(
        list_at(&df, "tag", 1).unwrap(),
        vec!["basic", "Ensembl_canonical"]
    );
    // Reading the same path twice yields the same table.
    assert!(df.equals_missing(&read_gtf(&path)?));
    Ok(())
}

#[cfg(feature = "compression")]
mod compressed {
    use std::io::Write;

    use super::*;
    use flate2::write::GzEncoder;

    #[rstest]
    fn test_read_gzipped_by_extension() -> anyhow::Result<()> {
        let file = tempfile::Builder::new()
            .suffix(".gtf.gz")
            .tempfile()?;

        let mut encoder = GzEncoder::new(file.reopen()?, flate2::Compression::default());
        encoder.write_all(SAMPLE.as_bytes())?;
        encoder.finish()?;

        let df = read_gtf(file.path())?;
        assert!(df.equals_missing(&read_sample()));
        Ok(())
    }

    #[rstest]
    fn test_explicit_compression_overrides_detection() -> anyhow::Result<()> {
        let file = tempfile::Builder::new().suffix(".gtf").tempfile()?;

        let mut encoder = GzEncoder::new(file.reopen()?, flate2::Compression::default());
        encoder.write_all(SAMPLE.as_bytes())?;
        encoder.finish()?;

        let df = GtfReaderBuilder::default()
            .with_compression(Compression::Gz)
            .build(file.path())?
            .finish()?;
        assert!(df.equals_missing(&read_sample()));
        Ok(())
    }
}

use name_normalizer::tabular::{ColumnNormalizer, ColumnSummary, CsvNormalizeError};
use std::io::Write;

const ROSTER: &str = "Id,Name,Team\n\
1,  Alice Smith ,Blue\n\
2,BOB,Red\n\
3,carol,Blue\n";

fn read_rows(output: Vec<u8>) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(&output[..]);
    reader
        .records()
        .map(|record| {
            record
                .expect("output is valid csv")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn appends_key_column_and_keeps_source() {
    let normalizer = ColumnNormalizer::new("Name").with_output_column("name_key");
    let mut out = Vec::new();
    let summary = normalizer
        .rewrite_reader(ROSTER.as_bytes(), &mut out)
        .expect("roster rewrites");

    assert_eq!(
        read_rows(out),
        vec![
            vec!["Id", "Name", "Team", "name_key"],
            vec!["1", "  Alice Smith ", "Blue", "alice_smith"],
            vec!["2", "BOB", "Red", "bob"],
            vec!["3", "carol", "Blue", "carol"],
        ]
    );
    assert_eq!(summary, ColumnSummary { rows: 3, changed: 2 });
}

#[test]
fn source_column_keeps_its_padding() {
    let normalizer = ColumnNormalizer::new("Name").with_output_column("key");
    let mut out = Vec::new();
    normalizer
        .rewrite_reader("Name\n  Bob  \n".as_bytes(), &mut out)
        .expect("single column rewrites");

    assert_eq!(read_rows(out), vec![vec!["Name", "key"], vec!["  Bob  ", "bob"]]);
}

#[test]
fn other_columns_round_trip_unchanged() {
    let normalizer = ColumnNormalizer::new("Name");
    let mut out = Vec::new();
    normalizer
        .rewrite_reader(
            "Id,Name,Note\n1,Bob,\"  keep me  \"\n 2 ,  Ann Lee ,\"a, b\"\n".as_bytes(),
            &mut out,
        )
        .expect("notes rewrite");

    assert_eq!(
        read_rows(out),
        vec![
            vec!["Id", "Name", "Note"],
            vec!["1", "bob", "  keep me  "],
            vec![" 2 ", "ann_lee", "a, b"],
        ]
    );
}

#[test]
fn unknown_column_lists_available_headers() {
    let normalizer = ColumnNormalizer::new("Email");
    let err = normalizer
        .rewrite_reader(ROSTER.as_bytes(), Vec::new())
        .expect_err("missing column is rejected");

    match err {
        CsvNormalizeError::MissingColumn { column, available } => {
            assert_eq!(column, "Email");
            assert_eq!(available, "Id, Name, Team");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn output_column_must_be_new() {
    let normalizer = ColumnNormalizer::new("Name").with_output_column("Team");
    let err = normalizer
        .rewrite_reader(ROSTER.as_bytes(), Vec::new())
        .expect_err("duplicate column is rejected");
    assert!(matches!(err, CsvNormalizeError::DuplicateColumn(ref name) if name == "Team"));
}

#[test]
fn ragged_rows_surface_as_csv_errors() {
    let normalizer = ColumnNormalizer::new("Name");
    let err = normalizer
        .rewrite_reader("Id,Name\n1,Alice,extra\n".as_bytes(), Vec::new())
        .expect_err("ragged row is rejected");
    assert!(matches!(err, CsvNormalizeError::Csv(_)));
}

#[test]
fn reads_from_a_file_path() {
    let path = std::env::temp_dir().join(format!("name-normalizer-{}.csv", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).expect("temp file created");
        file.write_all(b"Name\nJane Doe\n").expect("temp file written");
    }

    let mut out = Vec::new();
    let summary = ColumnNormalizer::new("Name")
        .rewrite_path(&path, &mut out)
        .expect("file rewrites");
    std::fs::remove_file(&path).ok();

    assert_eq!(summary.rows, 1);
    assert_eq!(String::from_utf8(out).expect("utf8 output"), "Name\njane_doe\n");
}

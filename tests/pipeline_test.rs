//! End-to-end pipeline tests
//!
//! Fixtures are written with rust_xlsxwriter and outputs verified with
//! calamine, so the tests exercise the same spreadsheet stack as the
//! pipeline itself.

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use survey_words::export::{
    IMPROVEMENT_ADJECTIVES_FILE, IMPROVEMENT_NOUNS_FILE, STRENGTH_ADJECTIVES_FILE,
    STRENGTH_NOUNS_FILE,
};
use survey_words::pipeline::{self, RunRequest};
use survey_words::ExtractError;
use tempfile::tempdir;

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

fn write_fixture(path: &Path, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (row, cells) in rows.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet
                        .write_string(row as u32 + 1, col as u16, *text)
                        .unwrap();
                }
                Cell::Number(value) => {
                    worksheet
                        .write_number(row as u32 + 1, col as u16, *value)
                        .unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Read a single-column output file back: (header, data rows).
fn read_word_file(path: &Path) -> (String, Vec<String>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    let mut rows = range.rows().map(|row| match row.first() {
        Some(Data::String(s)) => s.clone(),
        other => panic!("unexpected cell: {other:?}"),
    });
    let header = rows.next().unwrap_or_default();
    (header, rows.collect())
}

fn request(input: &Path, output: &Path) -> RunRequest {
    RunRequest {
        input_file: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        model_dir: None,
    }
}

fn survey_fixture(path: &Path) {
    write_fixture(
        path,
        &["Respondent", "Areas to Improve", "Key Strengths"],
        &[
            vec![
                Cell::Number(1.0),
                Cell::Text("Slow communication between teams."),
                Cell::Text("Great teamwork and strong leadership."),
            ],
            vec![
                Cell::Number(2.0),
                Cell::Text("The documentation is outdated."),
                Cell::Text("Helpful support staff."),
            ],
            vec![
                Cell::Number(3.0),
                Cell::Text("Long meetings waste valuable time."),
                Cell::Blank,
            ],
        ],
    );
}

#[test]
fn test_end_to_end_success() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.xlsx");
    let output = dir.path().join("out");
    survey_fixture(&input);

    let mut progress = Vec::new();
    let status = pipeline::run_to_status(&request(&input, &output), |msg| {
        progress.push(msg.to_string());
    });

    assert_eq!(
        status,
        "✅ Extracted 3 improvement rows and 2 strength rows."
    );
    assert!(progress.iter().all(|msg| msg.starts_with("🔄")));
    assert!(progress.iter().any(|msg| msg.contains("Identifying")));
    assert!(progress.iter().any(|msg| msg.contains("Excel")));

    let (header, words) = read_word_file(&output.join(IMPROVEMENT_ADJECTIVES_FILE));
    assert_eq!(header, "Adjectives");
    assert_eq!(words, vec!["Slow", "outdated", "Long", "valuable"]);

    let (header, words) = read_word_file(&output.join(IMPROVEMENT_NOUNS_FILE));
    assert_eq!(header, "Nouns");
    assert_eq!(
        words,
        vec!["communication", "teams", "documentation", "meetings", "time"]
    );

    let (header, words) = read_word_file(&output.join(STRENGTH_ADJECTIVES_FILE));
    assert_eq!(header, "Adjectives");
    assert_eq!(words, vec!["Great", "strong", "Helpful"]);

    let (header, words) = read_word_file(&output.join(STRENGTH_NOUNS_FILE));
    assert_eq!(header, "Nouns");
    assert_eq!(words, vec!["teamwork", "leadership", "support", "staff"]);
}

#[test]
fn test_output_folder_is_created() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.xlsx");
    let output = dir.path().join("nested").join("out");
    survey_fixture(&input);

    assert!(!output.exists());
    let summary = pipeline::run(&request(&input, &output), |_| {}).unwrap();
    assert_eq!(summary.improvement_rows, 3);
    assert_eq!(summary.strength_rows, 2);
    assert!(output.join(STRENGTH_NOUNS_FILE).exists());
}

#[test]
fn test_rerun_overwrites_deterministically() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.xlsx");
    let output = dir.path().join("out");
    survey_fixture(&input);

    pipeline::run(&request(&input, &output), |_| {}).unwrap();
    let first = read_word_file(&output.join(IMPROVEMENT_NOUNS_FILE));
    pipeline::run(&request(&input, &output), |_| {}).unwrap();
    let second = read_word_file(&output.join(IMPROVEMENT_NOUNS_FILE));

    assert_eq!(first, second);
}

#[test]
fn test_non_text_column_yields_empty_buckets() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("numbers.xlsx");
    let output = dir.path().join("out");
    write_fixture(
        &input,
        &["Improve", "Strengths"],
        &[
            vec![Cell::Number(1.0), Cell::Text("great support")],
            vec![Cell::Number(2.0), Cell::Text("strong team")],
        ],
    );

    let summary = pipeline::run(&request(&input, &output), |_| {}).unwrap();
    assert_eq!(summary.improvement_rows, 2);
    assert_eq!(summary.strength_rows, 2);

    let (header, words) = read_word_file(&output.join(IMPROVEMENT_ADJECTIVES_FILE));
    assert_eq!(header, "Adjectives");
    assert!(words.is_empty());
    let (_, words) = read_word_file(&output.join(IMPROVEMENT_NOUNS_FILE));
    assert!(words.is_empty());
}

#[test]
fn test_missing_improvement_column_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.xlsx");
    let output = dir.path().join("out");
    write_fixture(
        &input,
        &["Name", "Key Strengths"],
        &[vec![Cell::Text("A"), Cell::Text("great support")]],
    );

    let status = pipeline::run_to_status(&request(&input, &output), |_| {});
    assert!(status.starts_with("❌ Missing improvement keyword"));
    assert!(status.contains("Name"));
    assert!(status.contains("Key Strengths"));
    assert!(!output.join(IMPROVEMENT_ADJECTIVES_FILE).exists());
    assert!(!output.join(STRENGTH_ADJECTIVES_FILE).exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does-not-exist.xlsx");
    let output = dir.path().join("out");

    let err = pipeline::run(&request(&input, &output), |_| {}).unwrap_err();
    assert!(matches!(err, ExtractError::InputMissing(_)));
    let status = pipeline::run_to_status(&request(&input, &output), |_| {});
    assert!(status.starts_with("❌ Input file does not exist"));
}

#[test]
fn test_bad_model_dir_is_model_load_failure() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("survey.xlsx");
    let output = dir.path().join("out");
    survey_fixture(&input);

    let empty_model_dir = dir.path().join("model");
    std::fs::create_dir(&empty_model_dir).unwrap();

    let mut request = request(&input, &output);
    request.model_dir = Some(empty_model_dir);
    let err = pipeline::run(&request, |_| {}).unwrap_err();
    assert!(matches!(err, ExtractError::ModelLoad(_)));
    assert!(!output.join(IMPROVEMENT_ADJECTIVES_FILE).exists());
}

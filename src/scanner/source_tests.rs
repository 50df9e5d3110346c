use std::fs;

use tempfile::TempDir;

use super::*;

// ============================================================================
// Candidate extraction
// ============================================================================

#[test]
fn candidate_takes_first_twelve_characters() {
    assert_eq!(candidate("USRC176078390 trailing"), "USRC17607839");
    assert_eq!(candidate("USRC17607839"), "USRC17607839");
}

#[test]
fn candidate_keeps_short_input_whole() {
    assert_eq!(candidate("notanisrc"), "notanisrc");
    assert_eq!(candidate(""), "");
}

#[test]
fn candidate_counts_characters_not_bytes() {
    let raw = "ÜSRC17607839XYZ";
    assert_eq!(candidate(raw).chars().count(), 12);
    assert_eq!(candidate(raw), "ÜSRC17607839");
}

#[test]
fn terminators_are_stripped() {
    assert_eq!(strip_terminator("USRC17607839\n"), "USRC17607839");
    assert_eq!(strip_terminator("USRC17607839\r\n"), "USRC17607839");
    assert_eq!(strip_terminator("USRC17607839"), "USRC17607839");
    assert_eq!(strip_terminator("\n"), "");
}

// ============================================================================
// File source
// ============================================================================

#[test]
fn file_source_reads_one_candidate_per_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("isrc.txt");
    fs::write(&path, "USRC17607839\nFRXYZ1234567\r\n12ABCDEFGHIJ\n").unwrap();

    let candidates = InputSource::File(path).candidates().unwrap();
    assert_eq!(
        candidates,
        vec!["USRC17607839", "FRXYZ1234567", "12ABCDEFGHIJ"]
    );
}

#[test]
fn file_source_keeps_blank_lines_and_last_line_without_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("isrc.txt");
    fs::write(&path, "USRC17607839\n\nFRXYZ1234567").unwrap();

    let candidates = InputSource::File(path).candidates().unwrap();
    assert_eq!(candidates, vec!["USRC17607839", "", "FRXYZ1234567"]);
}

#[test]
fn empty_file_has_no_candidates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert!(InputSource::File(path).candidates().unwrap().is_empty());
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"US\xffC17607839\nUSRC17607839\n").unwrap();

    let candidates = InputSource::File(path).candidates().unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].contains('\u{FFFD}'));
    assert_eq!(candidates[1], "USRC17607839");
}

#[test]
fn missing_file_is_invalid_input_path() {
    let dir = TempDir::new().unwrap();
    let source = InputSource::File(dir.path().join("missing.txt"));

    let err = source.candidates().unwrap_err();
    assert!(matches!(
        err,
        IsrcError::InvalidInputPath {
            kind: InputKind::File,
            ..
        }
    ));
}

#[test]
fn directory_given_as_file_is_invalid() {
    let dir = TempDir::new().unwrap();
    let err = InputSource::File(dir.path().to_path_buf()).check().unwrap_err();
    assert!(matches!(err, IsrcError::InvalidInputPath { .. }));
}

// ============================================================================
// Directory source
// ============================================================================

#[test]
fn directory_entries_are_candidates_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    for name in ["notanisrc", "GBUM71505078", "DEA123456789"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    let candidates = InputSource::Directory(dir.path().to_path_buf())
        .candidates()
        .unwrap();
    assert_eq!(candidates, vec!["DEA123456789", "GBUM71505078", "notanisrc"]);
}

#[test]
fn directory_listing_is_not_recursive_but_includes_subdirs_and_hidden() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("USRC17607839")).unwrap();
    fs::write(dir.path().join("USRC17607839").join("FRXYZ1234567"), "").unwrap();
    fs::write(dir.path().join(".hidden"), "").unwrap();

    let candidates = InputSource::Directory(dir.path().to_path_buf())
        .candidates()
        .unwrap();
    assert_eq!(candidates, vec![".hidden", "USRC17607839"]);
}

#[test]
fn long_entry_names_are_truncated() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("GBUM71505078.flac"), "").unwrap();

    let candidates = InputSource::Directory(dir.path().to_path_buf())
        .candidates()
        .unwrap();
    assert_eq!(candidates, vec!["GBUM71505078"]);
}

#[test]
fn missing_directory_is_invalid_input_path() {
    let dir = TempDir::new().unwrap();
    let err = InputSource::Directory(dir.path().join("nope"))
        .candidates()
        .unwrap_err();
    assert!(matches!(
        err,
        IsrcError::InvalidInputPath {
            kind: InputKind::Directory,
            ..
        }
    ));
}

#[test]
fn file_given_as_directory_is_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("isrc.txt");
    fs::write(&path, "").unwrap();
    assert!(InputSource::Directory(path).check().is_err());
}

// ============================================================================
// In-memory source
// ============================================================================

#[test]
fn lines_source_needs_no_filesystem() {
    let source = InputSource::Lines(vec![
        "USRC17607839\n".to_string(),
        "FRXYZ1234567 extra".to_string(),
    ]);
    assert_eq!(
        source.candidates().unwrap(),
        vec!["USRC17607839", "FRXYZ1234567"]
    );
    assert_eq!(source.describe(), "Input lines: 2");
}

#[test]
fn describe_names_the_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("isrc.txt");
    fs::write(&path, "").unwrap();

    assert!(InputSource::File(path).describe().starts_with("Input file: "));
    assert!(
        InputSource::Directory(dir.path().to_path_buf())
            .describe()
            .starts_with("Directory to analyse: ")
    );
}

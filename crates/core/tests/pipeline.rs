//! File-level tests for the renumbering pipeline.

use slidefix_core::{fix_slide_numbers, Error, FixOutcome};
use std::fs;
use std::path::Path;

const FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="slide" data-slide="1"><div class="slide-number">1 / 5</div></div>
<div class="slide" data-slide="2"><div class="slide-number">2 / 5</div></div>
<div class="slide" data-slide="3"><div class="slide-number">3 / 5</div></div>
<div class="slide" data-slide="x"><div class="slide-number">x</div></div>
<div class="slide" data-slide="4"><div class="slide-number">4 / 5</div></div>
<div class="slide" data-slide="5"><div class="slide-number">5 / 5</div></div>
<script>
const totalSlides = 5;
</script>
</body>
</html>
"#;

fn write_fixture(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("presentation.html");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn fixes_presentation_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), FIXTURE);

    let outcome = fix_slide_numbers(&path).unwrap();
    let report = outcome.report().expect("file should have been updated");

    assert_eq!(report.placeholder_position, 4);
    assert_eq!(report.new_total, 6);
    assert_eq!(report.marker_replacements, 3);
    assert_eq!(report.display_replacements, 6);

    let result = fs::read_to_string(&path).unwrap();
    assert!(result.contains(r#"data-slide="4"><div class="slide-number">4 / 6</div>"#));
    assert!(result.contains(r#"data-slide="5"><div class="slide-number">5 / 6</div>"#));
    assert!(result.contains(r#"data-slide="6"><div class="slide-number">6 / 6</div>"#));
    assert!(result.contains("const totalSlides = 6;"));
    assert!(!result.contains(r#"data-slide="x""#));
}

#[test]
fn second_run_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), FIXTURE);

    fix_slide_numbers(&path).unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    let outcome = fix_slide_numbers(&path).unwrap();
    assert_eq!(outcome, FixOutcome::NoPlaceholder);

    let after_second = fs::read_to_string(&path).unwrap();
    assert_eq!(after_first, after_second);
}

#[test]
fn file_without_placeholder_left_untouched() {
    let fixture = FIXTURE.replace(
        r#"<div class="slide" data-slide="x"><div class="slide-number">x</div></div>"#,
        "",
    );
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), &fixture);

    let outcome = fix_slide_numbers(&path).unwrap();
    assert_eq!(outcome, FixOutcome::NoPlaceholder);
    assert_eq!(fs::read_to_string(&path).unwrap(), fixture);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.html");

    let err = fix_slide_numbers(&path).unwrap_err();
    assert!(matches!(err, Error::MissingFile(p) if p == path));
}

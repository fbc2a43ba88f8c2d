use std::process::{Command, Output};

use rstest::rstest;

const EXPECTED_REPORT: &str = include_str!("test_data/event_selectors.txt");

fn run_event_selectors(rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_event-selectors"))
        .env("RUST_LOG", rust_log)
        .output()
        .expect("failed to run event-selectors")
}

#[rstest]
#[case::debug("debug")]
#[case::trace("trace")]
#[case::empty("")]
fn test_binary_prints_only_the_report_on_stdout(#[case] rust_log: &str) {
    // When
    let output = run_event_selectors(rust_log);

    // Then
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_REPORT);
}

#[test]
fn test_binary_logs_to_stderr() {
    // When
    let output = run_event_selectors("debug");

    // Then
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("derived event selector"));
    assert!(stderr.contains("wrote event selector report"));
}

#[test]
fn test_binary_output_is_identical_across_runs() {
    // When
    let first = run_event_selectors("debug");
    let second = run_event_selectors("debug");

    // Then
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout.iter().filter(|&&b| b == b'\n').count(), 9);
}

#[rstest]
#[case::unknown_level("foo=bogus")]
#[case::garbage("[[not a filter")]
fn test_binary_ignores_invalid_log_filter(#[case] rust_log: &str) {
    // When
    let output = run_event_selectors(rust_log);

    // Then
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED_REPORT);
}

use std::fs;

use crate::common::{fixture, run, stderr_of, stdout_of, Workspace};

const EMPTY_INPUT_MESSAGE: &str =
    "Input cannot be empty. Please provide a comma-separated list of files to validate.";
const NO_VALID_FILES_MESSAGE: &str =
    "No valid files found in input. Please provide a comma-separated list of file names.";

#[test]
fn succeeds_when_all_files_exist() {
    let workspace = Workspace::with_files(&["file1.txt", "file2.txt"]);
    let output_file = workspace.output_file();

    let output = run(workspace
        .command()
        .env("GITHUB_ACTIONS", "true")
        .env("GITHUB_OUTPUT", &output_file)
        .env("INPUT_REQUIRED-FILES", "file1.txt,file2.txt"));

    assert!(output.status.success(), "stdout: {}", stdout_of(&output));
    assert!(!stdout_of(&output).contains("::error::"));

    let written = fs::read_to_string(&output_file).expect("can read output file");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3, "output file: {written}");
    assert!(
        lines[0].starts_with("exists<<ghadelimiter_"),
        "output file: {written}"
    );
    assert_eq!(lines[1], "true");
}

#[test]
fn fails_when_files_are_missing() {
    let workspace = Workspace::with_files(&["file1.txt"]);
    let output_file = workspace.output_file();

    let output = run(workspace
        .command()
        .args(["--host", "actions"])
        .env("GITHUB_OUTPUT", &output_file)
        .env("INPUT_REQUIRED-FILES", "file1.txt,missing.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "::error::The following files do not exist: missing.txt\n"
    );
    let written = fs::read_to_string(&output_file).expect("can read output file");
    assert!(written.is_empty(), "no output expected, got: {written}");
}

#[test]
fn empty_input_reports_parser_message() {
    let workspace = Workspace::with_files(&[]);
    let output_file = workspace.output_file();

    let output = run(workspace
        .command()
        .args(["--host", "actions"])
        .env("GITHUB_OUTPUT", &output_file)
        .env("INPUT_REQUIRED-FILES", ""));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        format!("::error::{EMPTY_INPUT_MESSAGE}\n")
    );
    let written = fs::read_to_string(&output_file).expect("can read output file");
    assert!(written.is_empty(), "no output expected, got: {written}");
}

#[test]
fn comma_only_input_reports_parser_message() {
    let workspace = Workspace::with_files(&[]);

    let output = run(workspace
        .command()
        .args(["--host", "actions"])
        .env("INPUT_REQUIRED-FILES", ",,,"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        format!("::error::{NO_VALID_FILES_MESSAGE}\n")
    );
}

#[test]
fn absent_input_fails_the_step() {
    let workspace = Workspace::with_files(&[]);

    let output = run(workspace.command().args(["--host", "actions"]));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "::error::Input required and not supplied: required-files\n"
    );
}

#[test]
fn legacy_set_output_without_output_file() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace
        .command()
        .args(["--host", "actions"])
        .env("INPUT_REQUIRED-FILES", "file1.txt"));

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\n::set-output name=exists::true\n");
}

#[test]
fn runner_debug_surfaces_per_file_diagnostics() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace
        .command()
        .env_remove("RUST_LOG")
        .env("RUNNER_DEBUG", "1")
        .args(["--host", "actions"])
        .env("INPUT_REQUIRED-FILES", "file1.txt,missing.txt"));

    let stderr = stderr_of(&output);
    let exists_at = stderr
        .find("File exists: file1.txt")
        .unwrap_or_else(|| panic!("missing exists diagnostic: {stderr}"));
    let missing_at = stderr
        .find("File does not exist: missing.txt")
        .unwrap_or_else(|| panic!("missing does-not-exist diagnostic: {stderr}"));
    assert!(exists_at < missing_at, "diagnostics out of order: {stderr}");
}

#[test]
fn invalid_config_is_annotated_on_the_step() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace
        .command()
        .args(["--host", "actions", "--config"])
        .arg(fixture("config_invalid_concurrency.toml"))
        .env("INPUT_REQUIRED-FILES", "file1.txt"));

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("::error::"), "stdout: {stdout}");
    assert!(
        stdout.contains("checker.max_concurrent_probes"),
        "stdout: {stdout}"
    );
    assert!(stderr_of(&output).contains("checker.max_concurrent_probes"));
}

#[test]
fn unwritable_output_file_is_annotated_on_the_step() {
    let workspace = Workspace::with_files(&["file1.txt"]);
    let output_file = workspace.path().join("runner/missing/output");

    let output = run(workspace
        .command()
        .args(["--host", "actions"])
        .env("GITHUB_OUTPUT", &output_file)
        .env("INPUT_REQUIRED-FILES", "file1.txt"));

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    assert!(stdout.starts_with("::error::"), "stdout: {stdout}");
    assert!(!output_file.exists());
}

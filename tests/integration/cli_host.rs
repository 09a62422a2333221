use serde_json::{json, Value};

use crate::common::{fixture, run, stderr_of, stdout_of, Workspace};

#[test]
fn positional_input_succeeds_when_all_files_exist() {
    let workspace = Workspace::with_files(&["file1.txt", "file2.txt"]);

    let output = run(workspace.command().arg("file1.txt,file2.txt"));

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "exists=true\n");
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn missing_files_fail_with_one_message() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace.command().arg("file1.txt,missing.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert_eq!(
        stderr_of(&output),
        "The following files do not exist: missing.txt\n"
    );
}

#[test]
fn nested_absolute_and_directory_candidates_exist() {
    let workspace = Workspace::with_files(&["docs/guide.md"]);
    let absolute = workspace.path().join("docs/guide.md");
    let input = format!("docs, docs/guide.md ,{}", absolute.display());

    let output = run(workspace.command().arg(input));

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
}

#[test]
fn runner_input_is_used_without_positional_argument() {
    let workspace = Workspace::with_files(&[]);

    let output = run(workspace
        .command()
        .env("INPUT_REQUIRED-FILES", "a.txt,b.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "The following files do not exist: a.txt, b.txt\n"
    );
}

#[test]
fn json_format_reports_payloads() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let passed = run(workspace
        .command()
        .args(["--format", "json", "file1.txt"]));
    assert!(passed.status.success());
    let payload: Value = serde_json::from_slice(&passed.stdout).expect("stdout should be JSON");
    assert_eq!(
        payload,
        json!({"status": "passed", "outputs": {"exists": "true"}})
    );

    let failed = run(workspace.command().args(["--format", "json", ",,,"]));
    assert_eq!(failed.status.code(), Some(1));
    let payload: Value = serde_json::from_slice(&failed.stdout).expect("stdout should be JSON");
    assert_eq!(
        payload,
        json!({
            "status": "failed",
            "message": "No valid files found in input. Please provide a comma-separated list of file names."
        })
    );
}

#[test]
fn config_file_selects_json_report() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace
        .command()
        .env("FILE_CHECKER_CONFIG", fixture("config_json_report.toml"))
        .arg("file1.txt"));

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(payload["status"], "passed");
}

#[test]
fn format_flag_overrides_config() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let config = fixture("config_json_report.toml");

    let output = run(workspace
        .command()
        .arg("--config")
        .arg(&config)
        .args(["--format", "text", "file1.txt"]));

    assert_eq!(stdout_of(&output), "exists=true\n");
}

#[test]
fn invalid_config_aborts_before_checking() {
    let workspace = Workspace::with_files(&["file1.txt"]);

    let output = run(workspace
        .command()
        .arg("--config")
        .arg(fixture("config_invalid_concurrency.toml"))
        .arg("file1.txt"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).contains("checker.max_concurrent_probes"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[test]
fn help_lists_options() {
    let workspace = Workspace::with_files(&[]);

    let output = run(workspace.command().arg("--help"));

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    for needle in ["--host", "--config", "--format", "REQUIRED_FILES"] {
        assert!(
            stdout.contains(needle),
            "--help should list {needle}, got:\n{stdout}"
        );
    }
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn writes_all_three_artifacts_into_empty_docs() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("docs"))?;

    let mut cmd = Command::cargo_bin("optimizr-charts")?;
    cmd.current_dir(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Created: docs/worker-scaling.png"))
        .stdout(predicate::str::contains("Created: docs/memory-efficiency.png"))
        .stdout(predicate::str::contains("(ASCII fallback)"))
        .stdout(predicate::str::contains("![Worker Scaling](./docs/worker-scaling.png)"));

    let docs = dir.path().join("docs");
    let mut names: Vec<String> = fs::read_dir(&docs)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<Result<_, _>>()?;
    names.sort();
    assert_eq!(names, ["architecture.txt", "memory-efficiency.png", "worker-scaling.png"]);

    assert!(fs::metadata(docs.join("worker-scaling.png"))?.len() > 0);
    assert!(fs::metadata(docs.join("memory-efficiency.png"))?.len() > 0);
    let text = fs::read_to_string(docs.join("architecture.txt"))?;
    assert!(text.contains("GO-OPTIMIZR DATA FLOW"));

    Ok(())
}

#[test]
fn creates_docs_directory_when_missing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("optimizr-charts")?;
    cmd.current_dir(dir.path());
    cmd.assert().success();

    assert!(dir.path().join("docs").join("architecture.txt").is_file());
    Ok(())
}

#[test]
fn second_run_reproduces_the_diagram() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let diagram = dir.path().join("docs").join("architecture.txt");

    Command::cargo_bin("optimizr-charts")?
        .current_dir(dir.path())
        .assert()
        .success();
    let first = fs::read(&diagram)?;

    Command::cargo_bin("optimizr-charts")?
        .current_dir(dir.path())
        .assert()
        .success();
    let second = fs::read(&diagram)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn rejects_unexpected_arguments() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("optimizr-charts")?;
    cmd.current_dir(dir.path()).arg("--output-dir");
    cmd.assert().failure();

    assert!(!dir.path().join("docs").exists());
    Ok(())
}

#[test]
fn trace_output_goes_to_stderr_only() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = Command::cargo_bin("optimizr-charts")?;
    cmd.current_dir(dir.path()).env("OPTIMIZR_TRACE", "optimizr_charts_core=info");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("wrote architecture diagram"))
        .stdout(predicate::str::contains("wrote architecture diagram").not());

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn full_stdout_still_writes_every_artifact() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let full = fs::OpenOptions::new().write(true).open("/dev/full")?;

    let status = Command::cargo_bin("optimizr-charts")?
        .current_dir(dir.path())
        .stdout(full)
        .status()?;

    assert!(status.success());
    let docs = dir.path().join("docs");
    assert!(docs.join("architecture.txt").is_file());
    assert!(docs.join("worker-scaling.png").is_file());
    assert!(docs.join("memory-efficiency.png").is_file());
    Ok(())
}

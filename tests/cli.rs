//! End-to-end tests for the `dist-plotter` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn run(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dist-plotter"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// A valid file produces exactly `<output>.pdf` and nothing on stdout.
#[test]
fn test_plots_valid_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("1000_10_0.25.txt");
    fs::write(&input, "1,1,1,1\n10,20,30,40\n").unwrap();
    let base = dir.path().join("1000_10_0.25");

    let out = run(&[&input, &base]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    assert_eq!(
        file_names(dir.path()),
        vec!["1000_10_0.25.pdf".to_string(), "1000_10_0.25.txt".to_string()]
    );
    let pdf = fs::read(dir.path().join("1000_10_0.25.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

/// Simulation output carries a third line; it is ignored.
#[test]
fn test_ignores_extra_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("sim.txt");
    fs::write(&input, "40,30,20,10\n40,30,20,10\n400,300,200,100\n").unwrap();
    let base = dir.path().join("sim");

    let out = run(&[&input, &base]);
    assert!(out.status.success());
    assert!(dir.path().join("sim.pdf").exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.txt");
    let base = dir.path().join("out");

    let out = run(&[&input, &base]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.txt"));
    assert!(!dir.path().join("out.pdf").exists());
}

#[test]
fn test_length_mismatch_fails_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("uneven.txt");
    fs::write(&input, "1,2,3\n50,50\n").unwrap();
    let base = dir.path().join("uneven");

    let out = run(&[&input, &base]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("observed has 3 values but actual has 2"), "{stderr}");
    assert_eq!(file_names(dir.path()), vec!["uneven.txt".to_string()]);
}

#[test]
fn test_zero_sum_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("zero.txt");
    fs::write(&input, "0,0,0\n1,2,3\n").unwrap();

    let out = run(&[&input, &dir.path().join("zero")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("sum to 0"));
}

#[test]
fn test_non_numeric_token_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "1,2,x\n1,2,3\n").unwrap();

    let out = run(&[&input, &dir.path().join("bad")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("'x' is not a number"));
}

#[test]
fn test_huge_values_fail_without_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("huge.txt");
    fs::write(&input, "1,1\n1e308,-1e308\n").unwrap();

    let out = run(&[&input, &dir.path().join("huge")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("too wide"));
    assert_eq!(file_names(dir.path()), vec!["huge.txt".to_string()]);
}

#[test]
fn test_leading_blank_line_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blank.txt");
    fs::write(&input, "\n1,2\n3,4\n").unwrap();

    let out = run(&[&input, &dir.path().join("blank")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 1"));
    assert_eq!(file_names(dir.path()), vec!["blank.txt".to_string()]);
}

#[test]
fn test_requires_two_arguments() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "1\n100\n").unwrap();

    let out = run(&[&input]);
    assert!(!out.status.success());
    assert_eq!(file_names(dir.path()), vec!["in.txt".to_string()]);
}

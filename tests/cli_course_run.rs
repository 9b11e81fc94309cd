use std::path::PathBuf;
use std::process::{Command, Output};

fn fixture_path(rel: &str) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    base.join(rel)
}

fn run_groupcheck(args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_groupcheck");
    Command::new(exe)
        .args(args)
        .output()
        .expect("spawn groupcheck")
}

#[test]
fn course_run_prints_headers_and_numbered_lists() {
    let manifest = fixture_path("fixtures/course/course.json");
    let out = run_groupcheck(&["course", manifest.to_str().expect("utf8 path")]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert_eq!(
        stdout,
        "[1班]\n第1位: B19040104\n\n[2班]\n第1位: B19040202\n第2位: B19040203\n"
    );
}

#[test]
fn course_run_json_reports_counts_per_section() {
    let manifest = fixture_path("fixtures/course/course.json");
    let out = run_groupcheck(&["course", manifest.to_str().expect("utf8 path"), "--json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("parse json report");
    assert_eq!(v["course"], "嵌入式系统");

    let sections = v["sections"].as_array().expect("sections array");
    assert_eq!(sections.len(), 2);

    assert_eq!(sections[0]["section"], "1班");
    assert_eq!(sections[0]["rosterCount"], 6);
    assert_eq!(sections[0]["groupedCount"], 5);
    assert_eq!(sections[0]["unassigned"], serde_json::json!(["B19040104"]));

    assert_eq!(sections[1]["section"], "2班");
    assert_eq!(sections[1]["rosterCount"], 4);
    assert_eq!(sections[1]["groupedCount"], 2);
    assert_eq!(
        sections[1]["unassigned"],
        serde_json::json!(["B19040202", "B19040203"])
    );
}

#[test]
fn broken_course_fails_without_partial_output() {
    let manifest = fixture_path("fixtures/course/broken.json");
    let out = run_groupcheck(&["course", manifest.to_str().expect("utf8 path")]);
    assert!(!out.status.success());

    // Section 1 would have succeeded, but nothing of it may reach stdout.
    assert!(out.stdout.is_empty(), "partial output: {}", String::from_utf8_lossy(&out.stdout));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("2班"), "stderr: {}", stderr);
    assert!(stderr.contains("roster"), "stderr: {}", stderr);
}

#[test]
fn missing_manifest_fails_clearly() {
    let manifest = fixture_path("fixtures/course/nonexistent.json");
    let out = run_groupcheck(&["course", manifest.to_str().expect("utf8 path")]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("manifest"), "stderr: {}", stderr);
}

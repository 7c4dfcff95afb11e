//! Integration test: `needle show` against an artifact on disk.

use std::process::Command;

use needle_core::ConfigArtifact;
use serde_json::Value;

fn needle(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_needle"));
    cmd.current_dir(dir)
        .env_remove("NEEDLE_CONFIG")
        .env_remove("NEEDLE_LOG")
        .env_remove("RUST_LOG")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT");
    cmd
}

#[test]
fn show_prints_matrix_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = ConfigArtifact::new("Phosphate", 12)
        .with_glyph("A", vec![vec![255, 150], vec![90, 0]])
        .write_to_dir(dir.path().join("font_configs"))
        .unwrap();

    let out = needle(dir.path())
        .args(["--output", "json", "show", "--config"])
        .arg(&path)
        .args(["A", "Z"])
        .output()
        .expect("run needle");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let lines: Vec<Value> = String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    let data = lines
        .iter()
        .find(|l| l["level"] == "data" && l["message"] == "A")
        .expect("data line for A");
    assert_eq!(data["data"]["shape"], serde_json::json!([2, 2]));
    assert_eq!(data["data"]["gray_matrix"], serde_json::json!([[255, 150], [90, 0]]));

    assert!(lines
        .iter()
        .any(|l| l["level"] == "warning" && l["message"] == "Character 'Z' not found in config"));
}

#[test]
fn show_uses_default_artifact_path() {
    let dir = tempfile::tempdir().unwrap();
    ConfigArtifact::new("Phosphate", 12)
        .with_glyph("0", vec![vec![0]])
        .write_to_dir(dir.path().join("font_configs"))
        .unwrap();

    let out = needle(dir.path())
        .args(["-o", "json", "show", "0"])
        .output()
        .expect("run needle");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("\"gray_matrix\":[[0]]"));
}

#[test]
fn show_with_missing_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = needle(dir.path())
        .args(["show", "--config", "font_configs/Nope_12.json"])
        .output()
        .expect("run needle");
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("artifact not readable"),
        "stderr should explain the load failure; got: {}",
        stderr
    );
}

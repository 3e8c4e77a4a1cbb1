use std::path::PathBuf;
use std::process::Command;

use tempfile::tempdir;

fn symbols() -> Command {
    Command::new(env!("CARGO_BIN_EXE_symbols"))
}

#[test]
fn cli_writes_png_at_output_path() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.png");

    let status = symbols()
        .args(["-o", out_path.to_str().unwrap(), "-n", "12"])
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!((img.width(), img.height()), (900, 600));
}

#[test]
fn cli_default_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let paths: Vec<PathBuf> = ["a.png", "b.png"].iter().map(|n| dir.path().join(n)).collect();

    for path in &paths {
        let status = symbols()
            .args(["-o", path.to_str().unwrap()])
            .status()
            .unwrap();
        assert!(status.success());
    }

    let a = std::fs::read(&paths[0]).unwrap();
    let b = std::fs::read(&paths[1]).unwrap();
    assert!(a == b, "default-seed runs produced different images");
}

#[test]
fn cli_json_lists_every_shape() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.png");

    let output = symbols()
        .args(["-o", out_path.to_str().unwrap(), "-n", "14", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let shapes: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shapes.len(), 14);
    assert_eq!(shapes[0]["kind"], "rectangle");
    assert_eq!(shapes[1]["kind"], "circle");
    assert_eq!(shapes[6]["kind"], "line");
    assert_eq!(shapes[6]["mode"], "stroke");
    assert_eq!(shapes[13]["kind"], "line");
    for (i, shape) in shapes.iter().enumerate() {
        assert_eq!(shape["index"], i);
    }
}

#[test]
fn cli_status_goes_to_stderr() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("out.png");

    let output = symbols()
        .args(["-o", out_path.to_str().unwrap(), "-n", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Drawing"));
    assert!(stderr.contains("1 shape "));
    assert!(stderr.contains("Finished"));
}

#[test]
fn cli_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("missing").join("out.png");

    let status = symbols()
        .args(["-o", out_path.to_str().unwrap()])
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!out_path.exists());
}

#[test]
fn cli_rejects_bad_count() {
    let status = symbols().args(["-n", "lots"]).status().unwrap();
    assert_eq!(status.code(), Some(2));
}

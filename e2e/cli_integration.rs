// e2e/cli_integration.rs — CLI integration tests
//
// Drives the `brotli` binary as a black box with std::process::Command.
// Covers compress/decompress dispatch, output naming, stdout mode, test mode,
// overwrite protection, --rm, parallel jobs and exit codes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use brotli_stream::corpus::words;
use tempfile::TempDir;

/// Locate the `brotli` binary produced by Cargo.
fn brotli_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_brotli") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("brotli");
    p
}

fn make_input(dir: &Path, name: &str, size: usize, seed: u32) -> (PathBuf, Vec<u8>) {
    let path = dir.join(name);
    let content = words(size, seed);
    fs::write(&path, &content).unwrap();
    (path, content)
}

fn run(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(brotli_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("BROTLI_QUALITY")
        .output()
        .expect("failed to run brotli")
}

// ── 1. File round-trip with default naming ───────────────────────────────────

#[test]
fn compress_then_decompress_with_suffix_naming() {
    let dir = TempDir::new().unwrap();
    let (input, original) = make_input(dir.path(), "input.txt", 50_000, 1);

    let out = run(dir.path(), &["-q", "5", "input.txt"]);
    assert!(out.status.success(), "compress failed: {}", String::from_utf8_lossy(&out.stderr));
    let packed = dir.path().join("input.txt.br");
    assert!(packed.exists());
    assert!(input.exists(), "source kept without --rm");

    fs::remove_file(&input).unwrap();
    let out = run(dir.path(), &["-d", "input.txt.br"]);
    assert!(out.status.success(), "decompress failed: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&input).unwrap(), original);
}

// ── 2. stdin → stdout ────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_roundtrip() {
    let data = words(20_000, 2);

    let mut child = Command::new(brotli_bin())
        .args(["-q", "4", "--chunk-size", "1000", "--flush"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&data).unwrap();
    let packed = child.wait_with_output().unwrap();
    assert!(packed.status.success());

    let mut child = Command::new(brotli_bin())
        .args(["-d", "--output-limit", "512"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(&packed.stdout).unwrap();
    let plain = child.wait_with_output().unwrap();
    assert!(plain.status.success());
    assert_eq!(plain.stdout, data);
}

// ── 3. Test mode ─────────────────────────────────────────────────────────────

#[test]
fn test_mode_accepts_valid_and_rejects_corrupt() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "a.txt", 10_000, 3);
    assert!(run(dir.path(), &["a.txt"]).status.success());

    let out = run(dir.path(), &["-t", "a.txt.br"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    fs::write(dir.path().join("bad.br"), b"some random garbage").unwrap();
    let out = run(dir.path(), &["-t", "bad.br"]);
    assert!(!out.status.success());
    assert!(!out.stderr.is_empty());
}

// ── 4. Overwrite protection and --force ──────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "a.txt", 1_000, 4);
    fs::write(dir.path().join("a.txt.br"), b"occupied").unwrap();

    let out = run(dir.path(), &["a.txt"]);
    assert!(!out.status.success());
    assert_eq!(fs::read(dir.path().join("a.txt.br")).unwrap(), b"occupied");

    let out = run(dir.path(), &["-f", "a.txt"]);
    assert!(out.status.success());
    assert_ne!(fs::read(dir.path().join("a.txt.br")).unwrap(), b"occupied");
}

// ── 5. --rm and explicit output ──────────────────────────────────────────────

#[test]
fn rm_removes_source_after_success() {
    let dir = TempDir::new().unwrap();
    let (input, original) = make_input(dir.path(), "gone.txt", 5_000, 5);
    let out = run(dir.path(), &["--rm", "-o", "custom.br", "gone.txt"]);
    assert!(out.status.success());
    assert!(!input.exists());

    let out = run(dir.path(), &["-d", "-o", "back.txt", "custom.br"]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("back.txt")).unwrap(), original);
}

// ── 6. Parallel jobs ─────────────────────────────────────────────────────────

#[test]
fn parallel_jobs_compress_every_file() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..6).map(|i| format!("f{i}.txt")).collect();
    let originals: Vec<Vec<u8>> = names
        .iter()
        .enumerate()
        .map(|(i, n)| make_input(dir.path(), n, 8_000 + i * 100, i as u32).1)
        .collect();

    let mut args = vec!["-j", "3", "-q", "3"];
    args.extend(names.iter().map(String::as_str));
    assert!(run(dir.path(), &args).status.success());

    for (name, original) in names.iter().zip(&originals) {
        let packed = fs::read(dir.path().join(format!("{name}.br"))).unwrap();
        assert_eq!(&brotli_stream::decompress(&packed).unwrap(), original);
    }
}

// ── 7. Bad arguments ─────────────────────────────────────────────────────────

#[test]
fn invalid_quality_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "a.txt", 100, 6);
    let out = run(dir.path(), &["-q", "12", "a.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a valid quality"));
}

#[test]
fn unknown_suffix_on_decompress_fails() {
    let dir = TempDir::new().unwrap();
    make_input(dir.path(), "plain.txt", 100, 7);
    let out = run(dir.path(), &["-d", "plain.txt"]);
    assert!(!out.status.success());
}

// e2e/cli_integration.rs — black-box tests of the `lz4g` binary.
//
// Covers encode/decode round trips, the size command, stdin/stdout piping,
// dictionaries, multiple inputs, overwrite protection and exit codes.

#[path = "../tests/support/mod.rs"]
mod support;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use support::{lorem, random_bytes};

fn lz4g_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lz4g"))
}

fn run(args: &[&str]) -> Output {
    Command::new(lz4g_bin()).args(args).output().unwrap()
}

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(lz4g_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn p(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn make_input(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

// ── 1. Round trips ────────────────────────────────────────────────────────────

#[test]
fn encode_then_decode_with_default_names() {
    let dir = TempDir::new().unwrap();
    let data = lorem(50_000, 1);
    let input = make_input(&dir, "text.txt", &data);

    let out = run(&["encode", p(&input)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let packed = dir.path().join("text.txt.lz4");
    assert!(packed.exists());

    fs::remove_file(&input).unwrap();
    let out = run(&["decode", p(&packed)]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&input).unwrap(), data);
}

#[test]
fn tiny_chunks_and_small_window_flags() {
    let dir = TempDir::new().unwrap();
    let data = lorem(20_000, 2);
    let input = make_input(&dir, "in.txt", &data);
    let packed = dir.path().join("in.lz4");
    let restored = dir.path().join("restored.txt");

    assert!(run(&["encode", "-o", p(&packed), p(&input)]).status.success());
    let out = run(&[
        "decode", "--in-chunk", "1", "--out-chunk", "3", "-W", "64K", "-o", p(&restored),
        p(&packed),
    ]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn stdin_to_stdout() {
    let data = lorem(30_000, 3);
    let enc = run_with_stdin(&["encode", "-"], &data);
    assert!(enc.status.success());
    let dec = run_with_stdin(&["decode", "-"], &enc.stdout);
    assert!(dec.status.success());
    assert_eq!(dec.stdout, data);
}

#[test]
fn dictionary_flag() {
    let dir = TempDir::new().unwrap();
    let dict = random_bytes(3_000, 4);
    let mut data = dict[500..2_500].to_vec();
    data.extend_from_slice(&lorem(1_000, 5));
    let dict_path = make_input(&dir, "dict.bin", &dict);
    let input = make_input(&dir, "data.bin", &data);
    let packed = dir.path().join("data.bin.lz4");
    let restored = dir.path().join("restored.bin");

    assert!(run(&["encode", "-D", p(&dict_path), p(&input)]).status.success());

    let out = run(&["decode", "-D", p(&dict_path), "-o", p(&restored), p(&packed)]);
    assert!(out.status.success());
    assert_eq!(fs::read(&restored).unwrap(), data);

    let missing = dir.path().join("no-dict.bin");
    let out = run(&["decode", "-o", p(&missing), p(&packed)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ERROR_OUT_OF_PREFIX_BUFFER"));
}

// ── 2. Size command ───────────────────────────────────────────────────────────

#[test]
fn size_prints_decompressed_length() {
    let dir = TempDir::new().unwrap();
    let data = lorem(12_345, 6);
    let input = make_input(&dir, "s.txt", &data);
    assert!(run(&["encode", p(&input)]).status.success());

    let out = run(&["size", p(&dir.path().join("s.txt.lz4"))]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "12345");
}

#[test]
fn size_rejects_truncated_block() {
    let out = run_with_stdin(&["size", "-"], &[0x50, b'a', b'b']);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid LZ4 sequence"));
}

// ── 3. Multiple inputs ────────────────────────────────────────────────────────

#[test]
fn multiple_inputs_decode_next_to_sources() {
    let dir = TempDir::new().unwrap();
    let mut names = Vec::new();
    for i in 0..4u64 {
        let data = lorem(8_000, 10 + i);
        let input = make_input(&dir, &format!("m{i}.txt"), &data);
        assert!(run(&["encode", p(&input)]).status.success());
        fs::remove_file(&input).unwrap();
        names.push((dir.path().join(format!("m{i}.txt.lz4")), input, data));
    }

    let mut args = vec!["decode", "-T", "2"];
    let packed: Vec<String> = names.iter().map(|(pk, _, _)| p(pk).to_owned()).collect();
    args.extend(packed.iter().map(String::as_str));
    let out = run(&args);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    for (_, plain, data) in &names {
        assert_eq!(&fs::read(plain).unwrap(), data);
    }
}

#[test]
fn multiple_inputs_reject_output_flag() {
    let out = run(&["decode", "-o", "x", "a.lz4", "b.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("-o cannot be used"));
}

// ── 4. Errors and exit codes ──────────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let input = make_input(&dir, "o.txt", b"overwrite me, please, overwrite me");
    assert!(run(&["encode", p(&input)]).status.success());

    let out = run(&["encode", p(&input)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));

    assert!(run(&["encode", "-f", p(&input)]).status.success());
}

#[test]
fn truncated_input_fails() {
    let dir = TempDir::new().unwrap();
    let packed = make_input(&dir, "t.lz4", &[0xA0, b'A', b'A', b'A']);
    let out = run(&["decode", "-o", p(&dir.path().join("t")), p(&packed)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ends mid-sequence"));
}

#[test]
fn unknown_suffix_needs_output_name() {
    let dir = TempDir::new().unwrap();
    let packed = make_input(&dir, "noext", &[0x00]);
    let out = run(&["decode", p(&packed)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown suffix"));
}

#[test]
fn quiet_suppresses_errors() {
    let out = run(&["-q", "-q", "decode", "/nonexistent/file.lz4"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}

#[test]
fn version_flag() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

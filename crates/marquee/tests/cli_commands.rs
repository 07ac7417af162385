#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn marquee() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
    cmd.env_remove("MARQUEE_ADDRESS")
        .env_remove("MARQUEE_DEFAULT_ANIMATION")
        .env_remove("MARQUEE_DEFAULT_DELAY")
        .env_remove("MARQUEE_LOG_LEVEL")
        .arg("--log-level")
        .arg("error");
    cmd
}

fn run(args: &[&str]) -> Output {
    marquee().args(args).output().expect("marquee should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "marquee-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

const SAMPLE_HEX: &str = "1D 01 23 00 48 65 6C 6C 6F 20 57 6F 72 6C 64";

#[test]
fn encode_json_reports_bytes() {
    let output = run(&["--format", "json", "encode", "V35^_Hello World"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(&format!("\"hex\":\"{SAMPLE_HEX}\"")), "{out}");
    assert!(out.contains("\"animation\":\"VSCROLL\""), "{out}");
    assert!(out.contains("\"size\":15"), "{out}");
}

#[test]
fn encode_raw_writes_page_bytes() {
    let output = run(&["--format", "raw", "encode", "H4^a_b"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, vec![0x2F, 0x00, 0x04, 0x00, b'a', 0x0A, b'b']);
}

#[test]
fn encode_reads_notation_file() {
    let dir = unique_temp_dir("encode-file");
    let path = dir.join("page.txt");
    std::fs::write(&path, "V35^_Hello World\n").expect("write should succeed");

    let output = marquee()
        .args(["--format", "pretty", "encode", "--file"])
        .arg(&path)
        .output()
        .expect("marquee should run");
    assert!(output.status.success());
    assert!(stdout(&output).contains(SAMPLE_HEX));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn encode_uses_default_delay_from_env() {
    let output = marquee()
        .env("MARQUEE_DEFAULT_DELAY", "8")
        .args(["--format", "json", "encode", "hi"])
        .output()
        .expect("marquee should run");
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"notation\":\"N8^hi\""));
}

#[test]
fn encode_unsupported_character_exits_60() {
    let output = run(&["--format", "json", "encode", "N^caf\u{e9} {x}"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'é', '{', '}'"), "{stderr}");
}

#[test]
fn encode_invalid_animation_exits_64() {
    let output = run(&["encode", "X5^hi"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn encode_delay_out_of_range_exits_64() {
    let output = run(&["encode", "N256^hi"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn decode_prints_notation() {
    let output = run(&["--format", "raw", "decode", SAMPLE_HEX]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim_end(), "V35^_Hello World");
}

#[test]
fn decode_short_input_exits_60() {
    let output = run(&["decode", "1D 01"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn decode_bad_hex_exits_64() {
    let output = run(&["decode", "1D 0"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn frame_keep_alive_and_acknowledgement() {
    let output = run(&["--format", "json", "frame", "-a", "7", "07 50 6F"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\"kind\":\"keep-alive\""), "{out}");
    assert!(out.contains("\"trailer\":111"), "{out}");

    let output = marquee()
        .env("MARQUEE_ADDRESS", "0x07")
        .args(["--format", "json", "frame", "07 52 06 00"])
        .output()
        .expect("marquee should run");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\"kind\":\"acknowledgement\""), "{out}");
    assert!(out.contains("\"status\":6"), "{out}");
}

#[test]
fn frame_bad_reserved_byte_exits_60() {
    let output = run(&["frame", "-a", "7", "07 52 06 01"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn frame_wrong_address_exits_60() {
    let output = run(&["frame", "-a", "8", "07 50 6F"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn frame_stream_prints_each_frame() {
    let output = run(&[
        "--format",
        "json",
        "frame",
        "-a",
        "7",
        "--stream",
        "07 50 6F 07 52 00 00 07 50 6F",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 3);
}

#[test]
fn charset_lists_every_entry() {
    let output = run(&["--format", "json", "charset"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.matches("\"byte\":").count(), 89);
    assert!(out.contains("\"code_point\":\"U+2588\""), "{out}");
}

#[test]
fn version_prints_package_version() {
    let output = run(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        format!("marquee {}", env!("CARGO_PKG_VERSION"))
    );
}

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use marquee::page::{AnimationKind, DEFAULT_DELAY};

use crate::exit::{io_error, CliError, CliResult, USAGE};
use crate::hex::parse_hex;
use crate::output::OutputFormat;

pub mod charset;
pub mod decode;
pub mod encode;
pub mod frame;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode page notation into sign bytes.
    Encode(EncodeArgs),
    /// Decode sign bytes into page notation.
    Decode(DecodeArgs),
    /// Recognize keep-alive and acknowledgement frames.
    Frame(FrameArgs),
    /// List the sign's character table.
    Charset(CharsetArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Frame(args) => frame::run(args, format),
        Command::Charset(args) => charset::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Page notation, e.g. "V40^12:34 FUNKYTOWN~5_Limited Express".
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub notation: Option<String>,
    /// Read notation from a file. One trailing newline is ignored.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Animation used when the notation gives none (N, V, H or its name).
    #[arg(
        long,
        env = "MARQUEE_DEFAULT_ANIMATION",
        default_value = "N",
        value_parser = parse_animation
    )]
    pub default_animation: AnimationKind,
    /// Delay in quarter seconds used when the notation gives none.
    #[arg(long, env = "MARQUEE_DEFAULT_DELAY", default_value_t = DEFAULT_DELAY)]
    pub default_delay: u8,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Page bytes as hex, e.g. "1D 01 23 00 48 69".
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw page bytes from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Frame bytes as hex, e.g. "07 52 06 00".
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw frame bytes from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Device address the frames were exchanged with (decimal or 0x hex).
    #[arg(long, short = 'a', env = "MARQUEE_ADDRESS", value_parser = parse_address)]
    pub address: u8,
    /// Treat the input as a sequence of back-to-back frames.
    #[arg(long)]
    pub stream: bool,
}

#[derive(Args, Debug, Default)]
pub struct CharsetArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

fn parse_animation(input: &str) -> Result<AnimationKind, String> {
    let input = input.trim();
    if let Some(kind) = AnimationKind::ALL
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(input))
    {
        return Ok(kind);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => AnimationKind::from_letter(letter).map_err(|err| err.to_string()),
        _ => Err(format!("unknown animation {input:?} (expected N, V, H)")),
    }
}

fn parse_address(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => input.parse::<u8>(),
    };
    parsed.map_err(|err| format!("invalid address {input:?}: {err}"))
}

/// Notation passed inline, or read from `file`.
fn resolve_text(inline: Option<&str>, file: Option<&Path>) -> CliResult<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        let mut text = fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        return Ok(text);
    }
    Err(CliError::new(USAGE, "no input given"))
}

/// Bytes passed inline as hex, or read raw from `file`.
fn resolve_bytes(inline: Option<&str>, file: Option<&Path>) -> CliResult<Vec<u8>> {
    if let Some(hex) = inline {
        return parse_hex(hex).map_err(|err| CliError::new(USAGE, format!("bad hex input: {err}")));
    }
    if let Some(path) = file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "no input given"))
}

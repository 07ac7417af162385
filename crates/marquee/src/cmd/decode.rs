use marquee::page::{Page, LINE_ADVANCE};
use serde::Serialize;
use tracing::info;

use crate::cmd::{resolve_bytes, DecodeArgs};
use crate::exit::{page_error, CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct DecodeOutput {
    notation: String,
    animation: &'static str,
    delay: u8,
    text: String,
    lines: usize,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = resolve_bytes(args.hex.as_deref(), args.file.as_deref())?;
    let page = Page::from_bytes(&bytes).map_err(|err| page_error("decode failed", err))?;
    info!(animation = %page.animation(), delay = page.delay(), size = bytes.len(), "page decoded");

    let out = DecodeOutput {
        notation: page.to_string(),
        animation: page.animation().name(),
        delay: page.delay(),
        text: page.text().to_string(),
        lines: page.text().split(LINE_ADVANCE).filter(|line| !line.is_empty()).count(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["ANIMATION", "DELAY", "TEXT"],
            [vec![out.animation.to_string(), out.delay.to_string(), out.text.clone()]],
        ),
        OutputFormat::Pretty => println!(
            "animation={} delay={} text={:?}",
            out.animation, out.delay, out.text
        ),
        OutputFormat::Raw => println!("{}", out.notation),
    }

    Ok(SUCCESS)
}

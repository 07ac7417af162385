use marquee::page::{Page, PageDefaults};
use serde::Serialize;
use tracing::{debug, info};

use crate::cmd::{resolve_text, EncodeArgs};
use crate::exit::{page_error, CliResult, SUCCESS};
use crate::hex::format_hex;
use crate::output::{print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct EncodeOutput {
    notation: String,
    animation: &'static str,
    delay: u8,
    text: String,
    size: usize,
    hex: String,
}

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_text(args.notation.as_deref(), args.file.as_deref())?;
    let defaults = PageDefaults {
        animation: args.default_animation,
        delay: args.default_delay,
    };
    debug!(?defaults, len = input.len(), "parsing notation");

    let page = Page::parse(&input, &defaults).map_err(|err| page_error("parse failed", err))?;
    let bytes = page
        .to_bytes()
        .map_err(|err| page_error("encode failed", err))?;
    info!(animation = %page.animation(), delay = page.delay(), size = bytes.len(), "page encoded");

    let out = EncodeOutput {
        notation: page.to_string(),
        animation: page.animation().name(),
        delay: page.delay(),
        text: page.text().to_string(),
        size: bytes.len(),
        hex: format_hex(&bytes),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["ANIMATION", "DELAY", "SIZE", "BYTES"],
            [vec![
                out.animation.to_string(),
                out.delay.to_string(),
                out.size.to_string(),
                out.hex.clone(),
            ]],
        ),
        OutputFormat::Pretty => println!(
            "animation={} delay={} size={} bytes={}",
            out.animation, out.delay, out.size, out.hex
        ),
        OutputFormat::Raw => print_raw(&bytes),
    }

    Ok(SUCCESS)
}

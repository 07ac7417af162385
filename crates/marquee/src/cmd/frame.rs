use bytes::BytesMut;
use marquee::frame::{Frame, FrameRecognizer};
use serde::Serialize;
use tracing::{debug, info};

use crate::cmd::{resolve_bytes, FrameArgs};
use crate::exit::{frame_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::hex::format_hex;
use crate::output::{print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct FrameOutput {
    kind: &'static str,
    address: u8,
    type_code: u8,
    hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trailer: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u8>,
}

impl From<&Frame> for FrameOutput {
    fn from(frame: &Frame) -> Self {
        let (trailer, status) = match frame {
            Frame::KeepAlive(ping) => (Some(ping.trailer), None),
            Frame::Acknowledgement(ack) => (None, Some(ack.status)),
        };
        Self {
            kind: frame.kind().name(),
            address: frame.address(),
            type_code: frame.kind().type_code(),
            hex: format_hex(&frame.to_bytes()),
            trailer,
            status,
        }
    }
}

pub fn run(args: FrameArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = resolve_bytes(args.hex.as_deref(), args.file.as_deref())?;
    let recognizer = FrameRecognizer::new();

    let frames = if args.stream {
        split_stream(&recognizer, &bytes, args.address)?
    } else {
        let frame = recognizer
            .recognize(&bytes, args.address)
            .map_err(|err| frame_error("frame rejected", err))?;
        vec![frame]
    };
    info!(count = frames.len(), address = args.address, "frames recognized");

    print_frames(&frames, format);
    Ok(SUCCESS)
}

/// Decode back-to-back frames. Any bytes left over after the last complete
/// frame are an error.
fn split_stream(recognizer: &FrameRecognizer, bytes: &[u8], address: u8) -> CliResult<Vec<Frame>> {
    let mut buf = BytesMut::from(bytes);
    let mut frames = Vec::new();
    while let Some(frame) = recognizer
        .decode(&mut buf, address)
        .map_err(|err| frame_error(&format!("frame {} rejected", frames.len()), err))?
    {
        debug!(kind = %frame.kind(), remaining = buf.len(), "frame decoded");
        frames.push(frame);
    }
    if !buf.is_empty() {
        return Err(CliError::new(
            DATA_INVALID,
            format!("incomplete frame: {} trailing byte(s): {}", buf.len(), format_hex(&buf)),
        ));
    }
    Ok(frames)
}

fn print_frames(frames: &[Frame], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for frame in frames {
                print_json(&FrameOutput::from(frame));
            }
        }
        OutputFormat::Table => print_table(
            &["KIND", "ADDRESS", "TYPE", "BYTES"],
            frames.iter().map(|frame| {
                let out = FrameOutput::from(frame);
                vec![
                    out.kind.to_string(),
                    format!("{:#04X}", out.address),
                    format!("{:#04X}", out.type_code),
                    out.hex,
                ]
            }),
        ),
        OutputFormat::Pretty => {
            for frame in frames {
                let out = FrameOutput::from(frame);
                let detail = match (out.trailer, out.status) {
                    (Some(trailer), _) => format!(" trailer={trailer:#04X}"),
                    (_, Some(status)) => format!(" status={status:#04X}"),
                    _ => String::new(),
                };
                println!(
                    "kind={} address={:#04X} bytes={}{detail}",
                    out.kind, out.address, out.hex
                );
            }
        }
        OutputFormat::Raw => {
            for frame in frames {
                print_raw(&frame.to_bytes());
            }
        }
    }
}

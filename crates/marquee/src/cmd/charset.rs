use marquee::charset::entries;
use serde::Serialize;

use crate::cmd::CharsetArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct CharsetEntry {
    character: char,
    code_point: String,
    byte: u8,
}

pub fn run(_args: CharsetArgs, format: OutputFormat) -> CliResult<i32> {
    let rows: Vec<CharsetEntry> = entries()
        .map(|(character, byte)| CharsetEntry {
            character,
            code_point: format!("U+{:04X}", character as u32),
            byte,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => print_table(
            &["CHAR", "CODE POINT", "BYTE"],
            rows.iter().map(|row| {
                vec![
                    row.character.to_string(),
                    row.code_point.clone(),
                    format!("{:#04X}", row.byte),
                ]
            }),
        ),
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &rows {
                println!("{:#04X} {} {}", row.byte, row.code_point, row.character);
            }
        }
    }

    Ok(SUCCESS)
}

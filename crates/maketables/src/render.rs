//! Rust source emitter for `aozoraconv-core/src/jis/tables.rs`.

use std::fmt::{self, Write};

use crate::tables::{Coord, Tables};

pub const SOURCE_NAME: &str = "data/jisx0213-2004-std.txt";
pub const SOURCE_URL: &str = "http://x0213.org/codetable/jisx0213-2004-std.txt";

const DECODE_PER_LINE: usize = 8;
const ENCODE_PER_LINE: usize = 16;

fn escape(s: &str) -> String {
    s.chars().map(|c| format!("\\u{{{:04X}}}", u32::from(c))).collect()
}

/// Render the complete generated module.
pub fn render(tables: &Tables, separation: u32) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "// @generated by maketables from {SOURCE_NAME}; DO NOT EDIT.")?;
    writeln!(out, "//")?;
    writeln!(out, "// Source: {SOURCE_URL}")?;
    writeln!(out)?;
    writeln!(out, "use super::encode::EncodeTable;")?;
    writeln!(out)?;
    render_decode(&mut out, tables)?;
    writeln!(out)?;
    render_encode(&mut out, tables, separation)?;
    writeln!(out)?;
    render_multichars(&mut out, tables)?;
    Ok(out)
}

fn render_decode(out: &mut String, tables: &Tables) -> fmt::Result {
    writeln!(out, "/// Decoding table from JIS X 0213 coordinates to Unicode, indexed by")?;
    writeln!(out, "/// `[plane - 1][row - 1][cell - 1]`.")?;
    writeln!(out, "pub(crate) static JIS0213_DECODE: [[[Option<&str>; 94]; 94]; 2] = [")?;
    for plane in 1..=2u8 {
        writeln!(out, "    [")?;
        for row in 1..=94u8 {
            writeln!(out, "        // {plane}-{row}")?;
            writeln!(out, "        [")?;
            let cells: Vec<String> = (1..=94u8)
                .map(|cell| match tables.decode(Coord { plane, row, cell }) {
                    Some(s) => format!("Some(\"{}\")", escape(s)),
                    None => "None".to_string(),
                })
                .collect();
            for chunk in cells.chunks(DECODE_PER_LINE) {
                writeln!(out, "            {},", chunk.join(", "))?;
            }
            writeln!(out, "        ],")?;
        }
        writeln!(out, "    ],")?;
    }
    writeln!(out, "];")
}

fn render_encode(out: &mut String, tables: &Tables, separation: u32) -> fmt::Result {
    let intervals = tables.intervals(separation);
    log::debug!("{} encode intervals at separation {separation}", intervals.len());

    writeln!(out, "// Encoding tables from Unicode to packed coordinates, sorted by decreasing")?;
    writeln!(out, "// length. Values are `plane << 14 | row << 7 | cell`; zero marks a scalar")?;
    writeln!(out, "// with no assignment.")?;
    for (i, iv) in intervals.iter().enumerate() {
        writeln!(
            out,
            "// ENCODE{i}: {:5} entries for scalars in [{:#x}, {:#x}).",
            iv.len(),
            iv.low,
            iv.high
        )?;
    }
    writeln!(out, "pub(crate) static ENCODE_TABLES: [EncodeTable; {}] = [", intervals.len())?;
    for (i, iv) in intervals.iter().enumerate() {
        writeln!(
            out,
            "    EncodeTable {{ low: {:#x}, high: {:#x}, values: &ENCODE{i} }},",
            iv.low, iv.high
        )?;
    }
    writeln!(out, "];")?;

    for (i, iv) in intervals.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "static ENCODE{i}: [u16; {}] = [", iv.len())?;
        let values: Vec<String> = (iv.low..iv.high)
            .map(|scalar| match tables.encode(scalar) {
                Some(coord) => format!("{:#06x}", coord.packed()),
                None => "0".to_string(),
            })
            .collect();
        for chunk in values.chunks(ENCODE_PER_LINE) {
            writeln!(out, "    {},", chunk.join(", "))?;
        }
        writeln!(out, "];")?;
    }
    Ok(())
}

fn render_multichars(out: &mut String, tables: &Tables) -> fmt::Result {
    let entries: Vec<_> = tables.multichars().collect();
    writeln!(out, "/// Base-plus-combining-mark sequences and their packed coordinates.")?;
    writeln!(
        out,
        "pub(crate) static MULTICHARS: [(char, char, u16); {}] = [",
        entries.len()
    )?;
    for (&(base, mark), coord) in entries {
        writeln!(
            out,
            "    ('\\u{{{:04X}}}', '\\u{{{:04X}}}', {:#06x}),",
            u32::from(base),
            u32::from(mark),
            coord.packed()
        )?;
    }
    writeln!(out, "];")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("\u{3000}"), "\\u{3000}");
        assert_eq!(escape("\u{304B}\u{309A}"), "\\u{304B}\\u{309A}");
        assert_eq!(escape("\u{20089}"), "\\u{20089}");
        assert_eq!(escape("\u{A2}"), "\\u{00A2}");
    }

    #[test]
    fn test_render_small_table() {
        let source = "3-2121\tU+3000\n3-2477\tU+304B+309A\n4-2121\tU+20089\n";
        let tables = Tables::from_source(source).unwrap();
        let out = render(&tables, 1024).unwrap();

        assert!(out.starts_with("// @generated by maketables"));
        assert!(out.contains("        // 1-1\n        [\n            Some(\"\\u{3000}\"), None,"));
        assert!(out.contains("// ENCODE0:     1 entries for scalars in [0x3000, 0x3001)."));
        assert!(out.contains("    EncodeTable { low: 0x20089, high: 0x2008a, values: &ENCODE1 },"));
        assert!(out.contains("static ENCODE0: [u16; 1] = [\n    0x4081,\n];"));
        assert!(out.contains("pub(crate) static MULTICHARS: [(char, char, u16); 1] = [\n"));
        assert!(out.contains("    ('\\u{304B}', '\\u{309A}', 0x4257),\n"));
        assert!(out.ends_with("];\n"));
    }
}

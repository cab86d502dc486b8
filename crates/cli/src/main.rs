//! aozoraconv - convert text between UTF-8 and Aozora Bunko Shift_JIS
//!
//! A command line tool that writes UTF-8 input as Shift_JIS following the
//! Aozora Bunko character conventions, or reads such Shift_JIS back into
//! UTF-8. With `--kuten` it lists the JIS X 0213 coordinate of every
//! non-ASCII character instead.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use aozoraconv_core::{Coordinate, decode_document, encode_char, encode_document, to_coordinate};
use clap::{ArgAction, Parser};

/// Output encoding of the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputEncoding {
    /// UTF-8 input converted to Shift_JIS
    Sjis,
    /// Shift_JIS input converted to UTF-8
    Utf8,
}

/// Convert text between UTF-8 and Aozora Bunko Shift_JIS.
#[derive(Parser, Debug)]
#[command(name = "aozoraconv")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input file
    file: PathBuf,

    /// Set output encoding (sjis or utf8)
    #[arg(short = 'e', long, default_value = "sjis")]
    encoding: String,

    /// Convert from UTF-8 into Shift_JIS
    #[arg(short = 's', long = "sjis", action = ArgAction::SetTrue)]
    use_sjis: bool,

    /// Convert from Shift_JIS into UTF-8
    #[arg(short = 'u', long = "utf8", action = ArgAction::SetTrue)]
    use_utf8: bool,

    /// Output filename, stdout when omitted
    #[arg(short = 'o', long)]
    outfile: Option<PathBuf>,

    /// List the JIS X 0213 coordinate of each non-ASCII character
    #[arg(long, action = ArgAction::SetTrue)]
    kuten: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Args {
    fn output_encoding(&self) -> Result<OutputEncoding> {
        let name = self.encoding.to_lowercase();
        if name == "utf8" || name == "utf-8" || self.use_utf8 {
            Ok(OutputEncoding::Utf8)
        } else if name == "sjis" || name == "shift_jis" || self.use_sjis {
            Ok(OutputEncoding::Sjis)
        } else {
            bail!("define encoding -s (Shift_JIS) or -u (UTF-8) or -e string")
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn describe(coord: Coordinate) -> &'static str {
    if coord.is_jis0208() {
        "JIS X 0208"
    } else if coord.plane() == 1 {
        "JIS X 0213 plane 1"
    } else {
        "JIS X 0213 plane 2"
    }
}

fn write_entry(
    out: &mut dyn Write,
    text: &str,
    result: aozoraconv_core::Result<Coordinate>,
) -> io::Result<()> {
    let codepoints = text
        .chars()
        .map(|c| format!("U+{:04X}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("+");
    match result {
        Ok(coord) => {
            let sjis = coord
                .to_sjis()
                .map_or_else(|| "-".to_string(), |[a, b]| format!("{a:02X}{b:02X}"));
            writeln!(out, "{text}\t{codepoints}\t{coord}\t{}\t{sjis}", describe(coord))
        }
        Err(e) => writeln!(out, "{text}\t{codepoints}\t-\t{e}\t-"),
    }
}

fn write_kuten(text: &str, out: &mut dyn Write) -> Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if ch.is_ascii() {
            i += 1;
            continue;
        }
        if let Some(&mark) = chars.get(i + 1) {
            let pair: String = [ch, mark].iter().collect();
            if let Ok(coord) = to_coordinate(&pair) {
                write_entry(out, &pair, Ok(coord))?;
                i += 2;
                continue;
            }
        }
        write_entry(out, &ch.to_string(), encode_char(ch))?;
        i += 1;
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let encoding = args.output_encoding()?;
    let input = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let mut output = open_output(args.outfile.as_deref())?;
    log::debug!("converting {} to {encoding:?}", args.file.display());

    if args.kuten {
        let text = match encoding {
            OutputEncoding::Utf8 => decode_document(&input)?,
            OutputEncoding::Sjis => String::from_utf8(input).context("input is not UTF-8")?,
        };
        write_kuten(&text, &mut output)?;
    } else {
        match encoding {
            OutputEncoding::Utf8 => {
                let text = decode_document(&input)?;
                output.write_all(text.as_bytes())?;
            }
            OutputEncoding::Sjis => {
                let text = String::from_utf8(input).context("input is not UTF-8")?;
                output.write_all(&encode_document(&text)?)?;
            }
        }
    }

    output.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("aozoraconv").chain(argv.iter().copied()))
    }

    #[test]
    fn test_output_encoding_flags() {
        assert_eq!(args(&["in.txt"]).output_encoding().unwrap(), OutputEncoding::Sjis);
        assert_eq!(args(&["-u", "in.txt"]).output_encoding().unwrap(), OutputEncoding::Utf8);
        assert_eq!(args(&["-e", "UTF-8", "in.txt"]).output_encoding().unwrap(), OutputEncoding::Utf8);
        assert_eq!(
            args(&["-e", "Shift_JIS", "in.txt"]).output_encoding().unwrap(),
            OutputEncoding::Sjis
        );
        assert_eq!(args(&["-e", "latin1", "-s", "in.txt"]).output_encoding().unwrap(), OutputEncoding::Sjis);
        assert!(args(&["-e", "latin1", "in.txt"]).output_encoding().is_err());
    }

    #[test]
    fn test_kuten_listing() {
        let mut out = Vec::new();
        write_kuten("a\u{3042}\u{304B}\u{309A}\u{20089}\u{2015}", &mut out).unwrap();
        let listing = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "\u{3042}\tU+3042\t1-4-2\tJIS X 0208\t82A0");
        assert_eq!(lines[1], "\u{304B}\u{309A}\tU+304B+U+309A\t1-4-87\tJIS X 0213 plane 1\t82F5");
        assert_eq!(lines[2], "\u{20089}\tU+20089\t2-1-1\tJIS X 0213 plane 2\t-");
        assert!(lines[3].starts_with("\u{2015}\tU+2015\t-\tnot encodable in JIS X 0213"));
    }
}

//! Argument parser for `[-v] [-f filename] [-n integer]`.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;

use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[clap(
    name = "linedump",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Increase verbosity; repeatable
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u64,

    /// File to copy to standard output; a later -f replaces an earlier one
    #[clap(
        short = 'f',
        value_name = "filename",
        parse(from_os_str),
        multiple_occurrences = true,
        number_of_values = 1,
        allow_hyphen_values = true
    )]
    files: Vec<PathBuf>,

    /// Base-10 integer, parsed permissively
    #[clap(
        short = 'n',
        value_name = "integer",
        parse(from_os_str),
        multiple_occurrences = true,
        number_of_values = 1,
        allow_hyphen_values = true
    )]
    numbers: Vec<OsString>,

    /// Operands are accepted and ignored
    #[clap(hide = true, parse(from_os_str))]
    operands: Vec<OsString>,
}

/// Result of a successful parse. `input` closes itself when dropped.
#[derive(Debug)]
pub struct ParsedConfig {
    pub verbose: u64,
    pub number: i64,
    pub input: Option<BufReader<File>>,
}

/// Parses the full argument vector, program name first.
///
/// Every `-f` path is opened in order and each new handle replaces the
/// previous one, so only the last survives. Any malformed invocation,
/// including `-h`, becomes [`Error::Usage`], unless a `-f` path ahead of
/// the bad argument fails to open first.
pub fn parse_args<I, T>(args: I) -> Result<ParsedConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => {
            debug!("rejected arguments: {:?}", err.kind());
            open_leading_files(&args)?;
            return Err(Error::Usage { program });
        }
    };
    if !cli.operands.is_empty() {
        debug!("ignoring {} operands", cli.operands.len());
    }

    let mut input = None;
    for path in &cli.files {
        if input.take().is_some() {
            debug!("closed previous input before opening {}", path.display());
        }
        input = Some(open_input(path)?);
    }

    let number = cli
        .numbers
        .last()
        .map_or(0, |n| parse_number(&n.to_string_lossy()));

    Ok(ParsedConfig {
        verbose: cli.verbose,
        number,
        input,
    })
}

/// Walks the arguments in getopt order up to the first one that cannot be
/// parsed, opening every `-f` path met on the way. Only the open error
/// matters here; the handles are dropped straight away.
fn open_leading_files(args: &[OsString]) -> Result<()> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        let arg = arg.to_string_lossy();
        if arg == "--" {
            break;
        }
        let flags = match arg.strip_prefix('-') {
            Some(flags) if !flags.is_empty() => flags,
            _ => continue,
        };

        for (at, flag) in flags.char_indices() {
            match flag {
                'v' => continue,
                'f' | 'n' => {
                    let attached = &flags[at + flag.len_utf8()..];
                    let value = if attached.is_empty() {
                        match rest.next() {
                            Some(value) => value.clone(),
                            None => return Ok(()),
                        }
                    } else {
                        OsString::from(attached)
                    };
                    if flag == 'f' {
                        open_input(Path::new(&value))?;
                    }
                    break;
                }
                _ => return Ok(()),
            }
        }
    }
    Ok(())
}

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened {}", path.display());
    Ok(BufReader::new(file))
}

/// Base name of `argv[0]`, falling back to the crate name.
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Permissive base-10 parse: leading whitespace, an optional sign, then as
/// many digits as follow. Trailing junk is ignored, no digits gives 0, and
/// values past the `i64` range saturate.
pub fn parse_number(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        -value
    } else {
        value
    }
}

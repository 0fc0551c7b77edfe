//! `linedump`: read `-v`, `-f filename` and `-n integer` getopt style, echo
//! the parsed values, then copy the file to standard output in bounded
//! chunks.

pub mod app;
pub mod args;
pub mod dump;
pub mod error;

pub use app::run;
pub use args::{parse_args, parse_number, ParsedConfig};
pub use dump::{dump, DumpStats, CHUNK_CAPACITY};
pub use error::{Error, Result};

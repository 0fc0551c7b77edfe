use std::ffi::OsString;
use std::io::Write;

use log::debug;

use crate::args::parse_args;
use crate::dump::dump;
use crate::error::{Error, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Runs the whole program against the given streams and returns the exit
/// status. Nothing reaches `stdout` unless parsing succeeded.
pub fn run<I, T>(args: I, stdout: &mut dyn Write, stderr: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match try_run(args, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            debug!("exiting on {:?}", err);
            // Header lines go out before the error that follows them.
            if matches!(err, Error::Copy(_)) {
                // dump already tried to flush.
            } else if let Err(flush_err) = stdout.flush() {
                let _ = writeln!(stderr, "{}", Error::Copy(flush_err));
            }
            let _ = writeln!(stderr, "{}", err);
            EXIT_FAILURE
        }
    }
}

fn try_run<I, T>(args: I, stdout: &mut dyn Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = parse_args(args)?;

    writeln!(stdout, "verbose = {}", config.verbose).map_err(Error::Copy)?;
    writeln!(stdout, "number  = {}", config.number).map_err(Error::Copy)?;

    dump(config.input, stdout)?;
    Ok(())
}

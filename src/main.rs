use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let status = {
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        linedump::run(env::args_os(), &mut stdout, &mut stderr)
    };

    process::exit(status);
}

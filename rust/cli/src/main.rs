use std::io;

fn main() {
    afghound_cli::logging::init_logging();
    let code = afghound_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}

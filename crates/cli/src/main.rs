use clap::Parser;
use enforce_range_cli::app;
use enforce_range_cli::args::Args;
use enforce_range_cli::logging;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match app::run(&args, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", app::describe_error(&e));
            ExitCode::from(app::exit_code(&e))
        }
    }
}

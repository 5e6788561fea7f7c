use cidr2ips::cli::{usage, Cli};
use cidr2ips::output::print_error;
use cidr2ips::{logging, run, Config};
use clap::Parser;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = logging::init() {
        eprintln!("{e}");
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    let result = Config::from_cli(cli).and_then(|config| {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        run(&config, &mut out)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, &usage());
            ExitCode::FAILURE
        }
    }
}

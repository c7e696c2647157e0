// src/main.rs
use clap::Parser;
use colorful::Colorful;
use std::io::Write;
use std::process::ExitCode;

use silentlovefilter::cli::{self, Cli};
use silentlovefilter::DenoiseError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".bold().red(), err);
            let code = err
                .downcast_ref::<DenoiseError>()
                .map(DenoiseError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{} {style}{}{style:#} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod output;
mod prompt;
mod reporter;

pub use args::{CleanArgs, Cli, Command, PreviewArgs, ToolArgs};
pub use output::{
    format_levels, format_levels_json, format_stats, random_kiss, CleanReport, CleanStats, FileStats, KISSES,
};
pub use prompt::{confirm, confirm_stdin};
pub use reporter::{CapturingReporter, ConsoleReporter};

use anyhow::{Context, Result};
use colorful::Colorful;
use log::debug;
use std::io;
use std::process::ExitCode;

use crate::config::ToolSettings;
use crate::core::{Denoiser, DenoiseRequest, PreviewOutcome, PreviewRequest, Previewer};

/// Run a parsed command line
pub fn run(cli: Cli) -> Result<ExitCode> {
    let settings = cli.tools.settings();
    debug!("Tools: {:?}", settings);

    match cli.command {
        Command::Clean(args) => run_clean(&args, &settings, cli.verbose),
        Command::Preview(args) => run_preview(&args, &settings),
        Command::Levels { json } => {
            if json {
                println!("{}", format_levels_json()?);
            } else {
                print!("{}", format_levels());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_clean(args: &CleanArgs, settings: &ToolSettings, verbose: bool) -> Result<ExitCode> {
    let mut request = DenoiseRequest::new(&args.input, &args.output, args.love_level)?;

    if request.output.exists() && !args.yes {
        let question = format!("Overwrite existing file '{}'?", request.output.display());
        // stdout carries the report in JSON mode, so talk to the user on stderr
        let confirmed = if args.json {
            confirm(&question, true, &mut io::stdin().lock(), &mut io::stderr())
        } else {
            confirm_stdin(&question, true)
        };
        if !confirmed.context("Failed to read confirmation")? {
            if args.json {
                eprintln!("{}", "Operation cancelled.".yellow());
            } else {
                println!("{}", "Operation cancelled.".yellow());
            }
            return Ok(ExitCode::SUCCESS);
        }
    }

    if let Some(prefix) = args.dedicate.as_deref().filter(|p| !p.is_empty()) {
        request = request.dedicated_to(prefix)?;
    }

    let denoiser = Denoiser::new(settings);
    let command = denoiser.plan(&request)?.to_string();
    if verbose && !args.json {
        println!("{}", format!("Command: {}", command).dim());
    }

    if args.json {
        let capture = CapturingReporter::default();
        let outcome = denoiser.denoise(&request, &capture);
        if let Some(result) = capture.take() {
            let stats = if args.stats && result.succeeded() {
                Some(collect_stats(&request)?)
            } else {
                None
            };
            let report = CleanReport::new(&request, command, &result).with_stats(stats);
            println!("{}", report.to_json()?);
        }
        outcome?;
        return Ok(ExitCode::SUCCESS);
    }

    denoiser.denoise(&request, &ConsoleReporter::new())?;

    if args.stats {
        print!("{}", format_stats(&collect_stats(&request)?));
    }

    if args.kiss {
        println!("{}", random_kiss(&mut rand::thread_rng()).magenta());
    }

    Ok(ExitCode::SUCCESS)
}

fn collect_stats(request: &DenoiseRequest) -> Result<CleanStats> {
    CleanStats::collect(request).with_context(|| {
        format!(
            "Failed to read stats for {} and {}",
            request.input.display(),
            request.output.display()
        )
    })
}

fn run_preview(args: &PreviewArgs, settings: &ToolSettings) -> Result<ExitCode> {
    let request = PreviewRequest::new(&args.file, args.seconds)?;
    let previewer = Previewer::new(settings);

    println!(
        "{}",
        format!("Playing up to {} seconds preview of '{}'...", request.seconds, request.file.display()).cyan()
    );

    match previewer.preview(&request)? {
        PreviewOutcome::Played { seconds, info } => {
            if let Some(info) = info {
                println!(
                    "  {} Hz, {} ch, {:.1}s, {}",
                    info.sample_rate, info.channels, info.duration_secs, info.codec_name
                );
            }
            println!("{}", format!("Successfully played {} seconds preview!", seconds).green());
        }
        PreviewOutcome::PlayerFailed { seconds, stderr } => {
            eprintln!("{}", format!("Error playing audio: {}", stderr.trim()).bold().red());
            println!(
                "{}",
                format!(
                    "Preview would play for {} seconds but encountered an error. The clean command works fine!",
                    seconds
                )
                .yellow()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

//! Shuffle Period CLI
//!
//! Front end for the shuffle period engine: one-off runs, sweeps over deck
//! sizes, cycle analysis, and an interactive prompt when no command is
//! given.

mod interactive;
mod report;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use report::{AnalysisReport, PeriodReport};
use shuffle_period_core_rs::{Pickup, SimulationConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "shuffle-period", author, version, about, long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Count the passes for one deck size")]
    Run {
        #[arg(required = true)]
        num_cards: u16,
        #[command(flatten)]
        options: SimulationOptions,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Count the passes for every deck size in FROM..=TO")]
    Sweep {
        #[arg(required = true)]
        from: u16,
        #[arg(required = true)]
        to: u16,
        #[command(flatten)]
        options: SimulationOptions,
        /// Print the reports as a JSON array
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Show the cycle structure of a single pass", alias = "cycles")]
    Analyze {
        #[arg(required = true)]
        num_cards: u16,
        /// Flip the table pile before picking it up
        #[arg(long)]
        flipped: bool,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Prompt for deck sizes (default)")]
    Interactive {
        #[command(flatten)]
        options: SimulationOptions,
    },
}

/// Simulation settings shared by the simulating commands
#[derive(Args, Default)]
struct SimulationOptions {
    /// JSON file with a simulation config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Flip the table pile before picking it up
    #[arg(long)]
    flipped: bool,
    /// Give up after this many passes
    #[arg(long)]
    max_passes: Option<u16>,
    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SimulationOptions {
    fn load(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if self.flipped {
            config.pickup = Pickup::Flipped;
        }
        if self.max_passes.is_some() {
            config.max_passes = self.max_passes;
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }

        config.validate()?;
        log::debug!("simulation config: {:?}", config);
        Ok(config)
    }
}

fn pickup(flipped: bool) -> Pickup {
    if flipped {
        Pickup::Flipped
    } else {
        Pickup::Stacked
    }
}

/// Terminal logging at a level picked by `-v`
fn log(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // Fails only if a logger is already installed
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn execute(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Run {
            num_cards,
            options,
            json,
        } => {
            let report = PeriodReport::simulate(num_cards, &options.load()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Command::Sweep {
            from,
            to,
            options,
            json,
        } => {
            anyhow::ensure!(from <= to, "empty range {}..={}", from, to);
            let config = options.load()?;
            let reports = (from..=to).map(|n| PeriodReport::simulate(n, &config));
            if json {
                let reports: Vec<PeriodReport> = reports.collect();
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in reports {
                    match report.period {
                        Some(period) => println!("{:>6} {:>6}", report.num_cards, period),
                        None => println!("{}", report),
                    }
                }
            }
        }
        Command::Analyze {
            num_cards,
            flipped,
            json,
        } => {
            let report = AnalysisReport::analyze(num_cards, pickup(flipped));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Command::Interactive { options } => interactive::run(&options.load()?)?,
    }
    Ok(())
}

/// The one line printed for a failed command
fn failure(e: &anyhow::Error) -> String {
    format!("error: {:#}", e)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    log(cli.verbose);

    let command = cli.command.unwrap_or(Command::Interactive {
        options: SimulationOptions::default(),
    });

    match execute(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<interactive::Stop>() {
            Some(stop) => {
                println!("{}", stop);
                ExitCode::from(*stop)
            }
            None => {
                eprintln!("{}", failure(&e));
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["shuffle-period", "run", "52", "--flipped", "--max-passes", "7"]);
        let Some(Command::Run { num_cards, options, json }) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(num_cards, 52);
        assert!(!json);

        let config = options.load().unwrap();
        assert_eq!(config.pickup, Pickup::Flipped);
        assert_eq!(config.max_passes, Some(7));
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_zero_max_passes_rejected() {
        let options = SimulationOptions {
            max_passes: Some(0),
            ..Default::default()
        };
        assert!(options.load().is_err());
    }

    #[test]
    fn test_failure_is_one_line_with_context() {
        let options = SimulationOptions {
            config: Some(PathBuf::from("/nonexistent/shuffle.json")),
            ..Default::default()
        };
        let message = failure(&options.load().unwrap_err());
        assert!(message.starts_with("error: reading config /nonexistent/shuffle.json: "));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn test_no_command_means_interactive() {
        let cli = Cli::parse_from(["shuffle-period", "-vv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }
}

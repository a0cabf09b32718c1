//! Pulsenet - pulse propagation network simulator
//!
//! Reads a module declaration file, tallies pulses over a number of button
//! presses, and finds the fewest presses that deliver a low pulse to a
//! target sink.
//!
//! # Usage
//!
//! ```bash
//! pulsenet network.txt --presses 1000 --target rx -v
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use pulse_net::{
    dsl,
    error::{PulseError, Result},
    network::validate_network,
    sim::{self, brute_force_first_low, AnalyzerConfig, SchedulerConfig},
    Network, Scheduler, DEFAULT_ENTRY_POINT, DEFAULT_MAX_PRESSES, DEFAULT_PRESSES, DEFAULT_TARGET,
};

/// Pulse propagation network simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the module declaration file
    #[arg(value_name = "NETWORK_FILE")]
    network_file: PathBuf,

    /// Number of button presses to tally
    #[arg(short, long, default_value_t = DEFAULT_PRESSES)]
    presses: u64,

    /// Module receiving the initiating low pulse
    #[arg(short, long, default_value = DEFAULT_ENTRY_POINT)]
    entry: String,

    /// Sink whose first low pulse is searched for
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    target: String,

    /// Press budget for the fewest-presses search
    #[arg(long, default_value_t = DEFAULT_MAX_PRESSES)]
    max_presses: u64,

    /// Extra on-period occurrences required from each feeder
    #[arg(long, default_value_t = 0)]
    confirmations: u64,

    /// Search by direct simulation instead of cycle analysis
    #[arg(long)]
    brute_force: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    // Parse and build the network
    let ast = dsl::parse_file(&args.network_file)?;
    let network = Network::from_ast(ast)?;

    // Validate
    validate_network(&network, &args.entry)?;

    let scheduler_config = SchedulerConfig::new().with_entry_point(args.entry.as_str());

    // Tally pulses on its own copy of the network
    let stats = sim::count_pulses(network.clone(), args.presses, scheduler_config.clone());
    println!(
        "A) {} low x {} high after {} presses = {}",
        stats.low,
        stats.high,
        args.presses,
        stats.product()
    );

    // Search for the first low pulse on a fresh copy
    let fewest = if args.brute_force {
        let mut scheduler = Scheduler::with_config(network, scheduler_config);
        brute_force_first_low(&mut scheduler, &args.target, args.max_presses)
    } else {
        let analyzer_config = AnalyzerConfig::new()
            .with_target(args.target.as_str())
            .with_max_presses(args.max_presses)
            .with_confirmations(args.confirmations);
        sim::fewest_presses(network, scheduler_config, analyzer_config).map(|report| {
            for p in &report.periods {
                log::info!("feeder '{}' of '{}' has period {}", p.feeder, report.gate, p.period);
            }
            report.presses
        })
    };

    match fewest {
        Ok(presses) => println!("B) '{}' first receives low after {} presses", args.target, presses),
        Err(PulseError::NoGateForTarget { target }) => {
            println!("B) no module forwards to '{}', skipping", target)
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

use std::{io, process::ExitCode};

use clap::Parser;
use rosu_sim::{taiko::UnrealizablePolicy, SimulateError, TaikoSimulate};
use thiserror::Error;
use tracing::{debug, error, Level};

/// Simulate the hitresults of an osu!taiko play.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Amount of hit circles of the map.
    #[arg(short, long)]
    objects: u32,

    /// Maximum combo of the map. Defaults to the amount of objects.
    #[arg(long)]
    max_combo: Option<u32>,

    /// Accuracy. Enter as decimal 0-100. Scales hitresults as well and is
    /// rounded to the nearest possible value for the map.
    #[arg(short, long, default_value_t = 100.0)]
    accuracy: f64,

    /// Maximum combo during play. Defaults to the map's maximum.
    #[arg(short, long)]
    combo: Option<u32>,

    /// Percentage of the map's maximum combo achieved. Alternative to
    /// combo. Enter as decimal 0-100.
    #[arg(short = 'C', long, default_value_t = 100.0)]
    percent_combo: f64,

    /// Number of misses.
    #[arg(short = 'X', long, default_value_t = 0)]
    misses: u32,

    /// Number of goods. Overrides accuracy if used.
    #[arg(short = 'G', long)]
    goods: Option<u32>,

    /// Fail if the accuracy can't be reached with the given misses instead
    /// of using the closest reachable one.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Print the result as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log debug information to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn simulate(&self) -> TaikoSimulate {
        let policy = if self.strict {
            UnrealizablePolicy::Reject
        } else {
            UnrealizablePolicy::Clamp
        };

        let mut simulate = TaikoSimulate::new(self.objects)
            .accuracy(self.accuracy)
            .misses(self.misses)
            .percent_combo(self.percent_combo)
            .unrealizable_policy(policy);

        if let Some(max_combo) = self.max_combo {
            simulate = simulate.max_combo(max_combo);
        }

        if let Some(combo) = self.combo {
            simulate = simulate.combo(combo);
        }

        if let Some(goods) = self.goods {
            simulate = simulate.n100(goods);
        }

        simulate
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    debug!(?cli, "Simulating play");

    match run(&cli) {
        Ok(output) => {
            println!("{output}");

            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");

            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let attrs = cli.simulate().calculate()?;
    let info = attrs.play_info();

    if cli.json {
        Ok(serde_json::to_string_pretty(&info)?)
    } else {
        Ok(info.to_string())
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Simulation failed: {0}")]
    Simulate(#[from] SimulateError),
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

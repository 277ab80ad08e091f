//! Interactive console for the toy robot.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use toy_robot::{RobotConfig, RobotInterpreter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "toy-robot")]
#[command(about = "Drive a toy robot around a table from stdin")]
struct Cli {
    /// TOML file with `min_x`, `min_y`, `max_x`, `max_y`.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, allow_negative_numbers = true)]
    min_x: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    min_y: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    max_x: Option<i32>,

    #[arg(long, allow_negative_numbers = true)]
    max_y: Option<i32>,

    #[arg(long, short, help = "Log every command decision to stderr")]
    verbose: bool,

    #[arg(long, short, help = "No banner and no prompt")]
    quiet: bool,
}

impl Cli {
    fn robot_config(&self) -> anyhow::Result<RobotConfig> {
        let mut config = match &self.config {
            Some(path) => RobotConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RobotConfig::default(),
        };
        if let Some(v) = self.min_x {
            config.min_x = v;
        }
        if let Some(v) = self.min_y {
            config.min_y = v;
        }
        if let Some(v) = self.max_x {
            config.max_x = v;
        }
        if let Some(v) = self.max_y {
            config.max_y = v;
        }
        Ok(config)
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "toy_robot=debug"
    } else {
        "toy_robot=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn print_banner(out: &mut impl Write, config: &RobotConfig) -> io::Result<()> {
    let rule = "==================================";
    writeln!(out, "{rule}")?;
    writeln!(out, "  Toy Robot Simulator")?;
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  PLACE X,Y,DIRECTION - Place robot on table (e.g., PLACE 0,0,NORTH)")?;
    writeln!(out, "  PLACE X,Y           - Move robot to new position (keeps current direction)")?;
    writeln!(out, "  MOVE                - Move robot one unit forward")?;
    writeln!(out, "  LEFT                - Rotate robot 90 degrees left")?;
    writeln!(out, "  RIGHT               - Rotate robot 90 degrees right")?;
    writeln!(out, "  REPORT              - Display robot's position and direction")?;
    writeln!(out, "  EXIT                - Exit the simulator")?;
    writeln!(out)?;
    writeln!(
        out,
        "Table: {},{} to {},{}",
        config.min_x, config.min_y, config.max_x, config.max_y
    )?;
    writeln!(out, "Directions: NORTH, SOUTH, EAST, WEST")?;
    writeln!(out, "{rule}")?;
    writeln!(out)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.robot_config()?;
    let mut interpreter = RobotInterpreter::new(&config).context("building the table")?;
    tracing::debug!(?config, "starting session");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.quiet {
        print_banner(&mut out, &config)?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if !cli.quiet {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("EXIT") {
            writeln!(out, "Goodbye!")?;
            break;
        }
        if let Some(output) = interpreter.execute(input) {
            writeln!(out, "{output}")?;
        }
    }

    Ok(())
}

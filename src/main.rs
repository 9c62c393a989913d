use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use counter_clock::app::{intent, AppEvent, CounterApp, Wiring};
use counter_clock::{Clock, Config, ConfigError, Periodic, Selection, SystemClock, TerminalRenderer};

/// Counter with a live clock, rendered to the terminal.
///
/// Type `+` or `a` to increase, `-` or `s` to decrease, `q` to quit.
#[derive(Debug, Parser)]
#[command(name = "counter-clock", version)]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between clock ticks.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Name shown in the greeting.
    #[arg(long)]
    greeting: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Add,
    Subtract,
    Quit,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing();

    let config = load_config(&args)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let renderer = TerminalRenderer::new(io::stdout());

    let Wiring {
        runtime,
        dom,
        ticker,
    } = CounterApp::from_config(&config, clock).wire(config.tick_interval(), renderer)?;

    let add = dom.select(&format!(".{}", intent::ADD))?;
    let subtract = dom.select(&format!(".{}", intent::SUBTRACT))?;
    drop(dom);

    let input = thread::Builder::new()
        .name("stdin".into())
        .spawn(move || forward_keys(io::stdin().lock(), add, subtract, ticker))?;

    let final_state = futures::executor::block_on(runtime.run());
    tracing::info!(count = final_state.count, "exiting");

    if input.join().is_err() {
        tracing::warn!("input thread panicked");
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with rendered frames on
/// stdout. `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn load_config(args: &Args) -> Result<Config, ConfigError> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(ms) = args.tick_ms {
        config.tick_interval_ms = ms;
    }
    if let Some(greeting) = &args.greeting {
        config.greeting = greeting.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Turn stdin into clicks until `q` or EOF, then stop the clock.
///
/// Returning drops both selections and the ticker, which closes the
/// runtime's queue.
fn forward_keys(
    input: impl BufRead,
    add: Selection<AppEvent>,
    subtract: Selection<AppEvent>,
    ticker: Periodic,
) {
    'lines: for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, "failed to read stdin");
                break;
            }
        };

        for key in parse_keys(&line) {
            match key {
                Key::Add => add.click(),
                Key::Subtract => subtract.click(),
                Key::Quit => break 'lines,
            }
        }
    }

    ticker.stop();
}

fn parse_keys(line: &str) -> Vec<Key> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| match c {
            '+' | 'a' => Some(Key::Add),
            '-' | 's' => Some(Key::Subtract),
            'q' => Some(Key::Quit),
            other => {
                tracing::debug!(key = %other, "ignoring key");
                None
            }
        })
        .collect()
}

use anyhow::{Context, Result};
use barline::bar::{Bar, SnapshotEvent};
use barline::config::BarConfig;
use barline_core::{Delivery, ItemUpdate};
use clap::Parser;
use log::{debug, info, warn};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

/// barline - i3status-style bar items from snapshot events
#[derive(Parser, Debug, Clone)]
#[command(name = "barline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to load instead of the standard location
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Print the effective configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// List the available item sources and exit
    #[arg(long = "list-sources")]
    list_sources: bool,
}

fn init_logging(debug: u8) {
    // RUST_LOG still wins when set
    let level = match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> Result<BarConfig> {
    match &cli.config {
        Some(path) => BarConfig::load_from_path(path),
        None => BarConfig::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    warn!("Starting barline v{}", env!("CARGO_PKG_VERSION"));

    let registry = barline::default_registry();

    if cli.list_sources {
        for kind in registry.list() {
            println!("{}", kind);
        }
        return Ok(());
    }

    let config = load_config(&cli).context("Failed to load configuration")?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let (bar, updates) = Bar::new(&config, &registry);
    run(bar, updates).await
}

/// Read snapshot events from stdin and print a bar line after every change
async fn run(mut bar: Bar, mut updates: UnboundedReceiver<ItemUpdate>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let stdout = std::io::stdout();

    loop {
        let changed = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    info!("End of input, exiting");
                    return Ok(());
                };
                handle_line(&mut bar, &line);
                bar.apply_pending(&mut updates)
            }
            Some(update) = updates.recv() => {
                let changed = bar.apply(update);
                bar.apply_pending(&mut updates) || changed
            }
        };

        if changed {
            let mut out = stdout.lock();
            writeln!(out, "{}", bar.render_line())?;
            out.flush()?;
        }
    }
}

fn handle_line(bar: &mut Bar, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let event: SnapshotEvent = match serde_json::from_str(line) {
        Ok(event) => event,
        Err(e) => {
            warn!("Ignoring malformed event: {}", e);
            return;
        }
    };
    let item = event.item;
    match bar.dispatch(event) {
        Ok(Delivery::Published) => {}
        Ok(Delivery::Stale) => debug!("Stale snapshot for item {}", item),
        Err(e) => warn!("Item {}: {:#}", item, e),
    }
}

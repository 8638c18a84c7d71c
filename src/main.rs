//! NetSentry — simulated intrusion-detection event feed and filter engine.
//!
//! Demo runner: stands in for the dashboard's presentation layer. Starts a
//! generator schedule for the chosen profile, wires it into a bounded feed
//! buffer, prints each event as it arrives via a buffer subscription, and
//! optionally applies a text filter to the final snapshot.

use std::time::{Duration, Instant};

use netsentry::core::buffer::{BufferChange, EventBuffer};
use netsentry::core::filter::FilterState;
use netsentry::core::generator::{EventGenerator, GeneratorProfile};
use netsentry::core::seed::{seed_alerts, seed_logs};
use netsentry::util::constants;
use netsentry::util::error::Result;
use netsentry::util::time::{format_duration, format_table_timestamp};

/// Parsed command-line options for the demo runner.
struct RunnerConfig {
    profile: GeneratorProfile,
    interval: Duration,
    capacity: usize,
    count: usize,
    search: Option<String>,
    seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            profile: GeneratorProfile::Network,
            interval: Duration::from_millis(constants::DEFAULT_TICK_INTERVAL_MS),
            capacity: constants::DEFAULT_BUFFER_CAPACITY,
            count: 10,
            search: None,
            seed: None,
        }
    }
}

const USAGE: &str = "\
Usage: netsentry [OPTIONS]

Options:
  --profile <network|logs|alerts>   Feed to simulate (default: network)
  --interval-ms <N>                 Milliseconds between events (default: 1000)
  --capacity <N>                    Feed buffer depth (default: 50)
  --count <N>                       Events to generate before exiting (default: 10)
  --search <TEXT>                   Filter the final snapshot by text
  --seed <N>                        Seed the RNG for a reproducible run
";

fn parse_args() -> std::result::Result<RunnerConfig, String> {
    let mut config = RunnerConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--profile" => {
                config.profile = match value("--profile")?.as_str() {
                    "network" => GeneratorProfile::Network,
                    "logs" => GeneratorProfile::Logs,
                    "alerts" => GeneratorProfile::Alerts,
                    other => return Err(format!("unknown profile: {other}")),
                };
            }
            "--interval-ms" => {
                let ms: u64 = value("--interval-ms")?
                    .parse()
                    .map_err(|e| format!("--interval-ms: {e}"))?;
                if ms == 0 {
                    return Err("--interval-ms must be at least 1".into());
                }
                config.interval = Duration::from_millis(ms);
            }
            "--capacity" => {
                config.capacity = value("--capacity")?
                    .parse()
                    .map_err(|e| format!("--capacity: {e}"))?;
            }
            "--count" => {
                config.count = value("--count")?
                    .parse()
                    .map_err(|e| format!("--count: {e}"))?;
            }
            "--search" => config.search = Some(value("--search")?),
            "--seed" => {
                config.seed = Some(
                    value("--seed")?
                        .parse()
                        .map_err(|e| format!("--seed: {e}"))?,
                );
            }
            "--help" | "-h" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(config)
}

fn print_row(event: &netsentry::core::event::Event) {
    println!(
        "{}  {:<8}  {:<13}  {:<8}  {:<22}  {}",
        format_table_timestamp(&event.timestamp),
        event.severity.as_str(),
        event.status.as_str(),
        event.kind.as_str(),
        event.source,
        event.display_message(),
    );
}

fn main() -> Result<()> {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        "{} v{}: {} feed, one event per {}",
        constants::APP_NAME,
        constants::APP_VERSION,
        config.profile.as_str(),
        format_duration(config.interval),
    );

    let mut buffer = EventBuffer::new(config.capacity)?;

    // The subscription is the render path: each push prints one feed row.
    let subscription = buffer.subscribe(|change| {
        if let BufferChange::Pushed(event) = change {
            print_row(event);
        }
    });

    // Pre-populate the way the dashboard pages do. Seeds are newest-first,
    // so push oldest-first to keep the buffer ordering.
    let seeds = match config.profile {
        GeneratorProfile::Logs => seed_logs(),
        GeneratorProfile::Alerts => seed_alerts(),
        GeneratorProfile::Network => Vec::new(),
    };
    for event in seeds.into_iter().rev() {
        buffer.push(event);
    }

    let mut generator = match config.seed {
        Some(seed) => EventGenerator::seeded(config.profile, seed),
        None => EventGenerator::new(config.profile),
    };

    let (tx, rx) = crossbeam_channel::bounded(constants::CHANNEL_BOUND);
    let started = Instant::now();
    generator.start(config.interval, tx);

    let mut received = 0usize;
    while received < config.count {
        match rx.recv() {
            Ok(event) => {
                buffer.push(event);
                received += 1;
            }
            Err(_) => break,
        }
    }
    generator.stop();

    tracing::info!(
        "feed complete: {} events in {}, buffer holds {}/{}",
        received,
        format_duration(started.elapsed()),
        buffer.len(),
        buffer.capacity(),
    );

    if let Some(search) = config.search {
        let mut filter = FilterState {
            search_text: search.clone(),
            ..FilterState::default()
        };
        filter.update_search_cache();
        let matched = filter.apply(&buffer.all());
        println!("\n{} of {} events match \"{}\":", matched.len(), buffer.len(), search);
        for event in &matched {
            print_row(event);
        }
    }

    buffer.unsubscribe(subscription);
    Ok(())
}

/// Initialise the tracing subscriber: stderr, filtered by `RUST_LOG`
/// (default `info`).
fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::Layer as _;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}

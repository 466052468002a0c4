use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use elementary_automaton::{Cli, Config, Simulation, rendering};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let simulation = match Simulation::new(&config) {
        Ok(simulation) => simulation,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    run(simulation, &config);
}

/// Tick forever: clear, evolve, render, sleep. The stop flag raised by
/// SIGINT/SIGTERM is the single cancellation point, checked once per tick.
fn run(mut simulation: Simulation, config: &Config) {
    let stop = Arc::new(AtomicBool::new(false));
    #[cfg(unix)]
    {
        for signal in [signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM] {
            if let Err(error) = signal_hook::flag::register(signal, Arc::clone(&stop)) {
                tracing::warn!(%error, signal, "could not register signal handler");
            }
        }
    }

    let symbol = config.symbol.as_deref();

    // Confirmation print of generation zero, before the loop starts
    rendering::draw(simulation.tape(), symbol);

    while !stop.load(Ordering::Relaxed) {
        rendering::clear_screen(config.stacked);
        simulation.tick();
        rendering::draw(simulation.tape(), symbol);

        // A non-positive interval degrades to printing at full speed
        if config.interval_ms > 0 {
            thread::sleep(Duration::from_millis(config.interval_ms as u64));
        }
    }
}

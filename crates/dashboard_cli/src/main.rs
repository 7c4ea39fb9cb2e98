//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dashboard_core` linkage.
//! - Print the default world clocks so timezone data is exercised too.
//!
//! Usage: `dashboard_cli [--watch [TICKS]]`. With `--watch`, clock times are
//! re-rendered on the clock ticker cadence (default 5 ticks).

use chrono::Utc;
use dashboard_core::{
    default_clocks, init_from_config, logging_status, render_times, ClockTicker, DashboardConfig,
    WorldClock, TICK_INTERVAL,
};
use std::time::Instant;

const DEFAULT_WATCH_TICKS: u32 = 5;

fn main() {
    let config = DashboardConfig::from_env();
    if let Err(err) = init_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    println!("dashboard_core ping={}", dashboard_core::ping());
    println!("dashboard_core version={}", dashboard_core::core_version());
    match logging_status() {
        Some(status) => println!(
            "logging level={} log_dir={}",
            status.level,
            status.log_dir.display()
        ),
        None => println!("logging inactive"),
    }

    let clocks = default_clocks();
    match watch_ticks(std::env::args().skip(1)) {
        Ok(Some(ticks)) => watch(&clocks, ticks),
        Ok(None) => print_clocks(&clocks),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

/// Parses `--watch [TICKS]`; `Ok(None)` means print once.
fn watch_ticks(mut args: impl Iterator<Item = String>) -> Result<Option<u32>, String> {
    match args.next().as_deref() {
        None => Ok(None),
        Some("--watch") => match args.next() {
            None => Ok(Some(DEFAULT_WATCH_TICKS)),
            Some(raw) => raw
                .parse::<u32>()
                .map(Some)
                .map_err(|_| format!("invalid tick count `{raw}`")),
        },
        Some(other) => Err(format!("unknown argument `{other}`; usage: [--watch [TICKS]]")),
    }
}

fn watch(clocks: &[WorldClock], ticks: u32) {
    let mut ticker = ClockTicker::start(TICK_INTERVAL, Instant::now());
    let mut rendered = 0;
    while rendered < ticks {
        let at = Instant::now();
        if ticker.due(at) {
            print_clocks(clocks);
            rendered += 1;
        } else if let Some(wait) = ticker.remaining(at) {
            std::thread::sleep(wait);
        }
    }
    ticker.stop();
}

fn print_clocks(clocks: &[WorldClock]) {
    let times = render_times(clocks, Utc::now());
    for clock in clocks {
        let time = times.get(&clock.id).map(String::as_str).unwrap_or_default();
        println!(
            "clock city={} timezone={} time={}",
            clock.city, clock.timezone, time
        );
    }
}

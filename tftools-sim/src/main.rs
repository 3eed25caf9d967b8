mod watchdog;

use std::{sync::mpsc, time::Duration};

use log::info;
use tftools::{DurationExt, Micros, set_clock, time::clock::StdClock};
use tokio::task;

use crate::watchdog::{Heartbeat, run_watchdog};

// How long the simulated remote keeps sending heartbeats before going quiet
const REMOTE_ALIVE_FOR_MS: i64 = 1_500;
const HEARTBEAT_INTERVAL_MS: i64 = 250;

async fn run_remote(tx: mpsc::Sender<Heartbeat>) {
    let interval: Micros = HEARTBEAT_INTERVAL_MS.ms().into();
    let mut ticker = tokio::time::interval(Duration::from_millis(interval.millis() as u64));

    let stop_at = tftools::calculate_deadline(REMOTE_ALIVE_FOR_MS.ms());
    let mut sequence = 0;
    while !tftools::deadline_elapsed(stop_at) {
        ticker.tick().await;
        if tx.send(Heartbeat { sequence }).is_err() {
            break;
        }
        sequence += 1;
    }

    info!("Remote went quiet after {} heartbeats", sequence);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    set_clock(Box::leak(Box::new(StdClock::new())));

    let (tx, rx) = mpsc::channel();

    let _remote = task::spawn(run_remote(tx));
    let report = task::spawn(run_watchdog(rx)).await?;

    info!(
        "Watchdog tripped at {} after {} heartbeats",
        report.tripped_at, report.heartbeats
    );
    Ok(())
}

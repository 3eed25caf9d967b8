use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use log::{debug, error, info};
use tftools::{DurationExt, Micros, Optional, calculate_deadline, deadline_elapsed, now_us};

// Disable motion after no heartbeat was received for this long
const MAX_NO_HEARTBEAT_MS: i64 = 800;
// How often the watchdog checks the deadline
const WATCHDOG_UPDATE_INTERVAL_MS: u64 = 10;

pub struct Heartbeat {
    pub sequence: u32,
}

pub struct WatchdogReport {
    pub heartbeats: u32,
    pub tripped_at: Micros,
}

/// Polls for heartbeats until none arrived within MAX_NO_HEARTBEAT_MS of the last one
pub async fn run_watchdog(rx: Receiver<Heartbeat>) -> WatchdogReport {
    let mut interval = tokio::time::interval(Duration::from_millis(WATCHDOG_UPDATE_INTERVAL_MS));
    // Empty until the remote connects
    let mut deadline: Optional<Micros> = Optional::none();
    let mut heartbeats = 0;

    info!("Watchdog started");

    loop {
        interval.tick().await;

        loop {
            match rx.try_recv() {
                Ok(heartbeat) => {
                    if deadline.is_none() {
                        info!("Remote connected");
                    }
                    debug!("Heartbeat {}", heartbeat.sequence);
                    deadline.insert(calculate_deadline(MAX_NO_HEARTBEAT_MS.ms()));
                    heartbeats += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if deadline.is_none() {
                        error!("Remote disconnected before sending a heartbeat");
                        return WatchdogReport {
                            heartbeats,
                            tripped_at: now_us(),
                        };
                    }
                    break;
                }
            }
        }

        let mut current = Micros::ZERO;
        if deadline.try_unwrap(&mut current) && deadline_elapsed(current) {
            let now = now_us();
            error!(
                "No heartbeat for {} ms. Disabling motion",
                (now - current + Micros::from(MAX_NO_HEARTBEAT_MS.ms())).millis()
            );
            deadline.clear();

            return WatchdogReport {
                heartbeats,
                tripped_at: now,
            };
        }
    }
}

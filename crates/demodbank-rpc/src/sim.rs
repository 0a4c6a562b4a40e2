//! Simulated producer: stands in for the external DSP pipeline.
//!
//! Runs on a plain OS thread, like the real demodulator would, and writes
//! through the same bank guard the snapshot layer reads through. Values are
//! phase-derived and deterministic; no RNG.

use demodbank_core::ChannelBank;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Spawn the producer thread. It rewrites every channel each tick and runs
/// until the process exits.
pub fn spawn_producer(bank: Arc<ChannelBank>, period: Duration) -> anyhow::Result<()> {
    info!(
        "Starting simulated producer ({} ms tick)",
        period.as_millis()
    );

    std::thread::Builder::new()
        .name("sim-producer".to_string())
        .spawn(move || {
            let mut tick: u64 = 0;
            loop {
                bank.with_channels_mut(|channels| {
                    for (i, ch) in channels.iter_mut().enumerate() {
                        let phase = tick as f64 * 0.05 + i as f64 * 0.7;
                        ch.set_timing_offset(0.5 * phase.sin());
                        ch.set_frequency_offset(0.25 * (phase * 0.31).cos());
                        ch.set_power_level(1.0 + 0.1 * (phase * 0.13).sin());
                        // Each channel spends a stretch of every cycle muted so
                        // clients observe both states.
                        ch.set_is_muted((tick / 64 + i as u64) % 4 == 0);
                    }
                });
                tick += 1;
                std::thread::sleep(period);
            }
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_writes_all_channels() {
        let bank = Arc::new(ChannelBank::new(3));
        spawn_producer(Arc::clone(&bank), Duration::from_millis(1)).unwrap();

        // The first tick happens immediately; poll briefly for it to land.
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        loop {
            let all_written = bank.with_channels(|channels| {
                channels.iter().all(|ch| ch.power_level() != 0.0)
            });
            if all_written {
                break;
            }
            assert!(
                std::time::Instant::now() < deadline,
                "producer never wrote the bank"
            );
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}

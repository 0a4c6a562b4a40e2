//! Per-channel demodulator state and its wire-facing snapshot.

use serde::{Deserialize, Serialize};

/// Mutable state of one demodulator channel.
///
/// Owned by the producer side of the pipeline; the snapshot layer only ever
/// reads it. All access (reads and writes) happens inside the
/// [`ChannelBank`](crate::ChannelBank) guard, which is what makes a
/// [`snapshot`](ChannelState::snapshot) internally consistent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelState {
    timing_offset: f64,
    frequency_offset: f64,
    power_level: f64,
    is_muted: bool,
}

impl ChannelState {
    pub fn timing_offset(&self) -> f64 {
        self.timing_offset
    }

    pub fn frequency_offset(&self) -> f64 {
        self.frequency_offset
    }

    /// Reserved: the producer may not yet populate a meaningful value.
    pub fn power_level(&self) -> f64 {
        self.power_level
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn set_timing_offset(&mut self, value: f64) {
        self.timing_offset = value;
    }

    pub fn set_frequency_offset(&mut self, value: f64) {
        self.frequency_offset = value;
    }

    pub fn set_power_level(&mut self, value: f64) {
        self.power_level = value;
    }

    pub fn set_is_muted(&mut self, muted: bool) {
        self.is_muted = muted;
    }

    /// Copy all four fields into a report. Callers invoke this inside the
    /// bank's locked closure, so one report is always one critical section.
    pub fn snapshot(&self) -> ChannelInfo {
        ChannelInfo {
            timing_offset: self.timing_offset,
            frequency_offset: self.frequency_offset,
            power_level: self.power_level,
            is_muted: self.is_muted,
        }
    }
}

/// Point-in-time report of one channel, as served to remote clients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub timing_offset: f64,
    pub frequency_offset: f64,
    pub power_level: f64,
    pub is_muted: bool,
}

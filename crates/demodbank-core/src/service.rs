//! The service root and per-channel handles published over RPC.

use crate::bank::ChannelBank;
use crate::channel::{ChannelInfo, ChannelState};
use crate::error::{MonitorError, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Service-wide status report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Seconds since the service was constructed.
    pub uptime: f64,
    pub channel_count: usize,
}

/// A remote-callable reference to one channel of the bank.
///
/// Bound to a fixed index at construction and stateless otherwise. Handles are
/// minted fresh on every `list_channels` call; dropping one has no effect on
/// the bank.
#[derive(Clone)]
pub struct ChannelHandle {
    bank: Arc<ChannelBank>,
    index: usize,
}

impl ChannelHandle {
    fn new(bank: Arc<ChannelBank>, index: usize) -> Self {
        Self { bank, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Snapshot the bound channel.
    ///
    /// One guard acquisition per call. A client iterating over many handles
    /// relocks once per channel; see [`MonitorService::all_infos`] for the
    /// single-acquisition alternative.
    pub fn get_info(&self) -> Result<ChannelInfo> {
        self.bank.with_channels(|channels| {
            channels
                .get(self.index)
                .map(ChannelState::snapshot)
                .ok_or(MonitorError::ChannelNotFound { index: self.index })
        })
    }
}

/// The top-level service object: answers service-wide queries and hands out
/// per-channel handles.
pub struct MonitorService {
    bank: Arc<ChannelBank>,
    started_at: Instant,
    // The bank never grows or shrinks, so the count is cached here and
    // get_info never touches the guard.
    channel_count: usize,
}

impl MonitorService {
    /// Construct the service; the moment of construction is the service start
    /// time reported by [`get_info`](MonitorService::get_info).
    pub fn new(bank: Arc<ChannelBank>) -> Self {
        let channel_count = bank.channel_count();
        Self {
            bank,
            started_at: Instant::now(),
            channel_count,
        }
    }

    /// Service-wide status. No locking; always succeeds.
    pub fn get_info(&self) -> ServiceInfo {
        ServiceInfo {
            uptime: self.started_at.elapsed().as_secs_f64(),
            channel_count: self.channel_count,
        }
    }

    /// Mint one fresh handle per channel, in bank order.
    ///
    /// The guard is acquired once to read the count and released before the
    /// handles are returned; each handle's own calls relock independently.
    pub fn list_channels(&self) -> Vec<ChannelHandle> {
        let count = self.bank.with_channels(|channels| channels.len());
        (0..count)
            .map(|index| ChannelHandle::new(Arc::clone(&self.bank), index))
            .collect()
    }

    /// Snapshot every channel in a single guard acquisition.
    ///
    /// Unlike iterating handles, the returned reports are additionally
    /// consistent across channels (one critical section for the whole bank).
    pub fn all_infos(&self) -> Vec<ChannelInfo> {
        self.bank
            .with_channels(|channels| channels.iter().map(ChannelState::snapshot).collect())
    }
}

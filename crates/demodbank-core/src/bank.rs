//! The shared, mutex-guarded array of channel states.

use crate::channel::ChannelState;
use std::sync::Mutex;

/// Ordered bank of channel states behind a single mutex.
///
/// The channel count is fixed at construction and never changes for the life
/// of the process. Everything that touches the records - the producer writing
/// them and the snapshot layer reading them - goes through the same guard; no
/// second lock, no read/write split.
///
/// The write path hands out `&mut [ChannelState]` (a slice, not the Vec), so
/// the producer can rewrite records but can never add or remove channels.
pub struct ChannelBank {
    channels: Mutex<Vec<ChannelState>>,
}

impl ChannelBank {
    /// Create a bank of `channel_count` zeroed channels.
    pub fn new(channel_count: usize) -> Self {
        Self {
            channels: Mutex::new(vec![ChannelState::default(); channel_count]),
        }
    }

    /// Run `f` with read access to the full ordered slice of channels.
    ///
    /// The guard is held only for the duration of `f`; critical sections in
    /// this crate are a handful of field copies and never re-enter the bank.
    pub fn with_channels<R>(&self, f: impl FnOnce(&[ChannelState]) -> R) -> R {
        let guard = self.channels.lock().expect("channel bank mutex poisoned");
        f(&guard)
    }

    /// Run `f` with write access to the channel records (the producer path).
    pub fn with_channels_mut<R>(&self, f: impl FnOnce(&mut [ChannelState]) -> R) -> R {
        let mut guard = self.channels.lock().expect("channel bank mutex poisoned");
        f(&mut guard)
    }

    /// Number of channels in the bank.
    pub fn channel_count(&self) -> usize {
        self.with_channels(|channels| channels.len())
    }
}

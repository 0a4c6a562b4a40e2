//! Demodbank Core - Headless snapshot layer over a bank of demodulator channels.
//!
//! This crate exposes read-only, point-in-time status of a bank of
//! independently-running demodulator channels. The channel records themselves
//! are written by an external DSP pipeline; this crate only reads them, one
//! guarded critical section per snapshot, so every report a caller receives is
//! internally consistent.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use demodbank_core::{ChannelBank, MonitorService};
//!
//! let bank = Arc::new(ChannelBank::new(4));
//! let service = MonitorService::new(Arc::clone(&bank));
//!
//! for handle in service.list_channels() {
//!     let info = handle.get_info().unwrap();
//!     println!("channel {}: muted={}", handle.index(), info.is_muted);
//! }
//! ```

pub mod bank;
pub mod channel;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use bank::ChannelBank;
pub use channel::{ChannelInfo, ChannelState};
pub use error::{MonitorError, Result};
pub use service::{ChannelHandle, MonitorService, ServiceInfo};

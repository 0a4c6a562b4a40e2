//! Registry of live remote channel handles.
//!
//! The HTTP transport has no distributed GC, so "the caller dropped its
//! reference" is realized as an explicit `release_channels` call. Clients
//! that never release leak entries until process exit; acceptable for a
//! monitoring endpoint.
//! TODO: sweep entries with a TTL so misbehaving clients cannot grow the map
//! unboundedly.

use demodbank_core::ChannelHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub struct HandleRegistry {
    next_id: AtomicU64,
    handles: RwLock<HashMap<u64, ChannelHandle>>,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            handles: RwLock::new(HashMap::new()),
        }
    }

    /// Mint a fresh id for `handle` and keep it callable until released.
    pub async fn register(&self, handle: ChannelHandle) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.handles.write().await.insert(id, handle);
        id
    }

    pub async fn get(&self, id: u64) -> Option<ChannelHandle> {
        self.handles.read().await.get(&id).cloned()
    }

    /// Drop the given ids; returns how many were actually live.
    pub async fn release(&self, ids: &[u64]) -> usize {
        let mut handles = self.handles.write().await;
        ids.iter().filter(|id| handles.remove(id).is_some()).count()
    }

    pub async fn live_count(&self) -> usize {
        self.handles.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demodbank_core::{ChannelBank, MonitorService};
    use std::sync::Arc;

    fn make_handles(count: usize) -> Vec<ChannelHandle> {
        let bank = Arc::new(ChannelBank::new(count));
        MonitorService::new(bank).list_channels()
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_resolvable() {
        let registry = HandleRegistry::new();
        let mut ids = Vec::new();
        for handle in make_handles(3) {
            ids.push(registry.register(handle).await);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert_eq!(registry.live_count().await, 3);

        for (i, id) in ids.iter().enumerate() {
            let handle = registry.get(*id).await.expect("registered handle");
            assert_eq!(handle.index(), i);
        }
    }

    #[tokio::test]
    async fn test_release_removes_only_named_ids() {
        let registry = HandleRegistry::new();
        let mut ids = Vec::new();
        for handle in make_handles(3) {
            ids.push(registry.register(handle).await);
        }

        // Release one live id and one that never existed.
        let released = registry.release(&[ids[1], 9999]).await;
        assert_eq!(released, 1);
        assert_eq!(registry.live_count().await, 2);
        assert!(registry.get(ids[1]).await.is_none());
        assert!(registry.get(ids[0]).await.is_some());

        // Releasing again is a no-op.
        assert_eq!(registry.release(&[ids[1]]).await, 0);
    }
}

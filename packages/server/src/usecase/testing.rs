//! Test doubles shared by the use case tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, EventPusher, ServerEvent},
    infrastructure::repository::InMemoryConnectionRegistry,
};

/// Records every push instead of delivering it.
///
/// `push_all` targets the connections registered with [`RecordingPusher::attach`].
#[derive(Default)]
pub struct RecordingPusher {
    deliveries: Mutex<Vec<(Vec<ConnectionId>, ServerEvent)>>,
    attached: Mutex<Vec<ConnectionId>>,
}

impl RecordingPusher {
    /// Mark a transport connection as live (signed in or not)
    pub fn attach(&self, connection_id: ConnectionId) {
        self.attached.lock().unwrap().push(connection_id);
    }

    /// Every push, in call order
    pub fn deliveries(&self) -> Vec<(Vec<ConnectionId>, ServerEvent)> {
        self.deliveries.lock().unwrap().clone()
    }

    /// Events received by one connection, in order
    pub fn events_for(&self, connection_id: &ConnectionId) -> Vec<ServerEvent> {
        self.deliveries()
            .into_iter()
            .filter(|(targets, _)| targets.contains(connection_id))
            .map(|(_, event)| event)
            .collect()
    }

    pub fn clear(&self) {
        self.deliveries.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventPusher for RecordingPusher {
    async fn push(&self, targets: &[ConnectionId], event: &ServerEvent) {
        self.deliveries
            .lock()
            .unwrap()
            .push((targets.to_vec(), event.clone()));
    }

    async fn push_all(&self, event: &ServerEvent) -> usize {
        let targets = self.attached.lock().unwrap().clone();
        let count = targets.len();
        self.deliveries
            .lock()
            .unwrap()
            .push((targets, event.clone()));
        count
    }
}

pub fn id(s: &str) -> ConnectionId {
    ConnectionId::new(s.to_string()).unwrap()
}

pub fn create_test_registry() -> Arc<InMemoryConnectionRegistry> {
    Arc::new(InMemoryConnectionRegistry::new())
}

pub fn create_test_dependencies() -> (Arc<dyn ConnectionRegistry>, Arc<RecordingPusher>) {
    let registry: Arc<dyn ConnectionRegistry> = create_test_registry();
    (registry, Arc::new(RecordingPusher::default()))
}

use crate::identity::Identity;
use crate::session::EditSession;
use crate::store::RecordStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Everything one dashboard instance tracks: the captured identity (if any)
/// and the edit flow for the volume chart.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub identity: Option<Identity>,
    pub session: EditSession,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            dashboard: Arc::new(Mutex::new(Dashboard::default())),
        }
    }
}

// Application state (AppState)

use crate::core::config::Config;
use crate::source::roster::RosterSource;
use crate::stores::roster_store::RosterStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and handed to the router; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    /// Latest roster snapshot
    pub roster: Arc<RosterStore>,

    /// Storage of record for people and their seats
    pub source: Arc<dyn RosterSource>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn RosterSource>) -> Self {
        Self {
            roster: Arc::new(RosterStore::new()),
            source,
            config: Arc::new(config),
        }
    }
}

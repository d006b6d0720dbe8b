//! Shared fixtures for unit tests

use crate::core::config::{
    AdminConfig, Config, LoggingConfig, OccupancyConfig, ServerConfig, SourceConfig,
};
use crate::core::state::AppState;
use crate::models::person::Person;
use crate::source::roster::RosterSource;
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const ADMIN_KEY: &str = "test-admin-key";

/// Roster source held in memory. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemorySource {
    people: Arc<Mutex<Vec<Person>>>,
    failing: Arc<AtomicBool>,
}

impl MemorySource {
    pub fn new(people: Vec<Person>) -> Self {
        Self {
            people: Arc::new(Mutex::new(people)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    pub fn stored_seat(&self, id: &str) -> Option<String> {
        self.people
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| p.seat.clone())
    }
}

#[async_trait]
impl RosterSource for MemorySource {
    async fn fetch_roster(&self) -> Result<Vec<Person>> {
        if self.failing.load(Ordering::Relaxed) {
            bail!("source unavailable");
        }
        Ok(self.people.lock().unwrap().clone())
    }

    async fn update_seat(&self, person_id: &str, seat: Option<&str>) -> Result<Option<Person>> {
        if self.failing.load(Ordering::Relaxed) {
            bail!("source unavailable");
        }

        let mut people = self.people.lock().unwrap();
        let Some(person) = people.iter_mut().find(|p| p.id == person_id) else {
            return Ok(None);
        };

        person.seat = seat.map(str::to_string);
        person.updated_at = Utc::now();
        Ok(Some(person.clone()))
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            port: Some(8080),
            unix_socket: None,
            num_threads: 2,
        },
        source: SourceConfig {
            spreadsheet_id: "sheet-123".to_string(),
            api_key: "sheets-key".to_string(),
            range: "Sheet1!A:J".to_string(),
            base_url: "http://localhost:9000/v4/spreadsheets".to_string(),
            refresh_interval: 30,
            timeout: 5,
        },
        admin: AdminConfig {
            api_key: ADMIN_KEY.to_string(),
        },
        occupancy: OccupancyConfig {
            default_top_groups: 5,
            max_top_groups: 10,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
            console: true,
        },
    }
}

/// State with an empty store; call `refresh_roster` to load people
pub fn test_state(source: MemorySource) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), Arc::new(source)))
}

/// State whose store already holds `people`
pub fn seeded_state(people: Vec<Person>) -> (Arc<AppState>, MemorySource) {
    let source = MemorySource::new(people.clone());
    let state = test_state(source.clone());
    state.roster.replace_all(people, 1);
    (state, source)
}

pub fn fan(id: &str, seat: Option<&str>) -> Person {
    let person = Person::new(id, format!("Fan {}", id), format!("{}@example.com", id));
    match seat {
        Some(seat) => person.with_seat(seat),
        None => person,
    }
}

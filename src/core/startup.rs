use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::core::state::AppState;
use crate::seating::occupancy;
use crate::utils::time::current_timestamp;

/// Pull a fresh roster from the source and swap it into the store.
/// Returns the number of people loaded.
pub async fn refresh_roster(state: &AppState) -> Result<usize> {
    let people = state
        .source
        .fetch_roster()
        .await
        .context("Failed to fetch roster from source")?;

    let grouping = occupancy::group_by_side(&people);
    info!(
        people = people.len(),
        seated = people.len() - grouping.unassigned.len() - grouping.malformed.len(),
        unassigned = grouping.unassigned.len(),
        malformed = grouping.malformed.len(),
        "Roster fetched"
    );

    let count = people.len();
    state.roster.replace_all(people, current_timestamp() as u64);

    Ok(count)
}

/// Spawn a background task that periodically refreshes the roster
pub fn spawn_refresh_task(state: Arc<AppState>, refresh_interval: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(refresh_interval));
        // The first tick completes immediately and startup already loaded the roster
        interval.tick().await;

        loop {
            interval.tick().await;

            debug!("Refreshing roster");
            if let Err(e) = refresh_roster(&state).await {
                error!(
                    error = %e,
                    people = state.roster.len(),
                    "Roster refresh failed, keeping previous snapshot"
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_state, MemorySource};
    use crate::models::person::Person;

    #[tokio::test]
    async fn test_refresh_roster_replaces_snapshot() {
        let source = MemorySource::new(vec![
            Person::new("a", "Ana", "ana@example.com").with_seat("NORTE-427-A1"),
            Person::new("b", "Bruno", "bruno@example.com"),
        ]);
        let state = test_state(source);

        let loaded = refresh_roster(&state).await.unwrap();

        assert_eq!(loaded, 2);
        assert_eq!(state.roster.len(), 2);
        assert!(state.roster.last_refresh() > 0);
    }

    #[tokio::test]
    async fn test_refresh_roster_failure_keeps_previous() {
        let source = MemorySource::new(vec![Person::new("a", "Ana", "ana@example.com")]);
        let state = test_state(source.clone());
        refresh_roster(&state).await.unwrap();

        source.set_failing(true);
        assert!(refresh_roster(&state).await.is_err());
        assert_eq!(state.roster.len(), 1);
    }
}

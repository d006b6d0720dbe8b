use crate::models::person::Person;
use anyhow::Result;
use async_trait::async_trait;

/// Where the roster comes from.
///
/// Handlers and the refresh task only see this trait, so the aggregation
/// code does not care how freshness is achieved.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch a full snapshot of registered people, in storage order
    async fn fetch_roster(&self) -> Result<Vec<Person>>;

    /// Persist a person's seat code (`None` clears it).
    /// Returns the stored person, or `None` if no such id exists.
    async fn update_seat(&self, person_id: &str, seat: Option<&str>) -> Result<Option<Person>>;
}

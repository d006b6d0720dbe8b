use crate::core::config::SourceConfig;
use crate::models::person::Person;
use crate::source::roster::RosterSource;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Number of columns in a roster row (A..J)
const COLUMNS: usize = 10;

/// Roster backed by a spreadsheet exposed through the values REST API.
///
/// Row 1 is a header. Columns are
/// `id, name, email, whatsapp, sector, bio, avatar, isAdmin, createdAt, updatedAt`.
pub struct SheetsSource {
    client: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
    range: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ValueUpdate {
    values: Vec<Vec<String>>,
}

impl SheetsSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_key: config.api_key.clone(),
            range: config.range.clone(),
        })
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/{}/values/{}", self.base_url, self.spreadsheet_id, range)
    }

    /// Raw data rows, header excluded
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>> {
        let response = self
            .client
            .get(self.values_url(&self.range))
            .query(&[("key", &self.api_key)])
            .send()
            .await
            .context("Failed to send request to spreadsheet API")?;

        if !response.status().is_success() {
            bail!("Spreadsheet API returned error status: {}", response.status());
        }

        let data = response
            .json::<ValueRange>()
            .await
            .context("Failed to parse JSON response from spreadsheet API")?;

        Ok(data.values.into_iter().skip(1).collect())
    }

    async fn write_row(&self, row_number: usize, person: &Person) -> Result<()> {
        let range = format!(
            "{}!A{}:J{}",
            sheet_name(&self.range),
            row_number,
            row_number
        );

        let response = self
            .client
            .put(self.values_url(&range))
            .query(&[("key", self.api_key.as_str()), ("valueInputOption", "RAW")])
            .json(&ValueUpdate {
                values: vec![row_from_person(person)],
            })
            .send()
            .await
            .context("Failed to send row update to spreadsheet API")?;

        if !response.status().is_success() {
            bail!("Spreadsheet API returned error status: {}", response.status());
        }

        Ok(())
    }
}

#[async_trait]
impl RosterSource for SheetsSource {
    async fn fetch_roster(&self) -> Result<Vec<Person>> {
        let rows = self.fetch_rows().await?;

        let people: Vec<Person> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| person_from_row(index, row))
            .collect();

        debug!(people = people.len(), "Roster fetched from spreadsheet");

        Ok(people)
    }

    async fn update_seat(&self, person_id: &str, seat: Option<&str>) -> Result<Option<Person>> {
        let rows = self.fetch_rows().await?;

        let found = rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index, person_from_row(index, row)))
            .find(|(_, person)| person.id == person_id);

        let Some((index, mut person)) = found else {
            return Ok(None);
        };

        person.seat = seat.map(str::to_string);
        person.updated_at = Utc::now();

        // +1 for the header row, +1 because sheet rows start at 1
        self.write_row(index + 2, &person).await?;

        info!(person_id = %person_id, seat = ?person.seat, "Seat stored in spreadsheet");

        Ok(Some(person))
    }
}

/// Sheet name part of an `A1` range, `Sheet1` when none is given
fn sheet_name(range: &str) -> &str {
    match range.split_once('!') {
        Some((name, _)) if !name.is_empty() => name,
        _ => "Sheet1",
    }
}

fn cell(row: &[String], column: usize) -> Option<&str> {
    row.get(column)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn timestamp(row: &[String], column: usize) -> DateTime<Utc> {
    cell(row, column)
        .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

/// Map a data row to a person. Short rows are padded with blanks.
pub fn person_from_row(index: usize, row: &[String]) -> Person {
    let text = |column| cell(row, column).unwrap_or_default().to_string();
    let optional = |column| cell(row, column).map(str::to_string);

    Person {
        id: cell(row, 0)
            .map(str::to_string)
            .unwrap_or_else(|| format!("user_{}", index + 1)),
        name: text(1),
        email: text(2),
        whatsapp: text(3),
        seat: optional(4),
        bio: optional(5),
        avatar: optional(6),
        is_admin: cell(row, 7) == Some("true"),
        created_at: timestamp(row, 8),
        updated_at: timestamp(row, 9),
    }
}

pub fn row_from_person(person: &Person) -> Vec<String> {
    let row = vec![
        person.id.clone(),
        person.name.clone(),
        person.email.clone(),
        person.whatsapp.clone(),
        person.seat.clone().unwrap_or_default(),
        person.bio.clone().unwrap_or_default(),
        person.avatar.clone().unwrap_or_default(),
        person.is_admin.to_string(),
        person.created_at.to_rfc3339(),
        person.updated_at.to_rfc3339(),
    ];
    debug_assert_eq!(row.len(), COLUMNS);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn test_config() -> SourceConfig {
        SourceConfig {
            spreadsheet_id: "sheet-123".to_string(),
            api_key: "test-api-key".to_string(),
            range: "Fans!A:J".to_string(),
            base_url: "http://localhost:9000/v4/spreadsheets/".to_string(),
            refresh_interval: 30,
            timeout: 5,
        }
    }

    #[test]
    fn test_source_creation() {
        let source = SheetsSource::new(&test_config()).unwrap();
        assert_eq!(
            source.values_url("Fans!A:J"),
            "http://localhost:9000/v4/spreadsheets/sheet-123/values/Fans!A:J"
        );
    }

    #[test]
    fn test_person_from_full_row() {
        let row = strings(&[
            "user_17",
            "Ana",
            "ana@example.com",
            "(11) 91234-5678",
            "NORTE-427-A1",
            "Chargers fan",
            "",
            "true",
            "2025-08-01T12:00:00Z",
            "2025-08-02T12:00:00+00:00",
        ]);

        let person = person_from_row(0, &row);
        assert_eq!(person.id, "user_17");
        assert_eq!(person.name, "Ana");
        assert_eq!(person.seat.as_deref(), Some("NORTE-427-A1"));
        assert_eq!(person.bio.as_deref(), Some("Chargers fan"));
        assert_eq!(person.avatar, None);
        assert!(person.is_admin);
        assert_eq!(person.created_at.to_rfc3339(), "2025-08-01T12:00:00+00:00");
    }

    #[test]
    fn test_person_from_short_row() {
        let row = strings(&["", "Bruno", "bruno@example.com"]);

        let person = person_from_row(4, &row);
        assert_eq!(person.id, "user_5");
        assert_eq!(person.whatsapp, "");
        assert_eq!(person.seat, None);
        assert!(!person.is_admin);
    }

    #[test]
    fn test_row_round_trip() {
        let person = Person::new("user_1", "Ana", "ana@example.com").with_seat("SUL-410-B2");
        let row = row_from_person(&person);

        assert_eq!(row.len(), COLUMNS);
        assert_eq!(row[4], "SUL-410-B2");
        assert_eq!(row[7], "false");

        let back = person_from_row(0, &row);
        assert_eq!(back.id, person.id);
        assert_eq!(back.seat, person.seat);
        assert_eq!(back.created_at.timestamp(), person.created_at.timestamp());
    }

    #[test]
    fn test_sheet_name() {
        assert_eq!(sheet_name("Fans!A:J"), "Fans");
        assert_eq!(sheet_name("A:J"), "Sheet1");
        assert_eq!(sheet_name("!A:J"), "Sheet1");
    }

    #[test]
    fn test_value_range_without_values() {
        let data: ValueRange = serde_json::from_str(r#"{"range":"Sheet1!A1:J1"}"#).unwrap();
        assert!(data.values.is_empty());
    }
}

use crate::core::error::SeatCodeError;
use crate::models::seat::SeatCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered fan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    /// Contact handle used for login by the identity provider
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    /// Raw stored seat code, `None` while the fan has not picked a seat
    #[serde(default)]
    pub seat: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Where a person stands with respect to seating
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    Unassigned,
    Malformed(SeatCodeError),
    Seated(SeatCode),
}

impl Person {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            whatsapp: String::new(),
            seat: None,
            bio: None,
            avatar: None,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = Some(seat.into());
        self
    }

    /// Blank seat strings count as unassigned
    pub fn placement(&self) -> Placement {
        match self.seat.as_deref().map(str::trim) {
            None | Some("") => Placement::Unassigned,
            Some(raw) => match crate::seating::code::parse(raw) {
                Ok(code) => Placement::Seated(code),
                Err(e) => Placement::Malformed(e),
            },
        }
    }

    pub fn seat_code(&self) -> Option<SeatCode> {
        match self.placement() {
            Placement::Seated(code) => Some(code),
            _ => None,
        }
    }
}

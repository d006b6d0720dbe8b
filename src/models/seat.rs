use crate::core::error::SeatCodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used in the persisted seat code form
pub const SEPARATOR: char = '-';

/// One of the four stadium sides, the top level of the seating hierarchy.
///
/// Declaration order drives ordering in grouped views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Norte,
    Leste,
    Sul,
    Oeste,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Norte, Side::Leste, Side::Sul, Side::Oeste];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Norte => "NORTE",
            Side::Leste => "LESTE",
            Side::Sul => "SUL",
            Side::Oeste => "OESTE",
        }
    }

    /// Where the side sits on the stadium map
    pub fn position(&self) -> &'static str {
        match self {
            Side::Norte => "Lado Esquerdo",
            Side::Leste => "Lado Superior",
            Side::Sul => "Lado Direito",
            Side::Oeste => "Lado Inferior",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = SeatCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Side::ALL
            .into_iter()
            .find(|side| side.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SeatCodeError::UnknownSide(trimmed.to_string()))
    }
}

/// A well-formed `SIDE-SECTION-ROW` seat code.
///
/// Only produced by `seating::code::parse` or `SeatCode::new`, both of which
/// check the section against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeatCode {
    pub side: Side,
    pub section: String,
    pub row: String,
}

impl SeatCode {
    /// Build a seat code from user input destined for storage.
    /// The row is normalized (trimmed, uppercased) and must pass row validation.
    pub fn new(side: Side, section: &str, row: &str) -> Result<Self, SeatCodeError> {
        let section = section.trim();
        if section.is_empty() {
            return Err(SeatCodeError::MissingParts { found: 2 });
        }

        if !crate::catalog::sectors::contains(side, section) {
            return Err(SeatCodeError::UnknownSection {
                side,
                section: section.to_string(),
            });
        }

        let row = crate::seating::code::normalize_row(row)?;

        Ok(Self {
            side,
            section: section.to_string(),
            row,
        })
    }

    pub fn section_key(&self) -> SectionKey {
        SectionKey {
            side: self.side,
            section: self.section.clone(),
        }
    }
}

impl fmt::Display for SeatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.side, SEPARATOR, self.section, SEPARATOR, self.row
        )
    }
}

/// The `side-section` grouping key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionKey {
    pub side: Side,
    pub section: String,
}

impl SectionKey {
    pub fn new(side: Side, section: impl Into<String>) -> Self {
        Self {
            side,
            section: section.into(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.side, SEPARATOR, self.section)
    }
}

impl Serialize for SectionKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

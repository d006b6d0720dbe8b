//! Compiled-in seating catalog for the stadium.
//!
//! Each side lists its sections in the order they appear on the seat picker.
//! Upper-level sections carry dotted codes (`.427.`). A few section numbers
//! repeat within a side with a different zone letter; lookups return the
//! first entry.

use crate::models::seat::Side;
use serde::Serialize;

/// A single section of the stadium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorEntry {
    pub side: Side,
    /// Section code as stored in seat codes
    pub section: &'static str,
    /// Pricing zone letter printed on the ticket
    pub zone: char,
    pub label: &'static str,
}

const fn entry(side: Side, section: &'static str, zone: char, label: &'static str) -> SectorEntry {
    SectorEntry {
        side,
        section,
        zone,
        label,
    }
}

const NORTE: &[SectorEntry] = &[
    entry(Side::Norte, "427", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "428", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "429", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "430", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "431", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "432", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "433", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, "434", 'J', "Norte Endzone - Nível 1"),
    entry(Side::Norte, ".427.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".428.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".429.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".430.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".431.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".432.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".433.", 'M', "Norte Endzone - Nível 2"),
    entry(Side::Norte, ".434.", 'M', "Norte Endzone - Nível 2"),
];

const SUL: &[SectorEntry] = &[
    entry(Side::Sul, "410", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "411", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "412", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "413", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "414", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "415", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "416", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, "417", 'J', "Sul Endzone - Nível 1"),
    entry(Side::Sul, ".410.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".411.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".412.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".413.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".414.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".415.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".416.", 'M', "Sul Endzone - Nível 2"),
    entry(Side::Sul, ".417.", 'M', "Sul Endzone - Nível 2"),
];

const LESTE: &[SectorEntry] = &[
    entry(Side::Leste, "418", 'G', "Leste Inferior Lateral Corner - Nível 1"),
    entry(Side::Leste, "419", 'E', "Leste Inferior Lateral - Nível 1"),
    entry(Side::Leste, "420", 'E', "Leste Inferior Lateral - Nível 1"),
    entry(Side::Leste, "421", 'C', "Leste Inferior Lateral Premium - Nível 1"),
    entry(Side::Leste, "422", 'A', "Leste Inferior Central Premium - Nível 1"),
    entry(Side::Leste, "423", 'C', "Leste Inferior Lateral Premium - Nível 1"),
    entry(Side::Leste, "424", 'E', "Leste Inferior Lateral - Nível 1"),
    entry(Side::Leste, "425", 'E', "Leste Inferior Lateral - Nível 1"),
    entry(Side::Leste, "426", 'G', "Leste Inferior Lateral Corner - Nível 1"),
    entry(Side::Leste, "617", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, "618", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, "619", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, "620", 'I', "Leste Superior Lateral - Nível 1"),
    entry(Side::Leste, "621", 'I', "Leste Superior Lateral - Nível 1"),
    entry(Side::Leste, "622", 'I', "Leste Superior Lateral - Nível 1"),
    entry(Side::Leste, "623", 'I', "Leste Superior Lateral - Nível 1"),
    entry(Side::Leste, "624", 'I', "Leste Superior Lateral - Nível 1"),
    entry(Side::Leste, "625", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, "626", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, "627", 'L', "Leste Superior Lateral Corner - Nível 1"),
    entry(Side::Leste, ".418.", 'H', "Leste Inferior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".419.", 'F', "Leste Inferior Lateral - Nível 2"),
    entry(Side::Leste, ".420.", 'F', "Leste Inferior Lateral - Nível 2"),
    entry(Side::Leste, ".421.", 'D', "Leste Inferior Lateral Premium - Nível 2"),
    entry(Side::Leste, ".422.", 'B', "Leste Inferior Central Premium - Nível 2"),
    entry(Side::Leste, ".422.", 'F', "Leste Inferior Lateral - Nível 2"),
    entry(Side::Leste, ".423.", 'D', "Leste Inferior Lateral Premium - Nível 2"),
    entry(Side::Leste, ".425.", 'F', "Leste Inferior Lateral - Nível 2"),
    entry(Side::Leste, ".426.", 'H', "Leste Inferior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".617.", 'N', "Leste Superior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".618.", 'N', "Leste Superior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".619.", 'N', "Leste Superior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".620.", 'K', "Leste Superior Lateral - Nível 2"),
    entry(Side::Leste, ".621.", 'K', "Leste Superior Lateral - Nível 2"),
    entry(Side::Leste, ".622.", 'K', "Leste Superior Lateral - Nível 2"),
    entry(Side::Leste, ".623.", 'K', "Leste Superior Lateral - Nível 2"),
    entry(Side::Leste, ".624.", 'K', "Leste Superior Lateral - Nível 2"),
    entry(Side::Leste, ".625.", 'N', "Leste Superior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".626.", 'N', "Leste Superior Lateral Corner - Nível 2"),
    entry(Side::Leste, ".627.", 'N', "Leste Superior Lateral Corner - Nível 2"),
];

const OESTE: &[SectorEntry] = &[
    entry(Side::Oeste, "401", 'G', "Oeste Inferior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "402", 'E', "Oeste Inferior Lateral - Nível 1"),
    entry(Side::Oeste, "403", 'E', "Oeste Inferior Lateral - Nível 1"),
    entry(Side::Oeste, "404", 'C', "Oeste Inferior Lateral Premium - Nível 1"),
    entry(Side::Oeste, "405", 'A', "Oeste Inferior Central Premium - Nível 1"),
    entry(Side::Oeste, "406", 'C', "Oeste Inferior Lateral Premium - Nível 1"),
    entry(Side::Oeste, "407", 'E', "Oeste Inferior Lateral - Nível 1"),
    entry(Side::Oeste, "408", 'E', "Oeste Inferior Lateral - Nível 1"),
    entry(Side::Oeste, "409", 'G', "Oeste Inferior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "901", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "902", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "903", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "904", 'I', "Oeste Superior Lateral - Nível 1"),
    entry(Side::Oeste, "908", 'I', "Oeste Superior Lateral - Nível 1"),
    entry(Side::Oeste, "908", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "909", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, "910", 'L', "Oeste Superior Lateral Corner - Nível 1"),
    entry(Side::Oeste, ".401.", 'H', "Oeste Inferior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".402.", 'F', "Oeste Inferior Lateral - Nível 2"),
    entry(Side::Oeste, ".403.", 'F', "Oeste Inferior Lateral - Nível 2"),
    entry(Side::Oeste, ".404.", 'D', "Oeste Inferior Lateral Premium - Nível 2"),
    entry(Side::Oeste, ".405.", 'B', "Oeste Inferior Central Premium - Nível 2"),
    entry(Side::Oeste, ".406.", 'D', "Oeste Inferior Lateral Premium - Nível 2"),
    entry(Side::Oeste, ".407.", 'F', "Oeste Inferior Lateral - Nível 2"),
    entry(Side::Oeste, ".408.", 'F', "Oeste Inferior Lateral - Nível 2"),
    entry(Side::Oeste, ".409.", 'H', "Oeste Inferior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".901.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".902.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".903.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".904.", 'K', "Oeste Superior Lateral - Nível 2"),
    entry(Side::Oeste, ".905.", 'K', "Oeste Superior Lateral - Nível 2"),
    entry(Side::Oeste, ".906.", 'K', "Oeste Superior Lateral - Nível 2"),
    entry(Side::Oeste, ".907.", 'K', "Oeste Superior Lateral - Nível 2"),
    entry(Side::Oeste, ".908.", 'K', "Oeste Superior Lateral - Nível 2"),
    entry(Side::Oeste, ".908.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".909.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
    entry(Side::Oeste, ".910.", 'N', "Oeste Superior Lateral Corner - Nível 2"),
];

/// Ordered sections for a side
pub fn sections_for_side(side: Side) -> &'static [SectorEntry] {
    match side {
        Side::Norte => NORTE,
        Side::Leste => LESTE,
        Side::Sul => SUL,
        Side::Oeste => OESTE,
    }
}

pub fn find_section(side: Side, section: &str) -> Option<&'static SectorEntry> {
    sections_for_side(side)
        .iter()
        .find(|entry| entry.section == section)
}

pub fn contains(side: Side, section: &str) -> bool {
    find_section(side, section).is_some()
}

use crate::catalog::sectors;
use crate::core::error::SeatCodeError;
use crate::models::seat::{SeatCode, Side, SEPARATOR};

const MAX_ROW_LEN: usize = 4;
const MAX_ROW_DIGITS: usize = 3;

/// Parse a stored `SIDE-SECTION-ROW` seat code.
///
/// The section must exist in the catalog under the side. The row is kept as
/// stored; row format is enforced on the write path (`SeatCode::new`).
pub fn parse(raw: &str) -> Result<SeatCode, SeatCodeError> {
    let parts: Vec<&str> = raw.split(SEPARATOR).map(str::trim).collect();

    if parts.len() > 3 {
        return Err(SeatCodeError::TooManyParts { found: parts.len() });
    }

    let present = parts.iter().filter(|p| !p.is_empty()).count();
    if parts.len() < 3 || present < 3 {
        return Err(SeatCodeError::MissingParts { found: present });
    }

    let side: Side = parts[0].parse()?;
    let section = parts[1];

    if !sectors::contains(side, section) {
        return Err(SeatCodeError::UnknownSection {
            side,
            section: section.to_string(),
        });
    }

    Ok(SeatCode {
        side,
        section: section.to_string(),
        row: parts[2].to_string(),
    })
}

/// Check a row while it is being typed.
///
/// Accepts the empty string, otherwise zero-or-one letter followed by
/// zero-to-three digits, at most four characters.
pub fn validate_row(candidate: &str) -> bool {
    if candidate.len() > MAX_ROW_LEN {
        return false;
    }

    let bytes = candidate.as_bytes();
    let digits = match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => &bytes[1..],
        _ => bytes,
    };

    digits.len() <= MAX_ROW_DIGITS && digits.iter().all(u8::is_ascii_digit)
}

/// Normalize a row for storage: trimmed, non-empty, valid, uppercased
pub fn normalize_row(candidate: &str) -> Result<String, SeatCodeError> {
    let trimmed = candidate.trim();

    if trimmed.is_empty() {
        return Err(SeatCodeError::EmptyRow);
    }

    if !validate_row(trimmed) {
        return Err(SeatCodeError::InvalidRow(trimmed.to_string()));
    }

    Ok(trimmed.to_ascii_uppercase())
}

/// Join the parts into the persisted form. Letters in the row are uppercased.
pub fn compose(side: Side, section: &str, row: &str) -> String {
    format!(
        "{}{}{}{}{}",
        side,
        SEPARATOR,
        section.trim(),
        SEPARATOR,
        row.trim().to_ascii_uppercase()
    )
}

/// Human-readable rendering of a seat code
pub fn format(code: &SeatCode) -> String {
    format!("{} - {} - {}", code.side, code.section, code.row)
}

/// Lossy display of any stored seat string, valid or not.
/// Omits the row segment when it is absent.
pub fn format_label(raw: &str) -> String {
    if !raw.contains(SEPARATOR) {
        return format!("Setor {}", raw.trim());
    }

    let parts: Vec<&str> = raw.split(SEPARATOR).map(str::trim).collect();
    match parts.get(2).filter(|row| !row.is_empty()) {
        Some(row) => format!("{} - {} - {}", parts[0], parts[1], row),
        None => format!("{} - {}", parts[0], parts[1]),
    }
}

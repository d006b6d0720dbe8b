//! Occupancy views over a roster snapshot.
//!
//! Everything here is a pure function of the supplied roster. Only people
//! whose seat code is well-formed are counted or grouped; the rest show up
//! in [`SideGrouping::unassigned`] or [`SideGrouping::malformed`].

use crate::models::person::{Person, Placement};
use crate::models::seat::{SeatCode, SectionKey, Side};
use std::collections::{BTreeMap, HashMap};

/// People sharing a grouping key, in roster order
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGroup<'a, K> {
    pub key: K,
    pub people: Vec<&'a Person>,
}

impl<K> OccupancyGroup<'_, K> {
    pub fn count(&self) -> usize {
        self.people.len()
    }
}

#[derive(Debug, Default)]
pub struct SideGrouping<'a> {
    pub sides: BTreeMap<Side, Vec<&'a Person>>,
    /// People who have not picked a seat yet
    pub unassigned: Vec<&'a Person>,
    /// People whose stored seat code no longer parses
    pub malformed: Vec<&'a Person>,
}

impl<'a> SideGrouping<'a> {
    pub fn people(&self, side: Side) -> &[&'a Person] {
        self.sides.get(&side).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn seated(roster: &[Person]) -> impl Iterator<Item = (&Person, SeatCode)> {
    roster
        .iter()
        .filter_map(|person| person.seat_code().map(|code| (person, code)))
}

pub fn count_by_side(roster: &[Person], side: Side) -> usize {
    seated(roster).filter(|(_, code)| code.side == side).count()
}

/// Sections are compared whole, so `427` never matches `42`
pub fn count_by_section(roster: &[Person], side: Side, section: &str) -> usize {
    seated(roster)
        .filter(|(_, code)| code.side == side && code.section == section)
        .count()
}

pub fn group_by_side(roster: &[Person]) -> SideGrouping<'_> {
    let mut grouping = SideGrouping::default();

    for person in roster {
        match person.placement() {
            Placement::Seated(code) => grouping.sides.entry(code.side).or_default().push(person),
            Placement::Unassigned => grouping.unassigned.push(person),
            Placement::Malformed(_) => grouping.malformed.push(person),
        }
    }

    grouping
}

/// Group by `side-section` keeping first-encounter order of the keys
fn group_sections<'a>(
    people: impl Iterator<Item = (&'a Person, SeatCode)>,
) -> Vec<OccupancyGroup<'a, SectionKey>> {
    let mut groups: Vec<OccupancyGroup<'a, SectionKey>> = Vec::new();
    let mut index: HashMap<SectionKey, usize> = HashMap::new();

    for (person, code) in people {
        let key = code.section_key();
        match index.get(&key) {
            Some(&i) => groups[i].people.push(person),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(OccupancyGroup {
                    key,
                    people: vec![person],
                });
            }
        }
    }

    groups
}

/// Second-level view of one side, keyed by `side-section`
pub fn group_by_section(roster: &[Person], side: Side) -> Vec<OccupancyGroup<'_, SectionKey>> {
    group_sections(seated(roster).filter(|(_, code)| code.side == side))
}

/// The `n` most populated sections across the whole roster.
/// Ties keep the order in which sections were first encountered.
pub fn top_groups(roster: &[Person], n: usize) -> Vec<(SectionKey, usize)> {
    let mut counts: Vec<(SectionKey, usize)> = group_sections(seated(roster))
        .into_iter()
        .map(|group| {
            let count = group.count();
            (group.key, count)
        })
        .collect();

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Everyone seated at `code`, same row included. Rows compare case-insensitively
/// like sides do.
pub fn seatmates<'a>(roster: &'a [Person], code: &SeatCode) -> Vec<&'a Person> {
    seated(roster)
        .filter(|(_, other)| {
            other.side == code.side
                && other.section == code.section
                && other.row.eq_ignore_ascii_case(&code.row)
        })
        .map(|(person, _)| person)
        .collect()
}

use crate::models::person::Person;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

struct Slot {
    /// Position in storage order, used to rebuild ordered snapshots
    position: u64,
    person: Arc<Person>,
}

/// One complete roster. A refresh builds a new generation and swaps it in whole.
#[derive(Default)]
struct Generation {
    people: DashMap<String, Slot>,
    next_position: AtomicU64,
}

impl Generation {
    fn upsert(&self, person: Arc<Person>) {
        self.people
            .entry(person.id.clone())
            .and_modify(|slot| slot.person = Arc::clone(&person))
            .or_insert_with(|| Slot {
                position: self.next_position.fetch_add(1, Ordering::Relaxed),
                person: Arc::clone(&person),
            });
    }
}

/// In-memory copy of the roster, keyed by person id
pub struct RosterStore {
    current: RwLock<Arc<Generation>>,
    /// Unix timestamp of the last full replace, 0 before the first one
    last_refresh: AtomicU64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Generation::default())),
            last_refresh: AtomicU64::new(0),
        }
    }

    fn generation(&self) -> Arc<Generation> {
        self.current.read().clone()
    }

    /// Swap in a freshly fetched roster. Order of `people` becomes snapshot order.
    ///
    /// Readers see either the old roster or the new one, never a mix. A stored
    /// person with a later `updated_at` than the fetched row wins, so a seat
    /// written while the fetch was in flight survives the swap.
    pub fn replace_all(&self, people: Vec<Person>, refreshed_at: u64) {
        let next = Generation::default();
        for person in people {
            next.upsert(Arc::new(person));
        }

        let mut current = self.current.write();
        for entry in current.people.iter() {
            if let Some(mut slot) = next.people.get_mut(entry.key()) {
                if entry.person.updated_at > slot.person.updated_at {
                    slot.person = Arc::clone(&entry.person);
                }
            }
        }
        *current = Arc::new(next);
        drop(current);

        self.last_refresh.store(refreshed_at, Ordering::Relaxed);
    }

    /// Insert or replace a person. A replaced person keeps their position.
    pub fn upsert(&self, person: Person) {
        // The read guard keeps a concurrent swap from dropping this write
        let current = self.current.read();
        current.upsert(Arc::new(person));
    }

    pub fn get(&self, id: &str) -> Option<Arc<Person>> {
        self.generation()
            .people
            .get(id)
            .map(|slot| Arc::clone(&slot.person))
    }

    /// Ordered copy of the roster for the occupancy functions
    pub fn snapshot(&self) -> Vec<Person> {
        let generation = self.generation();
        let mut slots: Vec<(u64, Arc<Person>)> = generation
            .people
            .iter()
            .map(|entry| (entry.position, Arc::clone(&entry.person)))
            .collect();

        slots.sort_by_key(|(position, _)| *position);

        slots
            .into_iter()
            .map(|(_, person)| Person::clone(&person))
            .collect()
    }

    pub fn last_refresh(&self) -> u64 {
        self.last_refresh.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.generation().people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generation().people.is_empty()
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod catalog {
    pub mod sectors;
}

pub mod models {
    pub mod api;
    pub mod person;
    pub mod seat;
}

pub mod seating {
    pub mod code;
    pub mod occupancy;
}

pub mod source {
    pub mod roster;
    pub mod sheets;
}

pub mod stores {
    pub mod roster_store;
}

pub mod handlers {
    pub mod admin;
    pub mod catalog;
    pub mod fallback;
    pub mod health;
    pub mod occupancy;
    pub mod people;
    pub mod seats;
}

pub mod utils {
    pub mod auth;
    pub mod time;
}

#[cfg(test)]
pub mod testing;

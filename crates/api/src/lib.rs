//! Borrow Markets HTTP API.
//!
//! Serves the markets table view model built by `markets-engine` from the
//! values published by `markets-feed`.

pub mod routes;
pub mod state;

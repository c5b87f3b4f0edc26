//! Shared application state for the Axum API server.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use markets_engine::page::BorrowMarketsPage;
use markets_feed::poller::CollateralTypes;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    /// Latest value published by the collateral feed
    pub feed: watch::Receiver<CollateralTypes>,
    /// Page view model: stale-value slot plus row toggles
    pub page: Arc<Mutex<BorrowMarketsPage>>,
}

impl AppState {
    pub fn new(feed: watch::Receiver<CollateralTypes>) -> Self {
        Self {
            feed,
            page: Arc::new(Mutex::new(BorrowMarketsPage::new())),
        }
    }

    /// The feed's current value, cloned out of the channel.
    ///
    /// Read it only while holding `page`, so a render never observes a value
    /// older than one another request already rendered.
    pub fn current_records(&self) -> CollateralTypes {
        self.feed.borrow().clone()
    }
}

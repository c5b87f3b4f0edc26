//! Collateral feed — the observable the Borrow Markets page watches.
//!
//! Polls a JSON array of collateral-type records and publishes it over a
//! `tokio::sync::watch` channel. The channel holds `None` while no value is
//! available: before the first successful read, and again whenever a read
//! fails (revalidating). Consumers keep their last value in that window.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::watch;

use markets_common::error::AppError;
use markets_common::types::CollateralTypeRecord;

/// Value carried by the feed channel; `None` means "no value right now".
pub type CollateralTypes = Option<Vec<CollateralTypeRecord>>;

/// File-backed collateral-type source.
pub struct CollateralFeed {
    path: PathBuf,
    poll_interval: Duration,
    /// Collateral type identifiers to publish, in display order.
    /// When empty, every record in the file is published in file order.
    cdp_types: Vec<String>,
    sender: watch::Sender<CollateralTypes>,
}

impl CollateralFeed {
    pub fn new(path: impl Into<PathBuf>, poll_interval_ms: u64) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            path: path.into(),
            poll_interval: Duration::from_millis(poll_interval_ms),
            cdp_types: Vec::new(),
            sender,
        }
    }

    /// Restrict the feed to these collateral types, published in this order.
    pub fn with_cdp_types(mut self, cdp_types: Vec<String>) -> Self {
        if !cdp_types.is_empty() {
            tracing::info!(
                count = cdp_types.len(),
                "Collateral type filter enabled — only publishing configured types"
            );
        }
        self.cdp_types = cdp_types;
        self
    }

    /// A receiver observing the feed's current value.
    pub fn subscribe(&self) -> watch::Receiver<CollateralTypes> {
        self.sender.subscribe()
    }

    /// Start the polling loop. Runs indefinitely until the task is cancelled.
    pub async fn run(&self) {
        tracing::info!(
            path = %self.path.display(),
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Collateral feed started"
        );

        loop {
            self.refresh().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Read the source once and publish the outcome. Returns whether the read succeeded.
    pub async fn refresh(&self) -> bool {
        let next = match self.load().await {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Collateral types unavailable, publishing no value"
                );
                None
            }
        };
        let loaded = next.is_some();

        let changed = self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        if changed && loaded {
            tracing::info!("Published updated collateral types");
        }

        loaded
    }

    /// Read and filter the records from disk.
    pub async fn load(&self) -> Result<Vec<CollateralTypeRecord>, AppError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let records: Vec<CollateralTypeRecord> = serde_json::from_slice(&bytes)?;
        Ok(self.select(records))
    }

    /// Apply the configured collateral type list to `records`.
    fn select(&self, records: Vec<CollateralTypeRecord>) -> Vec<CollateralTypeRecord> {
        if self.cdp_types.is_empty() {
            return records;
        }

        self.cdp_types
            .iter()
            .filter_map(|symbol| {
                let found = records.iter().find(|r| &r.symbol == symbol).cloned();
                if found.is_none() {
                    tracing::debug!(symbol = %symbol, "Configured collateral type not in feed");
                }
                found
            })
            .collect()
    }
}

//! Catalog snapshots pushed into the grid.
//!
//! Application discovery runs off the UI thread. Every time the set of
//! installed applications changes, the discovery side builds a complete
//! category list and publishes it; the engine picks up the newest snapshot
//! between input turns with [`GridEngine::sync_catalog`].
//!
//! ```
//! use leanback_grid::catalog::{self, categorize};
//! use leanback_grid::Item;
//!
//! let (publisher, feed) = catalog::channel();
//! publisher
//!     .publish(categorize([
//!         Item::new("org.example.player", "Player"),
//!         Item::new("org.example.racer", "Racer").with_game(true),
//!     ]))
//!     .unwrap();
//!
//! let latest = feed.latest().unwrap();
//! assert_eq!(latest[0].label(), "Apps");
//! assert_eq!(latest[1].label(), "Games");
//! ```
//!
//! [`GridEngine::sync_catalog`]: crate::GridEngine::sync_catalog

use crossbeam_channel::{Receiver, SendError, Sender};

use leanback_grid_core::logging::targets;

use crate::model::{Category, Item};

/// Heading of the non-game category.
pub const APPS_LABEL: &str = "Apps";
/// Heading of the game category.
pub const GAMES_LABEL: &str = "Games";

/// Create a connected publisher and feed.
pub fn channel() -> (CatalogPublisher, CatalogFeed) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    (CatalogPublisher { sender }, CatalogFeed { receiver })
}

/// Sending half of a catalog channel. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CatalogPublisher {
    sender: Sender<Vec<Category>>,
}

impl CatalogPublisher {
    /// Publish a complete category list.
    ///
    /// Fails only when the feed has been dropped; the snapshot is handed
    /// back in the error.
    pub fn publish(&self, categories: Vec<Category>) -> Result<(), SendError<Vec<Category>>> {
        tracing::debug!(
            target: targets::CATALOG,
            categories = categories.len(),
            "publishing catalog snapshot"
        );
        self.sender.send(categories)
    }

    /// Categorize discovered entries and publish the result.
    pub fn publish_entries(
        &self,
        entries: impl IntoIterator<Item = Item>,
    ) -> Result<(), SendError<Vec<Category>>> {
        self.publish(categorize(entries))
    }
}

/// Receiving half of a catalog channel, owned by the UI side.
#[derive(Debug)]
pub struct CatalogFeed {
    receiver: Receiver<Vec<Category>>,
}

impl CatalogFeed {
    /// Drain every pending snapshot and return the newest one.
    ///
    /// Older snapshots are superseded and dropped.
    pub fn latest(&self) -> Option<Vec<Category>> {
        let mut skipped = 0usize;
        let mut latest = None;
        for snapshot in self.receiver.try_iter() {
            if latest.replace(snapshot).is_some() {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::trace!(target: targets::CATALOG, skipped, "superseded catalog snapshots");
        }
        latest
    }

    /// Number of snapshots waiting.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

/// Split discovered entries into an "Apps" and a "Games" category.
///
/// Entry order is kept inside each category. A category that would be
/// empty is left out, so a device without games shows a single category.
pub fn categorize(entries: impl IntoIterator<Item = Item>) -> Vec<Category> {
    let (games, apps): (Vec<Item>, Vec<Item>) =
        entries.into_iter().partition(|item| item.is_game());

    let mut categories = Vec::with_capacity(2);
    if !apps.is_empty() {
        categories.push(Category::new(APPS_LABEL, apps));
    }
    if !games.is_empty() {
        categories.push(Category::new(GAMES_LABEL, games));
    }
    categories
}

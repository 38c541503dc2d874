use crate::catalog::{CatalogFilter, CatalogRecord, catalog_view::filter_records};
use tokio::sync::watch;

/// Holds the authoritative collection and the active filter as two independent observable cells.
/// Every write is published to the subscribers, the filtered view is recomputed on every read.
pub struct CatalogStore<R: CatalogRecord> {
    records: watch::Sender<Vec<R>>,
    filter: watch::Sender<CatalogFilter<R>>,
}

impl<R: CatalogRecord> CatalogStore<R> {
    pub fn new() -> Self {
        Self {
            records: watch::Sender::new(vec![]),
            filter: watch::Sender::new(CatalogFilter::default()),
        }
    }

    /// Returns a snapshot of the whole collection.
    pub fn records(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    /// Finds the first record that matches the predicate.
    pub fn find<P: Fn(&R) -> bool>(&self, predicate: P) -> Option<R> {
        self.records
            .borrow()
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Replaces the whole collection.
    pub fn replace_records(&self, records: Vec<R>) {
        self.records.send_replace(records);
    }

    /// Modifies the collection in place. The closure returns `None` when it left the collection
    /// untouched, subscribers are only notified otherwise.
    pub fn modify_records<T, M>(&self, modify: M) -> Option<T>
    where
        M: FnOnce(&mut Vec<R>) -> Option<T>,
    {
        let mut outcome = None;
        self.records.send_if_modified(|records| {
            outcome = modify(records);
            outcome.is_some()
        });
        outcome
    }

    /// Fallible version of [`Self::modify_records`]. A failing closure must leave the collection
    /// untouched, subscribers aren't notified then.
    pub fn try_modify_records<T, M>(&self, modify: M) -> anyhow::Result<Option<T>>
    where
        M: FnOnce(&mut Vec<R>) -> anyhow::Result<Option<T>>,
    {
        let mut outcome = Ok(None);
        self.records.send_if_modified(|records| {
            outcome = modify(records);
            matches!(outcome, Ok(Some(_)))
        });
        outcome
    }

    pub fn filter(&self) -> CatalogFilter<R> {
        self.filter.borrow().clone()
    }

    /// Replaces the filter wholesale.
    pub fn set_filter(&self, filter: CatalogFilter<R>) {
        self.filter.send_replace(filter);
    }

    /// Changes individual fields of the active filter.
    pub fn update_filter<M: FnOnce(&mut CatalogFilter<R>)>(&self, update: M) {
        self.filter.send_modify(update);
    }

    /// Returns the collection projected through the active filter.
    pub fn view(&self) -> Vec<R> {
        let filter = self.filter.borrow();
        let records = self.records.borrow();
        filter_records(records.as_slice(), &*filter)
    }

    pub fn subscribe_records(&self) -> watch::Receiver<Vec<R>> {
        self.records.subscribe()
    }

    pub fn subscribe_filter(&self) -> watch::Receiver<CatalogFilter<R>> {
        self.filter.subscribe()
    }
}

impl<R: CatalogRecord> Default for CatalogStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory review store.
//!
//! The store is append-only: reviews are seeded once from the dataset and then
//! added through [`ReviewStore::append`]. Reads go through
//! [`ReviewStore::snapshot`], which clones the collection under a read lock so
//! no caller ever iterates while a writer is mid-append.

use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDateTime, Timelike};
use uuid::Uuid;

use crate::locations::is_allowed_location;
use crate::model::{Review, ReviewDraft};

#[derive(Debug, Default)]
struct Inner {
    reviews: Vec<Review>,
    ids: HashSet<String>,
}

/// Shared, ordered collection of reviews.
#[derive(Debug, Default)]
pub struct ReviewStore {
    inner: RwLock<Inner>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from pre-existing records, keeping their order.
    ///
    /// Records with an empty body, a location outside the allow-list, or an
    /// id already seen are skipped with a warning.
    pub fn from_reviews(reviews: impl IntoIterator<Item = Review>) -> Self {
        let mut inner = Inner::default();
        for review in reviews {
            if review.body.is_empty() {
                tracing::warn!(review_id = %review.id, "skipping review with empty body");
                continue;
            }
            if !is_allowed_location(&review.location) {
                tracing::warn!(
                    review_id = %review.id,
                    location = %review.location,
                    "skipping review with location outside the allow-list"
                );
                continue;
            }
            if !inner.ids.insert(review.id.clone()) {
                tracing::warn!(review_id = %review.id, "skipping review with duplicate id");
                continue;
            }
            inner.reviews.push(review);
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Mint a review from validated fields, store it and return it.
    pub fn append(&self, draft: ReviewDraft) -> Review {
        self.append_at(draft, now_truncated())
    }

    fn append_at(&self, draft: ReviewDraft, timestamp: NaiveDateTime) -> Review {
        let mut inner = self.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !inner.ids.contains(&candidate) {
                break candidate;
            }
        };
        let review = Review {
            id: id.clone(),
            body: draft.body,
            location: draft.location,
            timestamp,
        };
        inner.ids.insert(id);
        inner.reviews.push(review.clone());
        tracing::debug!(review_id = %review.id, total = inner.reviews.len(), "review appended");
        review
    }

    /// Read-consistent copy of every review in insertion order.
    pub fn snapshot(&self) -> Vec<Review> {
        self.read().reviews.clone()
    }

    pub fn len(&self) -> usize {
        self.read().reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The collection is append-only, so a writer that panicked cannot leave
    // a partially applied update behind; recover from poisoning.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn now_truncated() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

// src/domain/timestamps.rs
//! Created/updated bookkeeping shared by every persisted entity.
//!
//! An entity opts in by embedding [`Timestamps`] and implementing
//! [`DateFields`]. Saves go through [`save_with_timestamps`], which keeps
//! `updated_date` in step with the fields actually written.

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    created_date: DateTime<Utc>,
    updated_date: DateTime<Utc>,
}

impl Timestamps {
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_date: now,
            updated_date: now,
        }
    }

    /// Rebuild from stored values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Persistence`] when the stored `updated_date`
    /// precedes `created_date`.
    pub fn restore(created_date: DateTime<Utc>, updated_date: DateTime<Utc>) -> DomainResult<Self> {
        if updated_date < created_date {
            return Err(DomainError::Persistence(format!(
                "stored updated_date {updated_date} precedes created_date {created_date}"
            )));
        }
        Ok(Self {
            created_date,
            updated_date,
        })
    }

    #[must_use]
    pub const fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    #[must_use]
    pub const fn updated_date(&self) -> DateTime<Utc> {
        self.updated_date
    }

    /// Refresh `updated_date`. It only ever moves forward.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_date = now.max(self.updated_date);
    }
}

/// Field enum of an entity that carries [`Timestamps`].
pub trait TimestampedField: Copy + Ord + std::fmt::Debug + Send + Sync + 'static {
    const UPDATED_DATE: Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions<F: TimestampedField> {
    update_fields: Option<BTreeSet<F>>,
}

impl<F: TimestampedField> Default for SaveOptions<F> {
    fn default() -> Self {
        Self::full()
    }
}

impl<F: TimestampedField> SaveOptions<F> {
    /// Persist every field.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            update_fields: None,
        }
    }

    /// Persist only the named fields.
    #[must_use]
    pub fn only(fields: impl IntoIterator<Item = F>) -> Self {
        Self {
            update_fields: Some(fields.into_iter().collect()),
        }
    }

    #[must_use]
    pub const fn update_fields(&self) -> Option<&BTreeSet<F>> {
        self.update_fields.as_ref()
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.update_fields.is_none()
    }

    /// True when nothing will be written.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.update_fields.as_ref().is_some_and(BTreeSet::is_empty)
    }

    #[must_use]
    pub fn writes(&self, field: F) -> bool {
        self.update_fields
            .as_ref()
            .is_none_or(|fields| fields.contains(&field))
    }

    /// Union `UPDATED_DATE` into a non-empty explicit subset.
    #[must_use]
    pub fn with_updated_date(mut self) -> Self {
        if let Some(fields) = self.update_fields.as_mut()
            && !fields.is_empty()
        {
            fields.insert(F::UPDATED_DATE);
        }
        self
    }
}

/// Implemented by concrete entities that carry created/updated dates and
/// take part in the default `-order, -created_date` ordering.
///
/// The `order` value has no default: each entity declares its own.
pub trait DateFields {
    type Field: TimestampedField;
    type Order: Ord;

    fn timestamps(&self) -> &Timestamps;
    fn timestamps_mut(&mut self) -> &mut Timestamps;
    fn order(&self) -> &Self::Order;
}

/// Descending `order`, then descending `created_date`.
#[must_use]
pub fn default_ordering<M: DateFields>(a: &M, b: &M) -> Ordering {
    b.order()
        .cmp(a.order())
        .then_with(|| {
            b.timestamps()
                .created_date()
                .cmp(&a.timestamps().created_date())
        })
}

/// Prepare `model` for a save and hand it to `delegate`.
///
/// An explicit field subset always gains `updated_date`, and the timestamp
/// is refreshed whenever it will be written. Errors come from `delegate`
/// untouched.
///
/// # Errors
///
/// Whatever `delegate` returns.
pub async fn save_with_timestamps<M, T, E, D, Fut>(
    mut model: M,
    options: SaveOptions<M::Field>,
    now: DateTime<Utc>,
    delegate: D,
) -> Result<T, E>
where
    M: DateFields,
    D: FnOnce(M, SaveOptions<M::Field>) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let options = options.with_updated_date();
    if !options.is_noop() && options.writes(M::Field::UPDATED_DATE) {
        model.timestamps_mut().touch(now);
    }
    delegate(model, options).await
}

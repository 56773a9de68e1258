//! Ledger service orchestrating validation, stamping, and persistence.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use financas_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;

use super::balance::net_balance;
use super::entry::{Entry, EntryCategory, EntryDraft, NewEntry};
use super::error::LedgerError;
use super::filter::EntryFilter;
use super::status::EntryStatus;
use super::validation::validate;

/// Persistence contract the ledger requires from the storage layer.
///
/// Implemented by the db crate. The store owns identifier assignment and
/// the atomicity of each operation; the service holds no locks.
pub trait EntryStore: Send + Sync {
    /// Persist a new entry and return it with its assigned identifier.
    fn insert(
        &self,
        entry: NewEntry,
    ) -> impl std::future::Future<Output = Result<Entry, LedgerError>> + Send;

    /// Persist changes to an existing entry.
    fn update(
        &self,
        entry: Entry,
    ) -> impl std::future::Future<Output = Result<Entry, LedgerError>> + Send;

    /// Find an entry by identifier.
    fn find_by_id(
        &self,
        id: EntryId,
    ) -> impl std::future::Future<Output = Result<Option<Entry>, LedgerError>> + Send;

    /// Remove an entry.
    fn delete(
        &self,
        id: EntryId,
    ) -> impl std::future::Future<Output = Result<(), LedgerError>> + Send;

    /// Entries matching the filter, in storage-defined order.
    fn find_matching(
        &self,
        filter: &EntryFilter,
    ) -> impl std::future::Future<Output = Result<Vec<Entry>, LedgerError>> + Send;

    /// Sum of amounts over one category of a user's entries, every status
    /// included. `None` when the user has no entries in that category.
    fn sum_by_category(
        &self,
        user_id: UserId,
        category: EntryCategory,
    ) -> impl std::future::Future<Output = Result<Option<Decimal>, LedgerError>> + Send;
}

/// Ledger service.
///
/// Stateless between calls: each operation is an independent unit of work
/// against the store.
pub struct LedgerService<S> {
    store: Arc<S>,
}

impl<S: EntryStore> LedgerService<S> {
    /// Creates a new ledger service backed by the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a new entry.
    ///
    /// The draft is validated, the status is forced to [`EntryStatus::Pending`]
    /// regardless of what the caller supplied, and the registration date is
    /// stamped before persisting.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the draft is rejected, or a storage
    /// error from the insert.
    pub async fn create(&self, draft: EntryDraft) -> Result<Entry, LedgerError> {
        let fields = validate(&draft)?;
        self.store
            .insert(NewEntry {
                description: fields.description,
                month: fields.month,
                year: fields.year,
                amount: fields.amount,
                category: fields.category,
                status: EntryStatus::Pending,
                user_id: fields.user_id,
                registered_at: today(),
            })
            .await
    }

    /// Updates an existing entry.
    ///
    /// The draft must carry an identifier; the remaining fields are
    /// re-validated and the registration date is re-stamped.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotPersisted`] if the draft has no identifier
    /// (the store is not invoked), a validation error if the draft is
    /// rejected, or a storage error from the update.
    pub async fn update(&self, draft: EntryDraft) -> Result<Entry, LedgerError> {
        let id = draft.id.ok_or(LedgerError::NotPersisted)?;
        let status = draft.status.unwrap_or(EntryStatus::Pending);
        let fields = validate(&draft)?;
        self.store
            .update(Entry {
                id,
                description: fields.description,
                month: fields.month,
                year: fields.year,
                amount: fields.amount,
                category: fields.category,
                status,
                user_id: fields.user_id,
                registered_at: today(),
            })
            .await
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotPersisted`] if the draft has no identifier
    /// (the store is not invoked), or a storage error from the delete.
    pub async fn delete(&self, draft: &EntryDraft) -> Result<(), LedgerError> {
        let id = draft.id.ok_or(LedgerError::NotPersisted)?;
        self.store.delete(id).await
    }

    /// Entries matching the filter, in storage-defined order.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn search(&self, filter: &EntryFilter) -> Result<Vec<Entry>, LedgerError> {
        self.store.find_matching(filter).await
    }

    /// Overwrites the entry's status and runs the full update path.
    ///
    /// There is no transition graph: any status may replace any other. The
    /// entry is re-validated and its registration date re-stamped exactly
    /// as in [`Self::update`].
    ///
    /// # Errors
    ///
    /// Fails with whatever [`Self::update`] fails with.
    pub async fn change_status(
        &self,
        entry: Entry,
        status: EntryStatus,
    ) -> Result<Entry, LedgerError> {
        let mut draft = EntryDraft::from(entry);
        draft.status = Some(status);
        self.update(draft).await
    }

    /// Loads an entry by identifier.
    ///
    /// `Ok(None)` is the not-found outcome, distinct from a storage error.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lookup fails.
    pub async fn load_by_id(&self, id: EntryId) -> Result<Option<Entry>, LedgerError> {
        self.store.find_by_id(id).await
    }

    /// Computes the user's balance: income minus expense over all entries.
    ///
    /// Recomputed from storage on every call; status is ignored, so pending
    /// entries count exactly like settled ones. A user with no entries has
    /// a balance of zero.
    ///
    /// # Errors
    ///
    /// Returns a storage error if either aggregate fails.
    pub async fn balance_for_user(&self, user_id: UserId) -> Result<Decimal, LedgerError> {
        let income = self
            .store
            .sum_by_category(user_id, EntryCategory::Income)
            .await?;
        let expense = self
            .store
            .sum_by_category(user_id, EntryCategory::Expense)
            .await?;
        Ok(net_balance(income, expense))
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

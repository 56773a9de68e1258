//! Entry repository for database operations.

use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use financas_core::ledger::{
    Entry, EntryCategory, EntryFilter, EntryStatus, EntryStore, LedgerError, NewEntry,
};
use financas_shared::types::{EntryId, UserId};

use crate::entities::entries;

/// Entry repository implementing the core's [`EntryStore`] contract.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: DatabaseConnection,
}

impl EntryRepository {
    /// Creates a new entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl EntryStore for EntryRepository {
    async fn insert(&self, entry: NewEntry) -> Result<Entry, LedgerError> {
        let model = entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            description: Set(entry.description),
            month: Set(entry.month),
            year: Set(entry.year),
            amount: Set(entry.amount),
            category: Set(category_to_db(entry.category)),
            status: Set(status_to_db(entry.status)),
            user_id: Set(entry.user_id.into_inner()),
            registered_at: Set(entry.registered_at),
        };

        let model = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_entry(model))
    }

    async fn update(&self, entry: Entry) -> Result<Entry, LedgerError> {
        let model = entries::ActiveModel {
            id: Set(entry.id.into_inner()),
            description: Set(entry.description),
            month: Set(entry.month),
            year: Set(entry.year),
            amount: Set(entry.amount),
            category: Set(category_to_db(entry.category)),
            status: Set(status_to_db(entry.status)),
            user_id: Set(entry.user_id.into_inner()),
            registered_at: Set(entry.registered_at),
        };

        let model = model.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_entry(model))
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, LedgerError> {
        let model = entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_entry))
    }

    async fn delete(&self, id: EntryId) -> Result<(), LedgerError> {
        entries::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_matching(&self, filter: &EntryFilter) -> Result<Vec<Entry>, LedgerError> {
        let mut query = entries::Entity::find();

        if let Some(description) = &filter.description {
            // Case-insensitive containment, same semantics as the
            // in-process `EntryFilter::matches`.
            let pattern = format!("%{}%", description.to_lowercase());
            query = query.filter(
                Expr::expr(Func::lower(Expr::col((
                    entries::Entity,
                    entries::Column::Description,
                ))))
                .like(pattern),
            );
        }

        if let Some(month) = filter.month {
            query = query.filter(entries::Column::Month.eq(month));
        }

        if let Some(year) = filter.year {
            query = query.filter(entries::Column::Year.eq(year));
        }

        if let Some(user_id) = filter.user_id {
            query = query.filter(entries::Column::UserId.eq(user_id.into_inner()));
        }

        let models = query
            .order_by_desc(entries::Column::RegisteredAt)
            .order_by_asc(entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_entry).collect())
    }

    async fn sum_by_category(
        &self,
        user_id: UserId,
        category: EntryCategory,
    ) -> Result<Option<Decimal>, LedgerError> {
        let total: Option<Option<Decimal>> = entries::Entity::find()
            .select_only()
            .column_as(entries::Column::Amount.sum(), "total")
            .filter(entries::Column::UserId.eq(user_id.into_inner()))
            .filter(entries::Column::Category.eq(category_to_db(category)))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(total.flatten())
    }
}

fn db_err(err: DbErr) -> LedgerError {
    LedgerError::Database(err.to_string())
}

fn model_to_entry(model: entries::Model) -> Entry {
    Entry {
        id: EntryId::from_uuid(model.id),
        description: model.description,
        month: model.month,
        year: model.year,
        amount: model.amount,
        category: category_from_db(model.category),
        status: status_from_db(model.status),
        user_id: UserId::from_uuid(model.user_id),
        registered_at: model.registered_at,
    }
}

const fn category_to_db(category: EntryCategory) -> entries::Category {
    match category {
        EntryCategory::Income => entries::Category::Income,
        EntryCategory::Expense => entries::Category::Expense,
    }
}

const fn category_from_db(category: entries::Category) -> EntryCategory {
    match category {
        entries::Category::Income => EntryCategory::Income,
        entries::Category::Expense => EntryCategory::Expense,
    }
}

const fn status_to_db(status: EntryStatus) -> entries::Status {
    match status {
        EntryStatus::Pending => entries::Status::Pending,
        EntryStatus::Settled => entries::Status::Settled,
        EntryStatus::Cancelled => entries::Status::Cancelled,
    }
}

const fn status_from_db(status: entries::Status) -> EntryStatus {
    match status {
        entries::Status::Pending => EntryStatus::Pending,
        entries::Status::Settled => EntryStatus::Settled,
        entries::Status::Cancelled => EntryStatus::Cancelled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_model_to_entry_maps_every_field() {
        let id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let model = entries::Model {
            id,
            description: "rent".to_string(),
            month: 2,
            year: 2026,
            amount: dec!(950.00),
            category: entries::Category::Expense,
            status: entries::Status::Settled,
            user_id,
            registered_at: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        };

        let entry = model_to_entry(model);
        assert_eq!(entry.id.into_inner(), id);
        assert_eq!(entry.description, "rent");
        assert_eq!(entry.month, 2);
        assert_eq!(entry.year, 2026);
        assert_eq!(entry.amount, dec!(950.00));
        assert_eq!(entry.category, EntryCategory::Expense);
        assert_eq!(entry.status, EntryStatus::Settled);
        assert_eq!(entry.user_id.into_inner(), user_id);
    }

    #[test]
    fn test_category_conversion_round_trips() {
        for category in [EntryCategory::Income, EntryCategory::Expense] {
            assert_eq!(category_from_db(category_to_db(category)), category);
        }
    }

    #[test]
    fn test_status_conversion_round_trips() {
        for status in EntryStatus::ALL {
            assert_eq!(status_from_db(status_to_db(status)), status);
        }
    }
}

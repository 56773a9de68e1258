//! Initial database migration.
//!
//! Creates the enums, the users and entries tables, and their indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(ENTRIES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Entry category
CREATE TYPE entry_category AS ENUM ('income', 'expense');

-- Entry lifecycle status
CREATE TYPE entry_status AS ENUM ('pending', 'settled', 'cancelled');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ENTRIES_SQL: &str = r"
CREATE TABLE entries (
    id UUID PRIMARY KEY,
    description VARCHAR(255) NOT NULL,
    month INTEGER NOT NULL,
    year INTEGER NOT NULL,
    amount NUMERIC(16, 2) NOT NULL,
    category entry_category NOT NULL,
    status entry_status NOT NULL,
    user_id UUID NOT NULL REFERENCES users(id),
    registered_at DATE NOT NULL
);

CREATE INDEX idx_entries_user ON entries(user_id);
CREATE INDEX idx_entries_user_category ON entries(user_id, category);
CREATE INDEX idx_entries_year_month ON entries(year, month);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS entries;
DROP TABLE IF EXISTS users;
DROP TYPE IF EXISTS entry_status;
DROP TYPE IF EXISTS entry_category;
";

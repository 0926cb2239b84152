//! `SQLite` implementation of the storage port for every [`Record`] kind.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use hbnb_app::ports::{ChildRepository, Repository};
use hbnb_domain::error::HbnbError;
use hbnb_domain::resource::Resource;

use crate::error::StorageError;
use crate::record::{ChildRecord, Record};

/// Wrapper for converting database rows into domain records.
struct Wrapper<R>(R);

impl<R> Wrapper<R> {
    fn maybe(value: Option<Self>) -> Option<R> {
        value.map(|w| w.0)
    }

    fn all(values: Vec<Self>) -> Vec<R> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r, R: Record> FromRow<'r, SqliteRow> for Wrapper<R> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        R::from_row(row).map(Self)
    }
}

fn insert_sql<R: Record>() -> String {
    let placeholders: Vec<String> = (1..=R::COLUMNS.len()).map(|n| format!("?{n}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

/// `id` is bound first, so it is `?1` and the other columns keep their
/// positions from [`Record::COLUMNS`].
fn update_sql<R: Record>() -> String {
    let assignments: Vec<String> = R::COLUMNS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, column)| format!("{column} = ?{}", index + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ?1",
        R::TABLE,
        assignments.join(", ")
    )
}

/// `SQLite`-backed store covering every record kind.
///
/// Listings come back in insertion order (`rowid`); updates are done in place
/// so they never move a record or touch its children.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl<R: Record> Repository<R> for SqliteStore {
    fn create(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = insert_sql::<R>();
            record
                .bind(sqlx::query(&sql))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn get_by_id(&self, id: R::Id) -> impl Future<Output = Result<Option<R>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT * FROM {} WHERE id = ?", R::TABLE);
            let row: Option<Wrapper<R>> = sqlx::query_as(&sql)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT * FROM {} ORDER BY rowid", R::TABLE);
            let rows: Vec<Wrapper<R>> = sqlx::query_as(&sql)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn update(&self, record: R) -> impl Future<Output = Result<R, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = update_sql::<R>();
            record
                .bind(sqlx::query(&sql))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn delete(&self, id: R::Id) -> impl Future<Output = Result<(), HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("DELETE FROM {} WHERE id = ?", R::TABLE);
            sqlx::query(&sql)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
            let count: i64 = sqlx::query_scalar(&sql)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(u64::try_from(count).unwrap_or_default())
        }
    }
}

impl<R: ChildRecord> ChildRepository<R> for SqliteStore {
    fn find_by_parent(
        &self,
        parent_id: <R::Parent as Resource>::Id,
    ) -> impl Future<Output = Result<Vec<R>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = format!(
                "SELECT * FROM {} WHERE {} = ? ORDER BY rowid",
                R::TABLE,
                R::PARENT_COLUMN
            );
            let rows: Vec<Wrapper<R>> = sqlx::query_as(&sql)
                .bind(parent_id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }
}

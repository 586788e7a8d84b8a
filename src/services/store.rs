//! src/services/store.rs
//!
//! Store — generic persistence over the three resource tables. Each entity
//! declares its table, editable columns, and response wording through
//! [`Resource`]; [`Store`] turns that declaration into the standard CRUD
//! operations, so the request flow is written once instead of copied per
//! resource.

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{
    FromRow, QueryBuilder, SqlitePool,
    query_builder::Separated,
    sqlite::{Sqlite, SqliteRow},
};
use std::{collections::HashMap, marker::PhantomData, path::Path, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One adoption-site resource: a flat record with an auto-assigned id and
/// application-managed timestamps.
///
/// The declaration here — table, columns, upload flag, wording — is the
/// whole per-resource routing table; everything else is generic.
pub trait Resource: Serialize + for<'r> FromRow<'r, SqliteRow> + Send + Sync + Unpin + 'static {
    /// Editable field set accepted by create and update.
    type Fields: DeserializeOwned + Send + Sync + 'static;

    /// Table backing the resource.
    const TABLE: &'static str;

    /// Editable columns, in the bind order used by `push_values`.
    const COLUMNS: &'static [&'static str];

    /// Whether create accepts a multipart body with an optional image file.
    const ACCEPTS_UPLOAD: bool;

    // Response wording, kept in the site's language.
    const NOT_FOUND_MSG: &'static str;
    const REMOVED_MSG: &'static str;
    const LIST_ERR: &'static str;
    const CREATE_ERR: &'static str;
    const UPDATE_ERR: &'static str;
    const DELETE_ERR: &'static str;

    /// Build the field set from multipart text fields plus the stored image
    /// path, if a file was uploaded.
    fn fields_from_form(form: &mut HashMap<String, String>, img: Option<String>) -> Self::Fields;

    /// Bind the editable columns' values, in `COLUMNS` order.
    fn push_values(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>);

    /// Push a `col = ?` assignment for every editable column.
    fn push_assignments(fields: &Self::Fields, out: &mut Separated<'_, '_, Sqlite, &'static str>);
}

/// Typed gateway to one resource's table.
///
/// Create assigns the id and sets both timestamps from one clock read;
/// update is a full-field overwrite that refreshes `updated_at`. Any sqlx
/// fault other than row-not-found surfaces as [`StoreError::Sqlx`] and is
/// mapped to a server error at the handler boundary.
pub struct Store<R> {
    db: Arc<SqlitePool>,
    _entity: PhantomData<R>,
}

impl<R: Resource> Store<R> {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Push the full column list: id, the editable columns, timestamps.
    fn push_select(qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push("id");
        for col in R::COLUMNS {
            qb.push(", ").push(*col);
        }
        qb.push(", created_at, updated_at");
    }

    /// All records, in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<R>> {
        let mut qb = QueryBuilder::new("SELECT ");
        Self::push_select(&mut qb);
        qb.push(" FROM ").push(R::TABLE).push(" ORDER BY id");

        Ok(qb.build_query_as::<R>().fetch_all(&*self.db).await?)
    }

    pub async fn find(&self, id: i64) -> StoreResult<R> {
        let mut qb = QueryBuilder::new("SELECT ");
        Self::push_select(&mut qb);
        qb.push(" FROM ")
            .push(R::TABLE)
            .push(" WHERE id = ")
            .push_bind(id);

        qb.build_query_as::<R>()
            .fetch_one(&*self.db)
            .await
            .map_err(|err| match err {
                sqlx::Error::RowNotFound => StoreError::NotFound,
                other => StoreError::Sqlx(other),
            })
    }

    /// Insert a record and return it with the generated id and timestamps.
    ///
    /// Presence of required fields is left to the table's constraints; a
    /// NULL `nome` is rejected by SQLite, not pre-validated here.
    pub async fn create(&self, fields: &R::Fields) -> StoreResult<R> {
        let now = Utc::now();

        let mut qb = QueryBuilder::new("INSERT INTO ");
        qb.push(R::TABLE).push(" (");
        {
            let mut cols = qb.separated(", ");
            for col in R::COLUMNS {
                cols.push(*col);
            }
            cols.push("created_at").push("updated_at");
        }
        qb.push(") VALUES (");
        {
            let mut vals = qb.separated(", ");
            R::push_values(fields, &mut vals);
            vals.push_bind(now).push_bind(now);
        }
        qb.push(") RETURNING ");
        Self::push_select(&mut qb);

        Ok(qb.build_query_as::<R>().fetch_one(&*self.db).await?)
    }

    /// Overwrite every editable column and refresh `updated_at`.
    pub async fn update(&self, id: i64, fields: &R::Fields) -> StoreResult<R> {
        // Existence check first, so absence reads as NotFound rather than a
        // failed write.
        self.find(id).await?;

        let mut qb = QueryBuilder::new("UPDATE ");
        qb.push(R::TABLE).push(" SET ");
        {
            let mut sets = qb.separated(", ");
            R::push_assignments(fields, &mut sets);
            sets.push("updated_at = ").push_bind_unseparated(Utc::now());
        }
        qb.push(" WHERE id = ").push_bind(id);
        qb.push(" RETURNING ");
        Self::push_select(&mut qb);

        qb.build_query_as::<R>()
            .fetch_one(&*self.db)
            .await
            .map_err(|err| match err {
                sqlx::Error::RowNotFound => StoreError::NotFound,
                other => StoreError::Sqlx(other),
            })
    }

    /// Remove a record. Absence is NotFound, not silent success.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut qb = QueryBuilder::new("DELETE FROM ");
        qb.push(R::TABLE).push(" WHERE id = ").push_bind(id);

        let result = qb.build().execute(&*self.db).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

const MIGRATIONS_PATH: &str = "migrations/0001_init.sql";

/// Run SQLite migrations manually from the SQL file.
pub async fn run_migrations(db: &SqlitePool) -> anyhow::Result<()> {
    if !Path::new(MIGRATIONS_PATH).exists() {
        anyhow::bail!("Migration file not found: {}", MIGRATIONS_PATH);
    }

    let sql = std::fs::read_to_string(MIGRATIONS_PATH)?;
    let statements = sql
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    tracing::info!("Running {} migration statements...", statements.len());

    for stmt in statements {
        tracing::debug!("Executing migration SQL: {}", stmt);
        sqlx::query(stmt).execute(db).await?;
    }

    Ok(())
}

/// Insert the two sample donations the site ships with.
pub async fn seed_donations(db: &SqlitePool) -> anyhow::Result<()> {
    let rows = [
        (
            "Fancy Feast",
            "R$ 35.00",
            "Ração de gato",
            "/assets/fancy-feast.png",
        ),
        ("Cesar", "R$ 46.00", "Ração de cachorro", "/assets/cesar.png"),
    ];

    for (nome, preco, descricao, img) in rows {
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO doacoes (nome, preco, descricao, img, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(nome)
        .bind(preco)
        .bind(descricao)
        .bind(img)
        .bind(now)
        .bind(now)
        .execute(db)
        .await?;
    }

    Ok(())
}

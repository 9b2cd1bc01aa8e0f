use anyhow::Context;
use mercato_core::{now_timestamp, HealthStatus};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::store::CatalogStore;

pub mod controllers;
pub mod error;
pub mod routes;
pub mod store;

/// Stato condiviso fra gli handler. Il catalogo vive in memoria; il pool SQLite
/// resta il livello database "pass-through" del servizio di riferimento e viene
/// interrogato soltanto dal probe di /health.
pub struct AppState {
    pub store: CatalogStore,
    pub pool: SqlitePool,
    pub started_at: Instant,
}

impl AppState {
    /// Stato con il dataset dimostrativo precaricato (4 prodotti, 2 utenti).
    pub fn with_demo_data(pool: SqlitePool) -> Self {
        Self {
            store: CatalogStore::with_demo_data(),
            pool,
            started_at: Instant::now(),
        }
    }

    /// Stato con catalogo vuoto, utile nei test.
    pub fn empty(pool: SqlitePool) -> Self {
        Self {
            store: CatalogStore::empty(),
            pool,
            started_at: Instant::now(),
        }
    }
}

// Dato un percorso di file, restituisce un URL SQLite valido. Crea le directory genitrici se non esistono.
pub fn sqlite_url_for_path(p: &Path) -> anyhow::Result<String> {
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    if let Some(parent) = abs.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent dirs for {:?}", parent))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&abs)
        .with_context(|| format!("create/open sqlite file {:?}", abs))?;
    let s = abs.to_string_lossy().replace('\\', "/");
    Ok(format!("sqlite:///{}", s))
}

/// Crea un DB URL SQLite leggendo la variabile d'ambiente DATABASE_URL.
/// Se non è impostata, usa "mercato.db" nella directory corrente.
pub fn build_sqlite_url() -> anyhow::Result<String> {
    let raw = std::env::var("DATABASE_URL").unwrap_or_else(|_| "mercato.db".to_string());
    if raw == "sqlite::memory:" {
        return Ok(raw);
    }
    // Rimuovi il prefisso "sqlite://" se presente, per ottenere il percorso del file.
    let path_part = if raw.starts_with("sqlite://") {
        raw.trim_start_matches("sqlite:///")
            .trim_start_matches("sqlite://")
            .to_string()
    } else {
        raw
    };
    sqlite_url_for_path(&PathBuf::from(path_part))
}

// Connect to the database and return a connection pool.
pub async fn connect_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect(db_url)
        .await
        .with_context(|| format!("connect to sqlite via {}", db_url))?;
    Ok(pool)
}

/// Fotografa lo stato di salute del servizio. Il database viene sondato
/// acquisendo una connessione dal pool; un esito negativo viene riportato
/// nel corpo ("Disconnected"), non come errore HTTP, come nel riferimento.
pub async fn health_snapshot(state: &AppState) -> HealthStatus {
    let database = match state.pool.acquire().await {
        Ok(_) => "Connected",
        Err(_) => "Disconnected",
    };
    HealthStatus {
        status: "OK".to_string(),
        database: database.to_string(),
        timestamp: now_timestamp(),
        uptime: state.started_at.elapsed().as_secs(),
    }
}

/// Ambiente di esecuzione letto da APP_ENV; tutto ciò che non è "production"
/// conta come sviluppo, e in sviluppo i 500 includono il dettaglio del guasto.
pub fn is_development() -> bool {
    std::env::var("APP_ENV")
        .map(|v| v != "production")
        .unwrap_or(true)
}

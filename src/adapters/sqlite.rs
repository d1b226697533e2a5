use crate::domain::model::{Country, NewCountry};
use crate::domain::ports::CountryStore;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS countries (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    flag        TEXT NOT NULL,
    population  INTEGER NOT NULL,
    capital     TEXT NOT NULL,
    name_key    TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_countries_name_key ON countries (name_key);
";

const SELECT_COLUMNS: &str = "SELECT id, name, flag, population, capital FROM countries";

/// SQLite-backed country store. `name_key` carries the lowercase-folded name
/// so lookups ignore case for non-ASCII names as well.
pub struct SqliteCountryStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCountryStore {
    /// Opens (or creates) the database at `path`. `:memory:` is accepted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// rusqlite 是同步 API，放到 blocking 執行緒避免卡住 tokio worker
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| ServiceError::StorageError {
                message: "connection mutex poisoned".to_string(),
            })?;
            f(&conn)
        })
        .await
        .map_err(|e| ServiceError::StorageError {
            message: format!("store task failed: {}", e),
        })?
    }
}

fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn population_to_sql(population: u64) -> Result<i64> {
    i64::try_from(population).map_err(|_| ServiceError::StorageError {
        message: format!("population {} does not fit in an INTEGER column", population),
    })
}

fn row_to_country(row: &Row<'_>) -> rusqlite::Result<Country> {
    let population: i64 = row.get(3)?;
    let population =
        u64::try_from(population).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(3, population))?;
    Ok(Country {
        id: row.get(0)?,
        name: row.get(1)?,
        flag: row.get(2)?,
        population,
        capital: row.get(4)?,
    })
}

#[async_trait]
impl CountryStore for SqliteCountryStore {
    async fn find_all(&self) -> Result<Vec<Country>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
            let countries = stmt
                .query_map([], row_to_country)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(countries)
        })
        .await
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Country>> {
        let key = name_key(name);
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "{} WHERE name_key = ?1 ORDER BY id LIMIT 1",
                SELECT_COLUMNS
            ))?;
            let country = stmt.query_row(params![key], row_to_country).optional()?;
            Ok(country)
        })
        .await
    }

    async fn save(&self, country: NewCountry) -> Result<Country> {
        let population = population_to_sql(country.population)?;
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO countries (name, flag, population, capital, name_key)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    country.name,
                    country.flag,
                    population,
                    country.capital,
                    name_key(&country.name)
                ],
            )?;
            let id = conn.last_insert_rowid();

            Ok(Country {
                id,
                name: country.name,
                flag: country.flag,
                population: country.population,
                capital: country.capital,
            })
        })
        .await
    }

    async fn count(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let count: i64 =
                conn.query_row("SELECT COUNT(*) FROM countries", [], |row| row.get(0))?;
            u64::try_from(count).map_err(|_| ServiceError::StorageError {
                message: format!("row count {} is negative", count),
            })
        })
        .await
    }
}

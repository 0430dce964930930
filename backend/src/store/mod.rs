//! # Source Store
//!
//! SQLite persistence for source categories, sources and their passages.
//!
//! A single `SourceStore` is opened in `main.rs` and handed to the
//! `SourceRepository`; clones share the same connection. The schema is
//! applied on open, and foreign keys are switched on so that deleting a
//! source removes its passages and deleting a category orphans its sources.
//!
//! Reads run on Tokio's blocking pool through [`SourceStore::read`], so that
//! request handlers never block the async workers on SQLite I/O.

pub mod schema;
pub mod seed;

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use schema::SCHEMA;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("store connection lock poisoned")]
    Poisoned,
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Clone)]
pub struct SourceStore {
    conn: Arc<Mutex<Connection>>,
}

impl SourceStore {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on the blocking pool.
    pub async fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&*guard).map_err(StoreError::from)
        })
            .await?
    }

    /// Runs `f` with exclusive access on the calling thread. Used at startup
    /// for seeding, before the server accepts requests.
    pub fn with_connection<T, E>(&self, f: impl FnOnce(&mut Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut *guard)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::seed::{self, SeedFile};
    use super::SourceStore;

    /// Two categories, one orphan, passages and a featured source.
    pub const FIXTURE: &str = r#"
[[categories]]
slug = "drawdowns-hydrology"
name = "Drawdowns, Hydrology, & Springs"
sort_order = 2

[[categories]]
slug = "manatees-habitat"
name = "Manatees, Habitat, & Connectivity"
description = "Warm-water refuges and river connectivity."
sort_order = 1

[[categories]]
slug = "dam-history"
name = "Dam History & Context"
sort_order = 3

[[sources]]
slug = "fwc-rodman"
title = "Rodman Reservoir"
author = "Florida Fish and Wildlife Conservation Commission"
source_type = "agency"
category_slug = "drawdowns-hydrology"
url = "https://myfwc.com/fishing/freshwater/sites-forecasts/ne/rodman-reservoir/"
description = "Notes on drawdown timing."
sort_order = 4

[[sources]]
slug = "sjrwmd-drawdown"
title = "Technical Fact Sheet: Rodman Reservoir Drawdown (2015-2016)"
short_title = "Drawdown Fact Sheet"
author = "SJRWMD"
year = 2017
source_type = "agency"
category_slug = "drawdowns-hydrology"
pdf_url = "https://aws.sjrwmd.com/SJRWMD/publications/SJ2017-FS2.pdf"
is_featured = true
sort_order = 1

[[sources.passages]]
quote_text = "Drawdowns occur every three to four years."
page_number = "2"
sort_order = 2

[[sources.passages]]
quote_text = "Water levels are lowered from 18 to 11 feet."
section = "Mechanics"
sort_order = 1

[[sources]]
slug = "usfws-recovery"
title = "Florida Manatee Recovery Plan (Third Revision)"
author = "U.S. Fish & Wildlife Service"
year = 2001
source_type = "agency"
category_slug = "manatees-habitat"
url = "https://www.fws.gov/species/manatee"
pdf_url = "https://ecos.fws.gov/docs/recovery_plan/011030.pdf"
is_featured = true
sort_order = 2

[[sources]]
slug = "apms-journal"
title = "SAV Patterns & Tannins Study"
source_type = "peer_reviewed"
doi = "10.1000/japm.58.135"
sort_order = 1
"#;

    pub fn fixture_store() -> SourceStore {
        store_from(FIXTURE)
    }

    pub fn store_from(toml: &str) -> SourceStore {
        let store = SourceStore::open_in_memory().unwrap();
        let file: SeedFile = toml.parse().unwrap();
        seed::apply(&store, &file).unwrap();
        store
    }
}

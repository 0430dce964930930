//! # Source Repository
//!
//! Read access to the source store for the API handlers.
//!
//! Every operation runs its SQL on the blocking pool via [`SourceStore::read`].
//! Failures never reach the caller: they are logged with the operation name
//! (and slug, where there is one) and the operation returns its empty value,
//! `Vec::new()` for listings and `None` for single lookups. A caller therefore
//! cannot tell "not found" from "store unavailable"; the log is where the
//! difference shows.
//!
//! ## Operations
//! - `list_categories`: all categories by `sort_order`.
//! - `list_all_sources`: every source with its category joined in (orphans
//!   included, with `category: None`).
//! - `list_sources_grouped_by_category`: categories in `sort_order`, each with
//!   its sources and their passages. Categories with no sources are left out.
//! - `get_source_by_slug`, `get_source_with_passages`, `get_source_full`:
//!   single-source lookups of increasing width.
//! - `get_citation_projection`: the popover fields only.
//! - `list_featured_sources`: sources flagged `is_featured`.

mod rows;

use crate::store::SourceStore;
use common::model::source::{
    CategoryGroup, CitationData, Source, SourceCategory, SourceFull, SourcePassage,
    SourceWithCategory, SourceWithPassages,
};
use log::error;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;

use rows::{
    category_from_row, citation_from_row, passage_from_row, source_from_row, CATEGORY_COLUMNS,
    CATEGORY_COLUMN_COUNT, PASSAGE_COLUMNS, SOURCE_COLUMNS,
};

#[derive(Clone)]
pub struct SourceRepository {
    store: SourceStore,
}

impl SourceRepository {
    pub fn new(store: SourceStore) -> Self {
        SourceRepository { store }
    }

    pub async fn list_categories(&self) -> Vec<SourceCategory> {
        match self.store.read(query_categories).await {
            Ok(categories) => categories,
            Err(e) => {
                error!("list_categories failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn list_all_sources(&self) -> Vec<SourceWithCategory> {
        match self.store.read(query_sources_with_category).await {
            Ok(sources) => sources,
            Err(e) => {
                error!("list_all_sources failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn list_sources_grouped_by_category(&self) -> Vec<CategoryGroup> {
        match self.store.read(query_grouped).await {
            Ok(groups) => groups,
            Err(e) => {
                error!("list_sources_grouped_by_category failed: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn get_source_by_slug(&self, slug: &str) -> Option<Source> {
        let key = slug.to_string();
        self.lookup("get_source_by_slug", slug, move |conn| query_source(conn, &key))
            .await
    }

    pub async fn get_source_with_passages(&self, slug: &str) -> Option<SourceWithPassages> {
        let key = slug.to_string();
        self.lookup("get_source_with_passages", slug, move |conn| {
            let Some(source) = query_source(conn, &key)? else {
                return Ok(None);
            };
            let passages = query_passages(conn, &source.id)?;
            Ok(Some(SourceWithPassages { source, passages }))
        })
            .await
    }

    pub async fn get_source_full(&self, slug: &str) -> Option<SourceFull> {
        let key = slug.to_string();
        self.lookup("get_source_full", slug, move |conn| {
            let Some(source) = query_source(conn, &key)? else {
                return Ok(None);
            };
            let category = match &source.category_id {
                Some(id) => query_category(conn, id)?,
                None => None,
            };
            let passages = query_passages(conn, &source.id)?;
            Ok(Some(SourceFull {
                source,
                category,
                passages,
            }))
        })
            .await
    }

    pub async fn get_citation_projection(&self, slug: &str) -> Option<CitationData> {
        let key = slug.to_string();
        self.lookup("get_citation_projection", slug, move |conn| {
            conn.query_row(
                "SELECT slug, title, short_title, author, year, source_type, url, description
                 FROM sources WHERE slug = ?1",
                params![key],
                citation_from_row,
            )
                .optional()
        })
            .await
    }

    pub async fn list_featured_sources(&self) -> Vec<Source> {
        let sql = format!(
            "SELECT {} FROM sources s WHERE s.is_featured = 1 ORDER BY s.sort_order, s.slug",
            SOURCE_COLUMNS
        );
        let result = self
            .store
            .read(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map([], |row| source_from_row(row, 0))?;
                rows.collect::<rusqlite::Result<Vec<_>>>()
            })
            .await;
        match result {
            Ok(sources) => sources,
            Err(e) => {
                error!("list_featured_sources failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn lookup<T, F>(&self, operation: &str, slug: &str, f: F) -> Option<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<Option<T>> + Send + 'static,
        T: Send + 'static,
    {
        match self.store.read(f).await {
            Ok(found) => found,
            Err(e) => {
                error!("{} failed for slug '{}': {}", operation, slug, e);
                None
            }
        }
    }
}

fn query_categories(conn: &Connection) -> rusqlite::Result<Vec<SourceCategory>> {
    let sql = format!(
        "SELECT {} FROM source_categories c ORDER BY c.sort_order, c.slug",
        CATEGORY_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| category_from_row(row, 0))?;
    rows.collect()
}

fn query_category(conn: &Connection, id: &str) -> rusqlite::Result<Option<SourceCategory>> {
    let sql = format!(
        "SELECT {} FROM source_categories c WHERE c.id = ?1",
        CATEGORY_COLUMNS
    );
    conn.query_row(&sql, params![id], |row| category_from_row(row, 0))
        .optional()
}

fn query_source(conn: &Connection, slug: &str) -> rusqlite::Result<Option<Source>> {
    let sql = format!("SELECT {} FROM sources s WHERE s.slug = ?1", SOURCE_COLUMNS);
    conn.query_row(&sql, params![slug], |row| source_from_row(row, 0))
        .optional()
}

fn query_passages(conn: &Connection, source_id: &str) -> rusqlite::Result<Vec<SourcePassage>> {
    let sql = format!(
        "SELECT {} FROM source_passages p WHERE p.source_id = ?1 ORDER BY p.sort_order",
        PASSAGE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![source_id], passage_from_row)?;
    rows.collect()
}

fn query_sources_with_category(conn: &Connection) -> rusqlite::Result<Vec<SourceWithCategory>> {
    let sql = format!(
        "SELECT {}, {} FROM sources s
         LEFT JOIN source_categories c ON c.id = s.category_id
         ORDER BY s.sort_order, s.slug",
        CATEGORY_COLUMNS, SOURCE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        let category_id: Option<String> = row.get(0)?;
        let category = match category_id {
            Some(_) => Some(category_from_row(row, 0)?),
            None => None,
        };
        Ok(SourceWithCategory {
            source: source_from_row(row, CATEGORY_COLUMN_COUNT)?,
            category,
        })
    })?;
    rows.collect()
}

/// Three reads (categories, categorized sources, their passages) stitched
/// together in memory.
fn query_grouped(conn: &Connection) -> rusqlite::Result<Vec<CategoryGroup>> {
    let categories = query_categories(conn)?;

    let sql = format!(
        "SELECT {} FROM sources s WHERE s.category_id IS NOT NULL ORDER BY s.sort_order, s.slug",
        SOURCE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let sources = stmt
        .query_map([], |row| source_from_row(row, 0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let sql = format!(
        "SELECT {} FROM source_passages p
         JOIN sources s ON s.id = p.source_id
         WHERE s.category_id IS NOT NULL
         ORDER BY p.sort_order",
        PASSAGE_COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut passages_by_source: HashMap<String, Vec<SourcePassage>> = HashMap::new();
    for passage in stmt.query_map([], passage_from_row)? {
        let passage = passage?;
        passages_by_source
            .entry(passage.source_id.clone())
            .or_default()
            .push(passage);
    }

    let mut by_category: HashMap<String, Vec<SourceWithPassages>> = HashMap::new();
    for source in sources {
        let passages = passages_by_source.remove(&source.id).unwrap_or_default();
        if let Some(category_id) = source.category_id.clone() {
            by_category
                .entry(category_id)
                .or_default()
                .push(SourceWithPassages { source, passages });
        }
    }

    Ok(categories
        .into_iter()
        .filter_map(|category| {
            let sources = by_category.remove(&category.id)?;
            Some(CategoryGroup { category, sources })
        })
        .collect())
}

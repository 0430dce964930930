//! # Seed Loader
//!
//! Loads categories, sources and passages from a TOML file into the store.
//!
//! ```toml
//! [[categories]]
//! slug = "manatees-habitat"
//! name = "Manatees, Habitat, & Connectivity"
//! sort_order = 1
//!
//! [[sources]]
//! slug = "usfws-recovery"
//! title = "Florida Manatee Recovery Plan"
//! source_type = "agency"
//! category_slug = "manatees-habitat"
//!
//! [[sources.passages]]
//! quote_text = "..."
//! ```
//!
//! Categories and sources are upserted by slug, so re-running a seed updates
//! rows in place and keeps their ids. A source's passages are replaced as a
//! whole. A source naming a `category_slug` that does not exist is skipped and
//! counted in the report, as is a source using a reserved listing path
//! (`categories`, `grouped`, `featured`) as its slug. Everything runs in one transaction.

use super::{SourceStore, StoreError};
use common::api::is_reserved_slug;
use common::model::source::SourceType;
use log::{info, warn};
use rusqlite::{params, OptionalExtension, Transaction};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<rusqlite::Error> for SeedError {
    fn from(e: rusqlite::Error) -> Self {
        SeedError::Store(StoreError::Sqlite(e))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedFile {
    pub categories: Vec<SeedCategory>,
    pub sources: Vec<SeedSource>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
}

#[derive(Debug, Deserialize)]
pub struct SeedSource {
    pub slug: String,
    pub title: String,
    pub short_title: Option<String>,
    pub author: Option<String>,
    pub publication: Option<String>,
    pub year: Option<i32>,
    #[serde(default)]
    pub source_type: SourceType,
    pub url: Option<String>,
    pub pdf_url: Option<String>,
    pub doi: Option<String>,
    pub description: Option<String>,
    pub full_citation: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub category_slug: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub passages: Vec<SeedPassage>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPassage {
    pub quote_text: String,
    pub context: Option<String>,
    pub section: Option<String>,
    pub page_number: Option<String>,
    pub usage_hint: Option<String>,
    pub fragment_url: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub sources: usize,
    pub passages: usize,
    /// Slugs of sources that were not written: a `category_slug` matching no
    /// category, or a reserved slug.
    pub skipped: Vec<String>,
}

impl FromStr for SeedFile {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl SeedFile {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }
}

/// Applies `file` to the store in a single transaction.
pub fn apply(store: &SourceStore, file: &SeedFile) -> Result<SeedReport, SeedError> {
    store.with_connection(|conn| {
        let tx = conn.transaction()?;
        let report = apply_in(&tx, file)?;
        tx.commit()?;
        Ok(report)
    })
}

fn apply_in(tx: &Transaction<'_>, file: &SeedFile) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for category in &file.categories {
        tx.execute(
            "INSERT INTO source_categories (id, slug, name, description, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(slug) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                sort_order = excluded.sort_order,
                updated_at = datetime('now')",
            params![
                Uuid::new_v4().to_string(),
                category.slug,
                category.name,
                category.description,
                category.sort_order
            ],
        )?;
        report.categories += 1;
    }

    let category_ids = category_ids(tx)?;

    for source in &file.sources {
        if is_reserved_slug(&source.slug) {
            warn!("Skipping source '{}': slug is reserved", source.slug);
            report.skipped.push(source.slug.clone());
            continue;
        }
        let category_id = match &source.category_slug {
            Some(slug) => match category_ids.get(slug) {
                Some(id) => Some(id.clone()),
                None => {
                    warn!(
                        "Skipping source '{}': unknown category '{}'",
                        source.slug, slug
                    );
                    report.skipped.push(source.slug.clone());
                    continue;
                }
            },
            None => None,
        };

        let source_id = upsert_source(tx, source, category_id.as_deref())?;

        tx.execute(
            "DELETE FROM source_passages WHERE source_id = ?1",
            params![source_id],
        )?;
        for passage in &source.passages {
            tx.execute(
                "INSERT INTO source_passages
                    (id, source_id, quote_text, context, section, page_number,
                     usage_hint, fragment_url, sort_order)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    Uuid::new_v4().to_string(),
                    source_id,
                    passage.quote_text,
                    passage.context,
                    passage.section,
                    passage.page_number,
                    passage.usage_hint,
                    passage.fragment_url,
                    passage.sort_order
                ],
            )?;
            report.passages += 1;
        }
        report.sources += 1;
    }

    info!(
        "Seeded {} categories, {} sources, {} passages ({} skipped)",
        report.categories,
        report.sources,
        report.passages,
        report.skipped.len()
    );
    Ok(report)
}

fn category_ids(tx: &Transaction<'_>) -> rusqlite::Result<HashMap<String, String>> {
    let mut stmt = tx.prepare("SELECT slug, id FROM source_categories")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

/// Inserts or updates the source row and returns its id.
fn upsert_source(
    tx: &Transaction<'_>,
    source: &SeedSource,
    category_id: Option<&str>,
) -> rusqlite::Result<String> {
    tx.execute(
        "INSERT INTO sources
            (id, slug, title, short_title, author, publication, year, source_type,
             url, pdf_url, doi, description, full_citation, is_featured,
             category_id, sort_order)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
         ON CONFLICT(slug) DO UPDATE SET
            title = excluded.title,
            short_title = excluded.short_title,
            author = excluded.author,
            publication = excluded.publication,
            year = excluded.year,
            source_type = excluded.source_type,
            url = excluded.url,
            pdf_url = excluded.pdf_url,
            doi = excluded.doi,
            description = excluded.description,
            full_citation = excluded.full_citation,
            is_featured = excluded.is_featured,
            category_id = excluded.category_id,
            sort_order = excluded.sort_order,
            updated_at = datetime('now')",
        params![
            Uuid::new_v4().to_string(),
            source.slug,
            source.title,
            source.short_title,
            source.author,
            source.publication,
            source.year,
            source.source_type.as_str(),
            source.url,
            source.pdf_url,
            source.doi,
            source.description,
            source.full_citation,
            source.is_featured,
            category_id,
            source.sort_order
        ],
    )?;

    tx.query_row(
        "SELECT id FROM sources WHERE slug = ?1",
        params![source.slug],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(rusqlite::Error::QueryReturnedNoRows)
}

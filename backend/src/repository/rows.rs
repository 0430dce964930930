//! Column lists and row mappers shared by the repository queries.
//!
//! Mappers take the offset of their first column so one row can carry a
//! joined category followed by a source.

use common::model::source::{CitationData, Source, SourceCategory, SourcePassage, SourceType};
use rusqlite::types::Type;
use rusqlite::Row;

pub const CATEGORY_COLUMNS: &str =
    "c.id, c.slug, c.name, c.description, c.sort_order, c.created_at, c.updated_at";
pub const CATEGORY_COLUMN_COUNT: usize = 7;

pub const SOURCE_COLUMNS: &str = "s.id, s.slug, s.title, s.short_title, s.author, \
    s.publication, s.year, s.source_type, s.url, s.pdf_url, s.doi, s.description, \
    s.full_citation, s.is_featured, s.category_id, s.sort_order, s.created_at, s.updated_at";

pub const PASSAGE_COLUMNS: &str = "p.id, p.source_id, p.quote_text, p.context, p.section, \
    p.page_number, p.usage_hint, p.fragment_url, p.sort_order";

pub fn category_from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<SourceCategory> {
    Ok(SourceCategory {
        id: row.get(at)?,
        slug: row.get(at + 1)?,
        name: row.get(at + 2)?,
        description: row.get(at + 3)?,
        sort_order: row.get(at + 4)?,
        created_at: row.get(at + 5)?,
        updated_at: row.get(at + 6)?,
    })
}

pub fn source_from_row(row: &Row<'_>, at: usize) -> rusqlite::Result<Source> {
    Ok(Source {
        id: row.get(at)?,
        slug: row.get(at + 1)?,
        title: row.get(at + 2)?,
        short_title: row.get(at + 3)?,
        author: row.get(at + 4)?,
        publication: row.get(at + 5)?,
        year: row.get(at + 6)?,
        source_type: source_type(row, at + 7)?,
        url: row.get(at + 8)?,
        pdf_url: row.get(at + 9)?,
        doi: row.get(at + 10)?,
        description: row.get(at + 11)?,
        full_citation: row.get(at + 12)?,
        is_featured: row.get(at + 13)?,
        category_id: row.get(at + 14)?,
        sort_order: row.get(at + 15)?,
        created_at: row.get(at + 16)?,
        updated_at: row.get(at + 17)?,
    })
}

pub fn passage_from_row(row: &Row<'_>) -> rusqlite::Result<SourcePassage> {
    Ok(SourcePassage {
        id: row.get(0)?,
        source_id: row.get(1)?,
        quote_text: row.get(2)?,
        context: row.get(3)?,
        section: row.get(4)?,
        page_number: row.get(5)?,
        usage_hint: row.get(6)?,
        fragment_url: row.get(7)?,
        sort_order: row.get(8)?,
    })
}

/// Maps `slug, title, short_title, author, year, source_type, url, description`.
pub fn citation_from_row(row: &Row<'_>) -> rusqlite::Result<CitationData> {
    Ok(CitationData {
        slug: row.get(0)?,
        title: row.get(1)?,
        short_title: row.get(2)?,
        author: row.get(3)?,
        year: row.get(4)?,
        source_type: source_type(row, 5)?,
        url: row.get(6)?,
        description: row.get(7)?,
    })
}

fn source_type(row: &Row<'_>, idx: usize) -> rusqlite::Result<SourceType> {
    let text: String = row.get(idx)?;
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub const SCHEMA: &str = r#"
-- source_categories table
CREATE TABLE IF NOT EXISTS source_categories (
    id TEXT PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

-- sources table
CREATE TABLE IF NOT EXISTS sources (
    id TEXT PRIMARY KEY,
    slug TEXT NOT NULL UNIQUE,
    title TEXT NOT NULL,
    short_title TEXT,
    author TEXT,
    publication TEXT,
    year INTEGER,
    source_type TEXT NOT NULL DEFAULT 'other'
        CHECK (source_type IN ('peer_reviewed', 'agency', 'advocacy', 'news', 'legal', 'other')),
    url TEXT,
    pdf_url TEXT,
    doi TEXT,
    description TEXT,
    full_citation TEXT,
    is_featured INTEGER NOT NULL DEFAULT 0,
    category_id TEXT REFERENCES source_categories(id) ON DELETE SET NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_sources_category ON sources(category_id, sort_order);
CREATE INDEX IF NOT EXISTS idx_sources_featured ON sources(is_featured, sort_order);

-- source_passages table (owned by a source)
CREATE TABLE IF NOT EXISTS source_passages (
    id TEXT PRIMARY KEY,
    source_id TEXT NOT NULL REFERENCES sources(id) ON DELETE CASCADE,
    quote_text TEXT NOT NULL,
    context TEXT,
    section TEXT,
    page_number TEXT,
    usage_hint TEXT,
    fragment_url TEXT,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_source_passages_source ON source_passages(source_id, sort_order);
"#;

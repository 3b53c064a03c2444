use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn init_pool() -> Result<DbPool, Box<dyn std::error::Error>> {
    let manager = SqliteConnectionManager::file("website/db/riwaq.db");
    let pool = Pool::builder().max_size(10).build(manager)?;

    // Enable WAL mode for better concurrent read performance
    let conn = pool.get()?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    conn.execute_batch(
        "
        -- Art exhibitions
        CREATE TABLE IF NOT EXISTS art_exhibitions (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            artist_ar TEXT,
            artist_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            image_url TEXT,
            start_date DATE,
            end_date DATE,
            status TEXT NOT NULL DEFAULT 'UPCOMING',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Literary events (salons, readings, signings)
        CREATE TABLE IF NOT EXISTS literary_events (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            guest_ar TEXT,
            guest_fr TEXT,
            location_ar TEXT,
            location_fr TEXT,
            event_date DATE,
            image_url TEXT,
            status TEXT NOT NULL DEFAULT 'UPCOMING',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Workshop categories
        CREATE TABLE IF NOT EXISTS workshop_categories (
            id INTEGER PRIMARY KEY,
            name_ar TEXT,
            name_fr TEXT
        );

        -- Workshops
        CREATE TABLE IF NOT EXISTS workshops (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            instructor_ar TEXT,
            instructor_fr TEXT,
            schedule_ar TEXT,
            schedule_fr TEXT,
            category_id INTEGER,
            image_url TEXT,
            status TEXT NOT NULL DEFAULT 'UPCOMING',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (category_id) REFERENCES workshop_categories(id)
        );

        -- Articles
        CREATE TABLE IF NOT EXISTS articles (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            content_ar TEXT,
            content_fr TEXT,
            excerpt_ar TEXT,
            excerpt_fr TEXT,
            author_ar TEXT,
            author_fr TEXT,
            image_url TEXT,
            published_at DATE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Publication issues (the association's periodical)
        CREATE TABLE IF NOT EXISTS publication_issues (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            issue_number INTEGER,
            cover_url TEXT,
            pdf_url TEXT,
            published_at DATE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Books
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            author_ar TEXT,
            author_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            cover_url TEXT,
            publish_year INTEGER,
            isbn TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Partners (replaced wholesale by the partners page sync)
        CREATE TABLE IF NOT EXISTS partners (
            id INTEGER PRIMARY KEY,
            name_ar TEXT,
            name_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            logo_url TEXT,
            website_url TEXT,
            sort_order INTEGER NOT NULL DEFAULT 0
        );

        -- Collaborative programs (replaced wholesale alongside partners)
        CREATE TABLE IF NOT EXISTS collaborative_programs (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            image_url TEXT,
            sort_order INTEGER NOT NULL DEFAULT 0
        );

        -- Partners page singleton content (at most one row, app-enforced)
        CREATE TABLE IF NOT EXISTS partners_page_content (
            id INTEGER PRIMARY KEY,
            title_ar TEXT,
            title_fr TEXT,
            intro_ar TEXT,
            intro_fr TEXT,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Cultural channel videos (replaced wholesale by the channel sync)
        CREATE TABLE IF NOT EXISTS cultural_channel_videos (
            id INTEGER PRIMARY KEY,
            youtube_id TEXT NOT NULL UNIQUE,
            title_ar TEXT,
            title_fr TEXT,
            description_ar TEXT,
            description_fr TEXT,
            publish_date DATE,
            sort_order INTEGER NOT NULL DEFAULT 0
        );

        -- Cultural channel singleton content (at most one row, app-enforced)
        CREATE TABLE IF NOT EXISTS cultural_channel_content (
            id INTEGER PRIMARY KEY,
            page_title_ar TEXT,
            page_title_fr TEXT,
            intro_ar TEXT,
            intro_fr TEXT,
            channel_url TEXT,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Settings (key-value)
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_exhibitions_status ON art_exhibitions(status);
        CREATE INDEX IF NOT EXISTS idx_events_status ON literary_events(status);
        CREATE INDEX IF NOT EXISTS idx_workshops_status ON workshops(status);
        CREATE INDEX IF NOT EXISTS idx_workshops_category ON workshops(category_id);
        CREATE INDEX IF NOT EXISTS idx_articles_published ON articles(published_at);
        ",
    )?;

    Ok(())
}

pub fn seed_defaults(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    let defaults = vec![
        // General
        ("site_name_ar", "جمعية ثقافية"),
        ("site_name_fr", "Association culturelle"),
        ("site_url", "http://localhost:8000"),
        // Uploads
        ("uploads_max_image_mb", "5"),
        ("uploads_max_document_mb", "10"),
        ("uploads_allowed_images", "jpg,jpeg,png,gif,webp,svg"),
        ("uploads_allowed_documents", "pdf,doc,docx"),
        ("uploads_blob_endpoint", "https://blob.vercel-storage.com"),
        ("uploads_blob_token", ""),
    ];

    for (key, value) in defaults {
        conn.execute(
            "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
    }

    Ok(())
}

use chrono::Utc;
use rusqlite::{Connection, Result as SqlResult};
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::PhotoError;
use crate::photo::PhotoEntry;
use super::data::SavedPhoto;

/// The Library is the local stand-in for the platform photo album.
/// Saved photos are written as PNGs into a pictures folder and recorded
/// in a SQLite catalog together with the filter that produced them.
pub struct Library {
    conn: Connection,
    db_path: PathBuf,
    photos_dir: PathBuf,
}

impl Library {
    /// Create a new Library instance and initialize the catalog.
    ///
    /// The catalog database lives in the user's data directory:
    /// - Linux: ~/.local/share/mono-editor/mono_editor.db
    /// - macOS: ~/Library/Application Support/mono-editor/mono_editor.db
    /// - Windows: %APPDATA%\mono-editor\mono_editor.db
    ///
    /// Saved images go to a `mono-editor` folder in the user's
    /// pictures directory.
    pub fn new() -> SqlResult<Self> {
        Self::open(Self::default_db_path(), Self::default_photos_dir())
    }

    /// Open (or create) the catalog at an explicit location
    pub fn open(db_path: PathBuf, photos_dir: PathBuf) -> SqlResult<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;

        println!("📁 Catalog initialized at: {}", db_path.display());

        let library = Library {
            conn,
            db_path,
            photos_dir,
        };
        library.init_schema()?;

        Ok(library)
    }

    /// Get the path where the catalog database should be stored
    fn default_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user data directory");

        path.push("mono-editor");
        path.push("mono_editor.db");
        path
    }

    /// Get the folder saved photos are written into
    fn default_photos_dir() -> PathBuf {
        let mut path = dirs::picture_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user pictures directory");

        path.push("mono-editor");
        path
    }

    /// Initialize the catalog schema.
    /// Creates the table and index if they don't exist.
    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS saved_photos (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                filename        TEXT NOT NULL,
                path            TEXT NOT NULL UNIQUE,
                filter_json     TEXT,
                saved_at        INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_saved_photos_saved_at
             ON saved_photos(saved_at DESC)",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the catalog database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Get the folder saved photos are written into
    pub fn photos_dir(&self) -> &PathBuf {
        &self.photos_dir
    }

    /// Get a count of photos saved so far
    pub fn saved_count(&self) -> SqlResult<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM saved_photos",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("db_path", &self.db_path)
            .field("photos_dir", &self.photos_dir)
            .finish()
    }
}

/// Save a photo into the library asynchronously
///
/// Runs on a blocking task: PNG encode plus a catalog insert. The task
/// opens its own database connection because rusqlite connections are
/// not Send. Any write or insert failure maps to `SaveFailed`; a failure
/// to join the task is coerced to `Unknown`.
pub async fn save_to_library(
    photo: PhotoEntry,
    db_path: PathBuf,
    photos_dir: PathBuf,
) -> Result<SavedPhoto, PhotoError> {
    task::spawn_blocking(move || save_photo_blocking(&photo, &db_path, &photos_dir))
        .await
        .map_err(|_| PhotoError::Unknown)?
}

/// Blocking implementation of the library save
fn save_photo_blocking(
    photo: &PhotoEntry,
    db_path: &Path,
    photos_dir: &Path,
) -> Result<SavedPhoto, PhotoError> {
    std::fs::create_dir_all(photos_dir).map_err(|e| {
        eprintln!("⚠️  Failed to create {}: {}", photos_dir.display(), e);
        PhotoError::SaveFailed
    })?;

    let now = Utc::now();
    let filename = format!("mono_{}_{}.png", now.format("%Y%m%d_%H%M%S"), photo.id());
    let path = photos_dir.join(&filename);
    let path_str = path.to_string_lossy().to_string();

    photo.image().save(&path).map_err(|e| {
        eprintln!("⚠️  Failed to write {}: {}", path.display(), e);
        PhotoError::SaveFailed
    })?;

    let filter_json = photo
        .filter()
        .map(|filter| filter.to_json())
        .transpose()
        .map_err(|_| PhotoError::SaveFailed)?;

    let conn = Connection::open(db_path).map_err(|e| {
        eprintln!("⚠️  Failed to open catalog: {}", e);
        PhotoError::SaveFailed
    })?;

    conn.execute(
        "INSERT INTO saved_photos (filename, path, filter_json, saved_at)
         VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            &filename,
            &path_str,
            filter_json,
            now.timestamp(),
        ],
    )
    .map_err(|e| {
        eprintln!("⚠️  Failed to record save: {}", e);
        PhotoError::SaveFailed
    })?;

    let id = conn.last_insert_rowid();

    println!("💾 Saved photo to {}", path.display());

    Ok(SavedPhoto {
        id,
        filename,
        path: path_str,
        saved_at: now.timestamp(),
    })
}

/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the database layer and the UI layer.

/// Represents a single saved photo in the library catalog
#[derive(Debug, Clone, PartialEq)]
pub struct SavedPhoto {
    /// Unique database ID
    pub id: i64,
    /// Filename only (e.g., "mono_20260828_101500.png")
    pub filename: String,
    /// Full path to the saved PNG
    pub path: String,
    /// Unix timestamp of the save
    pub saved_at: i64,
}

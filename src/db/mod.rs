pub mod sqlite;

pub use sqlite::SqliteStore;

/// Narrow seam over the document database: named collections of JSON bodies.
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its storage-assigned id. Non-object
    /// documents are rejected.
    fn insert_one(&self, collection: &str, document: &serde_json::Value)
        -> anyhow::Result<String>;

    /// Fetch up to `limit` raw documents, newest first, each carrying its id
    /// under `"_id"`. A collection that was never written to reads as empty.
    fn find_many(&self, collection: &str, limit: i64) -> anyhow::Result<Vec<serde_json::Value>>;

    fn collection_names(&self) -> anyhow::Result<Vec<String>>;
}

use std::sync::Mutex;

use anyhow::Context;
use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use super::DocumentStore;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open database")?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
            .context("failed to set database pragmas")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

// Collection names are spliced into SQL (table names cannot be bound), so
// restrict them to identifier characters.
fn check_collection_name(collection: &str) -> anyhow::Result<()> {
    anyhow::ensure!(
        !collection.is_empty()
            && collection
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "invalid collection name: {collection}"
    );
    Ok(())
}

fn collection_exists(conn: &Connection, collection: &str) -> anyhow::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![collection],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

impl DocumentStore for SqliteStore {
    fn insert_one(
        &self,
        collection: &str,
        document: &serde_json::Value,
    ) -> anyhow::Result<String> {
        check_collection_name(collection)?;
        anyhow::ensure!(document.is_object(), "document must be a JSON object");

        let id = Uuid::new_v4().to_string();
        let body = serde_json::to_string(document).context("failed to serialize document")?;
        let created_at = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();

        let conn = self.conn.lock().unwrap();

        // Collections appear on first write, like a document database.
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {collection} (
                id TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                created_at TEXT NOT NULL
            );"
        ))
        .with_context(|| format!("failed to create collection: {collection}"))?;

        conn.execute(
            &format!("INSERT INTO {collection} (id, body, created_at) VALUES (?1, ?2, ?3)"),
            params![id, body, created_at],
        )
        .with_context(|| format!("failed to insert into collection: {collection}"))?;

        Ok(id)
    }

    fn find_many(&self, collection: &str, limit: i64) -> anyhow::Result<Vec<serde_json::Value>> {
        check_collection_name(collection)?;

        // A negative LIMIT means unlimited in sqlite.
        let limit = limit.max(0);

        let conn = self.conn.lock().unwrap();
        if !collection_exists(&conn, collection)? {
            return Ok(vec![]);
        }

        // rowid keeps newest-first deterministic even when created_at collides.
        let mut stmt = conn.prepare(&format!(
            "SELECT id, body FROM {collection} ORDER BY rowid DESC LIMIT ?1"
        ))?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut documents = vec![];
        for row in rows {
            let (id, body) = row?;
            let mut document: serde_json::Value =
                serde_json::from_str(&body).unwrap_or(serde_json::json!({}));
            if let Some(map) = document.as_object_mut() {
                map.insert("_id".to_string(), serde_json::Value::String(id));
            }
            documents.push(document);
        }
        Ok(documents)
    }

    fn collection_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut names = vec![];
        for row in rows {
            names.push(row?);
        }
        Ok(names)
    }
}

use redis::Connection;
use serde_json::Value;

use crate::services::store::{DocumentRef, DocumentStore};
use crate::types::{SeedError, SeedResult, STORE_URI_KEY};

/// Collections live in redis as a sorted set of ids (`{collection}`) plus one
/// JSON string per document (`{collection}:{id}`).
pub struct RedisStore {
    conn: Connection,
}

impl RedisStore {
    pub fn connect(uri: &str) -> SeedResult<Self> {
        let client = redis::Client::open(uri)?;
        let conn = client.get_connection()?;

        Ok(Self { conn })
    }
}

fn document_key(collection: &str, id: &str) -> String {
    format!("{collection}:{id}")
}

impl DocumentStore for RedisStore {
    fn fetch_page(&mut self, collection: &str, limit: usize) -> SeedResult<Vec<DocumentRef>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let ids = redis::cmd("ZRANGE")
            .arg(collection)
            .arg(0)
            .arg(limit as isize - 1)
            .query::<Vec<String>>(&mut self.conn)?;

        Ok(ids.iter().map(|id| DocumentRef::new(collection, id)).collect())
    }

    fn delete(&mut self, doc: &DocumentRef) -> SeedResult<()> {
        redis::pipe()
            .atomic()
            .cmd("DEL").arg(document_key(&doc.collection, &doc.id)).ignore()
            .cmd("ZREM").arg(&doc.collection).arg(&doc.id).ignore()
            .query::<()>(&mut self.conn)?;

        Ok(())
    }

    fn write(&mut self, collection: &str, id: &str, record: &Value) -> SeedResult<()> {
        let json = serde_json::to_string(record)?;

        redis::pipe()
            .atomic()
            .cmd("SET").arg(document_key(collection, id)).arg(json).ignore()
            .cmd("ZADD").arg(collection).arg(0).arg(id).ignore()
            .query::<()>(&mut self.conn)?;

        Ok(())
    }
}

/// Process-wide store handle. Built once at startup and passed to every pipeline.
pub enum StoreHandle {
    Connected(RedisStore),
    /// No connection source was configured; every operation fails.
    Uninitialized,
}

impl StoreHandle {
    fn connected(&mut self) -> SeedResult<&mut RedisStore> {
        match self {
            StoreHandle::Connected(store) => Ok(store),
            StoreHandle::Uninitialized => Err(SeedError::ConfigurationMissing(STORE_URI_KEY.to_owned())),
        }
    }
}

impl DocumentStore for StoreHandle {
    fn fetch_page(&mut self, collection: &str, limit: usize) -> SeedResult<Vec<DocumentRef>> {
        self.connected()?.fetch_page(collection, limit)
    }

    fn delete(&mut self, doc: &DocumentRef) -> SeedResult<()> {
        self.connected()?.delete(doc)
    }

    fn write(&mut self, collection: &str, id: &str, record: &Value) -> SeedResult<()> {
        self.connected()?.write(collection, id, record)
    }
}

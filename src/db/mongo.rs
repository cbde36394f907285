//! MongoDB client and collection wrapper
//!
//! Two operations back the whole API: insert one document into a named
//! collection, and query a named collection with a filter and result cap.
//! Records are insert-only; there is no update or delete path.

use bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};

use crate::types::StockroomError;

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Create a new MongoDB client and verify the connection
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, StockroomError> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| StockroomError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        // Verify connection with timeout
        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StockroomError::Database(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get a typed collection
    pub fn collection<T>(&self, name: &str) -> MongoCollection<T>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        MongoCollection {
            inner: self.client.database(&self.db_name).collection::<T>(name),
        }
    }

    /// List collection names in the database (diagnostic endpoint)
    pub async fn list_collection_names(&self) -> Result<Vec<String>, StockroomError> {
        self.client
            .database(&self.db_name)
            .list_collection_names()
            .await
            .map_err(|e| StockroomError::Database(format!("List collections failed: {}", e)))
    }

    /// Get the database name
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

/// Typed MongoDB collection
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    inner: Collection<T>,
}

impl<T> MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// Insert a document, returning its generated id
    pub async fn insert_one(&self, item: T) -> Result<ObjectId, StockroomError> {
        let result = self
            .inner
            .insert_one(item)
            .await
            .map_err(|e| StockroomError::Database(format!("Insert failed: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StockroomError::Database("Failed to get inserted ID".into()))
    }

    /// Find documents matching a filter, truncated at `limit`
    ///
    /// Order is whatever the store returns; no sort is applied.
    pub async fn find_many(&self, filter: Document, limit: i64) -> Result<Vec<T>, StockroomError> {
        use futures_util::StreamExt;

        let cursor = self
            .inner
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| StockroomError::Database(format!("Find failed: {}", e)))?;

        let results: Vec<T> = cursor
            .filter_map(|doc| async {
                match doc {
                    Ok(d) => Some(d),
                    Err(e) => {
                        error!("Error reading document: {}", e);
                        None
                    }
                }
            })
            .collect()
            .await;

        Ok(results)
    }
}

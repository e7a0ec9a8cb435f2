//! # CouchDB Backend
//!
//! Talks to the CouchDB HTTP API:
//! - `GET /{db}/{id}` reads
//! - `PUT /{db}/{id}` writes
//! - `HEAD` then `DELETE /{db}/{id}?rev=` deletes
//! - `PUT /{db}` creates the database (412 when it already exists)

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::debug;

use super::backend::DocumentStore;
use super::document::StoredDocument;
use super::errors::{StoreError, StoreResult};

/// CouchDB document store
#[derive(Debug, Clone)]
pub struct CouchStore {
    client: Client,
    db_url: Url,
}

impl CouchStore {
    /// Create a store for the database at `db_url` (e.g. `http://localhost:5984/rcs`)
    pub fn new(db_url: &str) -> StoreResult<Self> {
        let db_url = Url::parse(db_url)
            .map_err(|e| StoreError::Config(format!("invalid database url '{}': {}", db_url, e)))?;
        if db_url.cannot_be_a_base() {
            return Err(StoreError::Config(format!("database url '{}' has no path", db_url)));
        }
        Ok(Self {
            client: Client::new(),
            db_url,
        })
    }

    /// URL of the document `key`, with the key percent-encoded as one segment
    pub fn doc_url(&self, key: &str) -> StoreResult<Url> {
        let mut url = self.db_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Config(format!("database url '{}' has no path", self.db_url)))?
            .pop_if_empty()
            .push(key);
        Ok(url)
    }

    /// Current revision of `key`, read from the ETag of a HEAD request
    async fn current_rev(&self, key: &str) -> StoreResult<String> {
        let response = self.client.head(self.doc_url(key)?).send().await?;
        match response.status() {
            StatusCode::OK => response
                .headers()
                .get(reqwest::header::ETAG)
                .and_then(|v| v.to_str().ok())
                .map(|etag| etag.trim_matches('"').to_string())
                .ok_or_else(|| StoreError::Decode(format!("no revision header for '{}'", key))),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(key.to_string())),
            _ => Err(unexpected(response).await),
        }
    }
}

async fn unexpected(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    StoreError::Unexpected { status, body }
}

#[async_trait]
impl DocumentStore for CouchStore {
    async fn ensure_database(&self) -> StoreResult<()> {
        let response = self.client.put(self.db_url.clone()).send().await?;
        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => {
                debug!(db = %self.db_url, "created registration database");
                Ok(())
            }
            StatusCode::PRECONDITION_FAILED => Ok(()),
            _ => Err(unexpected(response).await),
        }
    }

    async fn get(&self, key: &str) -> StoreResult<StoredDocument> {
        let response = self.client.get(self.doc_url(key)?).send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json::<StoredDocument>().await?),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(key.to_string())),
            _ => Err(unexpected(response).await),
        }
    }

    async fn save(&self, doc: StoredDocument) -> StoreResult<()> {
        let response = self
            .client
            .put(self.doc_url(&doc.id)?)
            .json(&doc)
            .send()
            .await?;
        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => Ok(()),
            StatusCode::CONFLICT => Err(StoreError::Conflict(doc.id)),
            _ => Err(unexpected(response).await),
        }
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let rev = self.current_rev(key).await?;
        let response = self
            .client
            .delete(self.doc_url(key)?)
            .query(&[("rev", rev.as_str())])
            .send()
            .await?;
        match response.status() {
            StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(key.to_string())),
            StatusCode::CONFLICT => Err(StoreError::Conflict(key.to_string())),
            _ => Err(unexpected(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_url_encodes_key() {
        let store = CouchStore::new("http://localhost:5984/rcs").unwrap();
        assert_eq!(
            store.doc_url("abc").unwrap().as_str(),
            "http://localhost:5984/rcs/abc"
        );
        assert_eq!(
            store.doc_url("a/b c").unwrap().as_str(),
            "http://localhost:5984/rcs/a%2Fb%20c"
        );
    }

    #[test]
    fn test_doc_url_with_trailing_slash() {
        let store = CouchStore::new("http://localhost:5984/rcs/").unwrap();
        assert_eq!(
            store.doc_url("abc").unwrap().as_str(),
            "http://localhost:5984/rcs/abc"
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(matches!(CouchStore::new("not a url"), Err(StoreError::Config(_))));
        assert!(matches!(CouchStore::new("mailto:x@y"), Err(StoreError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let store = CouchStore::new("http://127.0.0.1:9/rcs").unwrap();
        let err = store.get("abc").await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }
}

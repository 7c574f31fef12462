use anyhow::{Context, Result};
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Collection, Database};
use serde_json::Value as JsonValue;
use std::fmt;

use crate::config::Config;

/// Name of the collection holding course documents.
const COURSES_COLLECTION: &str = "courses";

/// Numeric course id
///
/// Integral ids address stored courses. Any other finite number is still a
/// legal lookup key; it matches no stored course, since the store only
/// holds integer ids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CourseId {
    Int(i64),
    Float(f64),
}

impl CourseId {
    fn to_bson(self) -> Bson {
        match self {
            CourseId::Int(id) => Bson::Int64(id),
            CourseId::Float(id) => Bson::Double(id),
        }
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        CourseId::Int(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Int(id) => write!(f, "{}", id),
            CourseId::Float(id) => write!(f, "{}", id),
        }
    }
}

/// Shareable MongoDB-backed store for course documents
///
/// Cloning is cheap; the underlying driver client manages its own
/// connection pool, shared by every clone.
#[derive(Clone)]
pub struct CourseStore {
    client: Client,
    db: Database,
}

impl CourseStore {
    /// Create a new store from configuration
    ///
    /// The driver connects lazily: this validates the URI and sets up the
    /// pool, and the first operation surfaces any connectivity failure.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("Failed to create MongoDB client")?;
        let db = client.database(&config.mongodb_database);

        tracing::info!(
            "MongoDB client ready for database: {}",
            config.mongodb_database
        );

        Ok(Self { client, db })
    }

    pub(crate) fn courses(&self) -> Collection<Document> {
        self.db.collection(COURSES_COLLECTION)
    }

    /// Look up a single course by its numeric `id` field
    ///
    /// # Returns
    /// * `Ok(Some(document))` - Course found, rendered as relaxed extended
    ///   JSON (internal `_id` included)
    /// * `Ok(None)` - No course with that id
    /// * `Err(_)` - Store operation failed
    pub async fn find_course(&self, id: impl Into<CourseId>) -> Result<Option<JsonValue>> {
        let id = id.into();
        let found = self
            .courses()
            .find_one(doc! { "id": id.to_bson() }, None)
            .await
            .context("Failed to query course from MongoDB")?;

        match found {
            Some(document) => {
                tracing::debug!("Found course with id: {}", id);
                let mut course = Bson::Document(document).into_relaxed_extjson();
                flatten_object_id(&mut course);
                Ok(Some(course))
            }
            None => {
                tracing::debug!("Course not found with id: {}", id);
                Ok(None)
            }
        }
    }

    /// Merge-update a single course by its numeric `id` field
    ///
    /// Applies a `$set` of the supplied fields: fields present in `fields`
    /// are overwritten, fields absent from it are left untouched.
    ///
    /// # Returns
    /// * `Ok(true)` - Exactly one course matched and was updated
    /// * `Ok(false)` - No course with that id
    pub async fn update_course(&self, id: impl Into<CourseId>, fields: Document) -> Result<bool> {
        let id = id.into();
        let result = self
            .courses()
            .update_one(doc! { "id": id.to_bson() }, doc! { "$set": fields }, None)
            .await
            .context("Failed to update course in MongoDB")?;

        tracing::debug!(
            "Update for course id {} matched {} document(s)",
            id,
            result.matched_count
        );
        Ok(result.matched_count > 0)
    }

    /// Delete a single course by its numeric `id` field
    ///
    /// # Returns
    /// * `Ok(true)` - Exactly one course was deleted
    /// * `Ok(false)` - No course with that id
    pub async fn delete_course(&self, id: impl Into<CourseId>) -> Result<bool> {
        let id = id.into();
        let result = self
            .courses()
            .delete_one(doc! { "id": id.to_bson() }, None)
            .await
            .context("Failed to delete course from MongoDB")?;

        tracing::debug!(
            "Delete for course id {} removed {} document(s)",
            id,
            result.deleted_count
        );
        Ok(result.deleted_count > 0)
    }

    /// Verify store connectivity with a lightweight `ping` command
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("Failed to ping MongoDB")?;
        Ok(())
    }
}

/// Render the store-assigned `_id` as a plain hex string rather than the
/// extended-JSON `{"$oid": ...}` wrapper.
fn flatten_object_id(course: &mut JsonValue) {
    let Some(obj) = course.as_object_mut() else {
        return;
    };
    let oid = obj
        .get("_id")
        .and_then(|v| v.get("$oid"))
        .and_then(JsonValue::as_str)
        .map(String::from);
    if let Some(oid) = oid {
        obj.insert("_id".to_string(), JsonValue::String(oid));
    }
}

/// Convert an arbitrary JSON body into a BSON update document
///
/// Fails for anything that is not a JSON object (arrays, strings, numbers),
/// since only an object can describe a field-level merge.
pub fn document_from_json(value: &JsonValue) -> Result<Document> {
    mongodb::bson::to_document(value).context("Update body must be a JSON object")
}

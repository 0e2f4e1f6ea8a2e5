//! Document store abstraction.
//!
//! The portal's records (appointments, diagnoses, medical records) are
//! independent append-only facts kept in an external document database. This
//! module defines the narrow interface the core needs from such a store —
//! create, query, update — and a filesystem-backed adapter used for local
//! runs and tests. No transactional guarantees are offered or required.

use crate::error::{TriageError, TriageResult};
use serde_json::Value;
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;

/// A stored record together with its store-assigned id.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub value: Value,
}

/// Equality filter over top-level record fields.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`.
    pub fn field_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push((field.to_owned(), value.into()));
        self
    }

    fn matches(&self, value: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| value.get(field) == Some(expected))
    }
}

/// Sort directive for query results.
#[derive(Clone, Debug)]
pub struct Order {
    pub field: String,
    pub descending: bool,
}

impl Order {
    /// Sort descending by `field` (newest first for timestamp fields).
    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            descending: true,
        }
    }

    /// Sort ascending by `field`.
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_owned(),
            descending: false,
        }
    }
}

/// Key/value and query operations the core requires from its record store.
pub trait DocumentStore: Send + Sync {
    /// Store a new record and return its generated id.
    fn create(&self, collection: &str, value: Value) -> TriageResult<String>;

    /// Return the records matching `filter`, sorted per `order` when given.
    fn query(
        &self,
        collection: &str,
        filter: &Filter,
        order: Option<&Order>,
    ) -> TriageResult<Vec<Document>>;

    /// Merge `patch`'s top-level fields into an existing record.
    fn update(&self, collection: &str, id: &str, patch: Value) -> TriageResult<()>;
}

/// Filesystem adapter: one JSON file per record.
///
/// Records live at `<root>/<collection>/<id>.json`. Queries walk the
/// collection directory; unreadable or unparseable files are logged and
/// skipped rather than failing the whole query.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{id}.json"))
    }
}

/// Compare two optional field values for ordering purposes.
///
/// Strings compare lexicographically (RFC 3339 timestamps order correctly),
/// numbers numerically. Missing fields sort first.
fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

impl DocumentStore for FsStore {
    fn create(&self, collection: &str, value: Value) -> TriageResult<String> {
        let dir = self.collection_dir(collection);
        fs::create_dir_all(&dir).map_err(TriageError::StorageDirCreation)?;

        let id = uuid::Uuid::new_v4().simple().to_string();
        let contents =
            serde_json::to_string_pretty(&value).map_err(TriageError::Serialization)?;
        fs::write(self.document_path(collection, &id), contents)
            .map_err(TriageError::FileWrite)?;

        Ok(id)
    }

    fn query(
        &self,
        collection: &str,
        filter: &Filter,
        order: Option<&Order>,
    ) -> TriageResult<Vec<Document>> {
        let dir = self.collection_dir(collection);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            // A collection nothing has written to yet is simply empty.
            Err(_) => return Ok(Vec::new()),
        };

        let mut documents = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable document");
                    continue;
                }
            };
            let value: Value = match serde_json::from_str(&contents) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unparseable document");
                    continue;
                }
            };

            if !filter.matches(&value) {
                continue;
            }

            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default()
                .to_owned();
            documents.push(Document { id, value });
        }

        if let Some(order) = order {
            documents.sort_by(|a, b| {
                let ordering =
                    compare_fields(a.value.get(&order.field), b.value.get(&order.field));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        Ok(documents)
    }

    fn update(&self, collection: &str, id: &str, patch: Value) -> TriageResult<()> {
        let path = self.document_path(collection, id);
        if !path.is_file() {
            return Err(TriageError::DocumentNotFound {
                collection: collection.to_owned(),
                id: id.to_owned(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(TriageError::FileRead)?;
        let mut value: Value =
            serde_json::from_str(&contents).map_err(TriageError::Deserialization)?;

        if let (Some(target), Some(fields)) = (value.as_object_mut(), patch.as_object()) {
            for (key, field_value) in fields {
                target.insert(key.clone(), field_value.clone());
            }
        }

        let contents =
            serde_json::to_string_pretty(&value).map_err(TriageError::Serialization)?;
        fs::write(&path, contents).map_err(TriageError::FileWrite)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FsStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn create_then_query_round_trips() {
        let (_dir, store) = store();
        let id = store
            .create("appointments", json!({"patientId": "p1", "time": "9:00 AM"}))
            .expect("create");

        let documents = store
            .query(
                "appointments",
                &Filter::new().field_eq("patientId", "p1"),
                None,
            )
            .expect("query");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].id, id);
        assert_eq!(documents[0].value["time"], "9:00 AM");
    }

    #[test]
    fn query_on_missing_collection_is_empty() {
        let (_dir, store) = store();
        let documents = store
            .query("nothing", &Filter::new(), None)
            .expect("query");
        assert!(documents.is_empty());
    }

    #[test]
    fn filter_excludes_non_matching_records() {
        let (_dir, store) = store();
        store
            .create("diagnoses", json!({"patientId": "p1", "status": "pending"}))
            .expect("create");
        store
            .create("diagnoses", json!({"patientId": "p2", "status": "pending"}))
            .expect("create");

        let documents = store
            .query(
                "diagnoses",
                &Filter::new().field_eq("patientId", "p2"),
                None,
            )
            .expect("query");
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].value["patientId"], "p2");
    }

    #[test]
    fn ordering_sorts_by_timestamp_field() {
        let (_dir, store) = store();
        store
            .create("records", json!({"createdAt": "2026-01-02T00:00:00Z", "n": 2}))
            .expect("create");
        store
            .create("records", json!({"createdAt": "2026-01-03T00:00:00Z", "n": 3}))
            .expect("create");
        store
            .create("records", json!({"createdAt": "2026-01-01T00:00:00Z", "n": 1}))
            .expect("create");

        let newest_first = store
            .query("records", &Filter::new(), Some(&Order::desc("createdAt")))
            .expect("query");
        let ns: Vec<i64> = newest_first
            .iter()
            .map(|doc| doc.value["n"].as_i64().expect("n"))
            .collect();
        assert_eq!(ns, vec![3, 2, 1]);
    }

    #[test]
    fn update_merges_fields_into_existing_record() {
        let (_dir, store) = store();
        let id = store
            .create("diagnoses", json!({"status": "pending", "confidence": 88}))
            .expect("create");

        store
            .update(
                "diagnoses",
                &id,
                json!({"status": "confirmed", "doctorNotes": "verified by smear"}),
            )
            .expect("update");

        let documents = store
            .query("diagnoses", &Filter::new(), None)
            .expect("query");
        assert_eq!(documents[0].value["status"], "confirmed");
        assert_eq!(documents[0].value["doctorNotes"], "verified by smear");
        assert_eq!(documents[0].value["confidence"], 88);
    }

    #[test]
    fn update_of_unknown_id_fails() {
        let (_dir, store) = store();
        store
            .create("diagnoses", json!({"status": "pending"}))
            .expect("create");
        let err = store
            .update("diagnoses", "missing", json!({"status": "confirmed"}))
            .expect_err("unknown id");
        assert!(matches!(err, TriageError::DocumentNotFound { .. }));
    }

    #[test]
    fn unparseable_documents_are_skipped() {
        let (dir, store) = store();
        store
            .create("records", json!({"ok": true}))
            .expect("create");
        std::fs::write(dir.path().join("records/broken.json"), "{not json")
            .expect("write broken file");

        let documents = store
            .query("records", &Filter::new(), None)
            .expect("query");
        assert_eq!(documents.len(), 1);
    }
}

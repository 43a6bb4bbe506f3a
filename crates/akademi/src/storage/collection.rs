//! A JSON array of records backed by a single file.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::ids::next_id;
use super::{read_json, write_json};
use crate::content::{Resource, UpdateMode};
use crate::error::{Error, Result};

/// A collection of `T` stored as one JSON array.
///
/// Every mutation loads the whole array, changes it in memory and writes the
/// whole array back. Mutations on the same collection are serialised by an
/// in-process lock; nothing coordinates separate processes.
#[derive(Debug)]
pub struct JsonCollection<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Resource> JsonCollection<T> {
    /// Create a collection backed by the file at `path`.
    ///
    /// The file is not touched until the first read or write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the backing file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load every record.
    ///
    /// A missing file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn list(&self) -> Result<Vec<T>> {
        let _guard = self.guard();
        self.load()
    }

    /// Find a record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|r| r.id() == id))
    }

    /// Count the records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Append a new record.
    ///
    /// Any id carried by `draft` is discarded and a fresh one assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is rejected by [`Resource::normalize`]
    /// or the file cannot be read or written.
    pub fn create(&self, mut draft: T) -> Result<T> {
        let _guard = self.guard();
        let mut records = self.load()?;

        let id = next_id(T::ID_STRATEGY, records.iter().map(T::id));
        draft.set_id(id);
        draft.normalize()?;

        records.push(draft.clone());
        write_json(&self.path, &records)?;

        info!("Created {} {}", T::LABEL, draft.id());
        Ok(draft)
    }

    /// Apply a PUT body to the record whose id it carries.
    ///
    /// With [`UpdateMode::Merge`] the body's fields overwrite the stored
    /// record's; with [`UpdateMode::Replace`] the body must be a complete
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] if the body has no string `id`,
    /// [`Error::NotFound`] if no record has that id, [`Error::InvalidInput`]
    /// if the result is not a valid record, or an I/O error.
    pub fn update(&self, patch: Map<String, Value>) -> Result<T> {
        let id = patch
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .ok_or(Error::MissingId("ID required"))?;

        let _guard = self.guard();
        let mut records = self.load()?;
        let index = Self::position(&records, &id)?;

        let mut record = match T::UPDATE_MODE {
            UpdateMode::Merge => merge(&records[index], patch)?,
            UpdateMode::Replace => from_object(patch)?,
        };
        record.set_id(id);
        record.normalize()?;

        records[index] = record.clone();
        write_json(&self.path, &records)?;

        info!("Updated {} {}", T::LABEL, record.id());
        Ok(record)
    }

    /// Replace the record with the same id as `record`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingId`] if `record` has an empty id,
    /// [`Error::NotFound`] if no record has that id, or an I/O error.
    pub fn replace(&self, mut record: T) -> Result<T> {
        if record.id().is_empty() {
            return Err(Error::MissingId("ID required"));
        }
        record.normalize()?;

        let _guard = self.guard();
        let mut records = self.load()?;
        let index = Self::position(&records, record.id())?;

        records[index] = record.clone();
        write_json(&self.path, &records)?;

        info!("Replaced {} {}", T::LABEL, record.id());
        Ok(record)
    }

    /// Remove the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has that id, or an I/O error.
    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.guard();
        let mut records = self.load()?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(Error::not_found(T::LABEL, id));
        }

        write_json(&self.path, &records)?;
        info!("Deleted {} {}", T::LABEL, id);
        Ok(())
    }

    /// Overwrite the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn replace_all(&self, records: &[T]) -> Result<()> {
        let _guard = self.guard();
        write_json(&self.path, records)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Result<Vec<T>> {
        let records: Vec<T> = read_json(&self.path)?.unwrap_or_default();
        debug!("Loaded {} {} from {}", records.len(), T::PLURAL, self.path.display());
        Ok(records)
    }

    fn position(records: &[T], id: &str) -> Result<usize> {
        records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(T::LABEL, id))
    }
}

/// Overlay the fields of `patch` on the serialised form of `stored`.
fn merge<T: Resource>(stored: &T, patch: Map<String, Value>) -> Result<T> {
    let Value::Object(mut base) = serde_json::to_value(stored)? else {
        return Err(Error::internal(format!("{} is not a JSON object", T::LABEL)));
    };
    base.extend(patch);
    from_object(base)
}

fn from_object<T: Resource>(object: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(object)).map_err(|e| Error::invalid_input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Faq, LinkedInContent, Training};
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn faq(question: &str) -> Faq {
        Faq {
            id: String::new(),
            question: question.to_string(),
            answer: "Cevap".to_string(),
        }
    }

    fn training(title: &str, features: &[&str]) -> Training {
        Training {
            id: String::new(),
            title: title.to_string(),
            description: "Açıklama".to_string(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
            duration: "12 Saat".to_string(),
            icon_color: "green".to_string(),
        }
    }

    fn linkedin(title: &str) -> LinkedInContent {
        LinkedInContent {
            id: String::new(),
            title: title.to_string(),
            description: "Video".to_string(),
            url: "https://www.linkedin.com/posts/x_activity-100-y".to_string(),
            embed_url: String::new(),
            thumbnail: None,
        }
    }

    fn create_test_collection<T: Resource>(dir: &tempfile::TempDir) -> JsonCollection<T> {
        JsonCollection::open(dir.path().join(T::FILE_NAME))
    }

    #[test]
    fn test_list_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);

        assert!(!faqs.exists());
        assert!(faqs.list().unwrap().is_empty());
        assert_eq!(faqs.count().unwrap(), 0);
    }

    #[test]
    fn test_create_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);

        let created = faqs.create(faq("Süre ne kadar?")).unwrap();
        assert!(!created.id.is_empty());

        let all = faqs.list().unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(faqs.get(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn test_create_ignores_supplied_id() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);

        let mut draft = faq("Q");
        draft.id = "client-chosen".to_string();
        let created = faqs.create(draft).unwrap();
        assert_ne!(created.id, "client-chosen");
    }

    #[test]
    fn test_create_assigns_unique_timestamp_ids() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);

        let ids: Vec<String> = (0..5)
            .map(|i| faqs.create(faq(&format!("Q{i}"))).unwrap().id)
            .collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let contents = create_test_collection::<LinkedInContent>(&dir);

        assert_eq!(contents.create(linkedin("a")).unwrap().id, "1");
        assert_eq!(contents.create(linkedin("b")).unwrap().id, "2");
        contents.delete("1").unwrap();
        assert_eq!(contents.create(linkedin("c")).unwrap().id, "3");
    }

    #[test]
    fn test_create_filters_blank_features() {
        let dir = tempfile::tempdir().unwrap();
        let trainings = create_test_collection::<Training>(&dir);

        let created = trainings
            .create(training("Liderlik", &["Takım Yönetimi", "", "  "]))
            .unwrap();
        assert_eq!(created.features, vec!["Takım Yönetimi"]);

        let stored = trainings.get(&created.id).unwrap().unwrap();
        assert_eq!(stored.features, vec!["Takım Yönetimi"]);
    }

    #[test]
    fn test_create_rejected_record_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let contents = create_test_collection::<LinkedInContent>(&dir);

        let mut draft = linkedin("no embed");
        draft.url = "https://example.com".to_string();
        assert!(contents.create(draft).unwrap_err().is_client_error());
        assert!(!contents.exists());
    }

    #[test]
    fn test_update_merges_partial_body() {
        let dir = tempfile::tempdir().unwrap();
        let trainings = create_test_collection::<Training>(&dir);
        let created = trainings.create(training("Eski", &["A"])).unwrap();

        let updated = trainings
            .update(object(json!({ "id": created.id, "title": "Yeni", "features": ["B", ""] })))
            .unwrap();
        assert_eq!(updated.title, "Yeni");
        assert_eq!(updated.features, vec!["B"]);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.icon_color, created.icon_color);

        assert_eq!(trainings.get(&created.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_update_replace_mode_requires_full_record() {
        let dir = tempfile::tempdir().unwrap();
        let contents = create_test_collection::<LinkedInContent>(&dir);
        let created = contents.create(linkedin("a")).unwrap();

        let err = contents
            .update(object(json!({ "id": created.id, "title": "only title" })))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let updated = contents
            .update(object(json!({
                "id": created.id,
                "title": "b",
                "description": "d",
                "url": "https://www.linkedin.com/posts/x_activity-200-y",
                "embedUrl": ""
            })))
            .unwrap();
        assert_eq!(updated.title, "b");
        assert!(updated.embed_url.ends_with("activity:200"));
    }

    #[test]
    fn test_update_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        faqs.create(faq("Q")).unwrap();

        let err = faqs.update(object(json!({ "id": "nope", "answer": "x" }))).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_without_id() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);

        let err = faqs.update(object(json!({ "answer": "x" }))).unwrap_err();
        assert!(matches!(err, Error::MissingId(_)));

        let err = faqs.update(object(json!({ "id": 5, "answer": "x" }))).unwrap_err();
        assert!(matches!(err, Error::MissingId(_)));
    }

    #[test]
    fn test_update_keeps_id_from_body() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        let created = faqs.create(faq("Q")).unwrap();

        let updated = faqs
            .update(object(json!({ "id": created.id, "question": "Q2" })))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(faqs.count().unwrap(), 1);
    }

    #[test]
    fn test_replace() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        let mut created = faqs.create(faq("Q")).unwrap();

        created.answer = "Yeni cevap".to_string();
        faqs.replace(created.clone()).unwrap();
        assert_eq!(faqs.get(&created.id).unwrap(), Some(created));

        assert!(faqs.replace(faq("no id")).is_err());
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        let keep = faqs.create(faq("keep")).unwrap();
        let gone = faqs.create(faq("gone")).unwrap();

        faqs.delete(&gone.id).unwrap();
        assert_eq!(faqs.list().unwrap(), vec![keep]);
        assert!(faqs.get(&gone.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_unknown_id_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        faqs.create(faq("Q")).unwrap();
        let before = std::fs::read_to_string(faqs.path()).unwrap();

        assert!(faqs.delete("missing").unwrap_err().is_not_found());
        assert_eq!(std::fs::read_to_string(faqs.path()).unwrap(), before);
    }

    #[test]
    fn test_corrupt_file_is_an_error_and_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        std::fs::write(faqs.path(), "{ broken").unwrap();

        assert!(matches!(faqs.list().unwrap_err(), Error::Parse { .. }));
        assert!(faqs.create(faq("Q")).is_err());
        assert_eq!(std::fs::read_to_string(faqs.path()).unwrap(), "{ broken");
    }

    #[test]
    fn test_file_format_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let trainings = create_test_collection::<Training>(&dir);
        trainings.create(training("T", &["x"])).unwrap();

        let raw = std::fs::read_to_string(trainings.path()).unwrap();
        assert!(raw.contains("\"iconColor\": \"green\""));
        assert!(raw.starts_with("[\n  {"));
    }

    #[test]
    fn test_replace_all() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = create_test_collection::<Faq>(&dir);
        let mut first = faq("one");
        first.id = "1".to_string();

        faqs.replace_all(&[first.clone()]).unwrap();
        assert_eq!(faqs.list().unwrap(), vec![first]);
    }

    #[test]
    fn test_concurrent_creates_do_not_lose_updates() {
        let dir = tempfile::tempdir().unwrap();
        let faqs = std::sync::Arc::new(create_test_collection::<Faq>(&dir));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let faqs = std::sync::Arc::clone(&faqs);
                std::thread::spawn(move || faqs.create(faq(&format!("Q{i}"))).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(faqs.count().unwrap(), 8);
    }
}

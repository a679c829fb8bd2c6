use super::collection::Collection;
use super::error::StoreError;
use super::filter::FilterSet;
use super::update::UpdateDocument;
use crate::document::{Attributes, Document, DocumentLocation};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`Collection`] backed by a vector of documents.
///
/// Reference implementation used by the test suite and by embedders that do
/// not need durable storage. Supports root and embedded addressing; embedded
/// positional paths are dot-separated, with numeric segments indexing into
/// arrays (`comments.2`).
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, assigning a fresh uuid when its id is null.
    /// Returns the id under which the document was stored.
    pub async fn insert(&self, mut document: Document) -> Value {
        if document.id.is_null() {
            document.id = Value::String(Uuid::new_v4().to_string());
        }
        let id = document.id.clone();
        self.documents.write().await.push(document);
        id
    }

    /// Number of stored top-level documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the collection holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

fn split_head(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (path, None),
    }
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|idx| items.get(idx)),
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(move |idx| items.get_mut(idx)),
        Value::Object(map) => map.get_mut(segment),
        _ => None,
    }
}

fn value_at<'a>(attributes: &'a Attributes, path: &str) -> Option<&'a Value> {
    let (first, rest) = split_head(path);
    let mut current = attributes.get(first)?;
    if let Some(rest) = rest {
        for segment in rest.split('.') {
            current = step(current, segment)?;
        }
    }
    Some(current)
}

fn value_at_mut<'a>(attributes: &'a mut Attributes, path: &str) -> Option<&'a mut Value> {
    let (first, rest) = split_head(path);
    let mut current = attributes.get_mut(first)?;
    if let Some(rest) = rest {
        for segment in rest.split('.') {
            current = step_mut(current, segment)?;
        }
    }
    Some(current)
}

fn subdocument<'a>(attributes: &'a Attributes, path: &str) -> Option<&'a Attributes> {
    match value_at(attributes, path) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn subdocument_mut<'a>(attributes: &'a mut Attributes, path: &str) -> Option<&'a mut Attributes> {
    match value_at_mut(attributes, path) {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn remove_at(attributes: &mut Attributes, path: &str) -> Result<(), StoreError> {
    match path.rsplit_once('.') {
        None => attributes
            .remove(path)
            .map(|_removed| ())
            .ok_or_else(|| StoreError::invalid_path(path)),
        Some((parent, last)) => {
            let container =
                value_at_mut(attributes, parent).ok_or_else(|| StoreError::invalid_path(path))?;
            match container {
                Value::Array(items) => {
                    let index = last
                        .parse::<usize>()
                        .ok()
                        .filter(|index| *index < items.len())
                        .ok_or_else(|| StoreError::invalid_path(path))?;
                    items.remove(index);
                    Ok(())
                }
                Value::Object(map) => map
                    .remove(last)
                    .map(|_removed| ())
                    .ok_or_else(|| StoreError::invalid_path(path)),
                _ => Err(StoreError::invalid_path(path)),
            }
        }
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    async fn find_one(
        &self,
        location: &DocumentLocation,
        filter: &FilterSet,
    ) -> Result<Option<Attributes>, StoreError> {
        let documents = self.documents.read().await;
        let Some(document) = documents.iter().find(|d| d.id == *location.root_id()) else {
            return Ok(None);
        };
        let attributes = match location {
            DocumentLocation::Root { .. } => &document.attributes,
            DocumentLocation::Embedded { path, .. } => {
                match subdocument(&document.attributes, path) {
                    Some(map) => map,
                    None => return Ok(None),
                }
            }
        };
        if filter.matches(attributes) {
            Ok(Some(attributes.clone()))
        } else {
            Ok(None)
        }
    }

    async fn list(&self, filter: &FilterSet) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|d| filter.matches(&d.attributes))
            .cloned()
            .collect())
    }

    async fn update_one(
        &self,
        location: &DocumentLocation,
        update: &UpdateDocument,
    ) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .iter_mut()
            .find(|d| d.id == *location.root_id())
            .ok_or_else(|| StoreError::not_found(location.root_id().to_string()))?;
        let target = match location {
            DocumentLocation::Root { .. } => &mut document.attributes,
            DocumentLocation::Embedded { path, .. } => {
                subdocument_mut(&mut document.attributes, path)
                    .ok_or_else(|| StoreError::invalid_path(path.clone()))?
            }
        };
        for (field, value) in update.sets() {
            target.insert(field.clone(), value.clone());
        }
        for field in update.unsets() {
            target.remove(field);
        }
        Ok(())
    }

    async fn delete_one(&self, location: &DocumentLocation) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        match location {
            DocumentLocation::Root { id } => {
                let index = documents
                    .iter()
                    .position(|d| d.id == *id)
                    .ok_or_else(|| StoreError::not_found(id.to_string()))?;
                documents.remove(index);
                Ok(())
            }
            DocumentLocation::Embedded { root_id, path } => {
                let document = documents
                    .iter_mut()
                    .find(|d| d.id == *root_id)
                    .ok_or_else(|| StoreError::not_found(root_id.to_string()))?;
                remove_at(&mut document.attributes, path)
            }
        }
    }
}

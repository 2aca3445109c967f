//! DynamoDB [`NoteStore`] backend.
//!
//! Notes live in a single table keyed by the `notesId` partition-key
//! attribute. Every mutation carries a condition expression over that
//! attribute, so existence checks are evaluated atomically by DynamoDB
//! itself; a failed predicate comes back as a
//! `ConditionalCheckFailedException` and is classified into the matching
//! [`NoteStoreError`] variant. Retry and timeout policy live in the shared
//! SDK config (see [`GatewayConfig`](crate::GatewayConfig)) — nothing here
//! retries on its own.

use crate::{GatewayConfig, Note, NoteContent, NoteStore, NoteStoreError, Result, ScanPage};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::DisplayErrorContext,
    operation::{
        delete_item::DeleteItemError, put_item::PutItemError, update_item::UpdateItemError,
    },
    types::AttributeValue,
    Client,
};
use serde::{Deserialize, Serialize};
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};

/// The partition-key attribute name.
const KEY_ATTRIBUTE: &str = "notesId";

const KEY_ABSENT: &str = "attribute_not_exists(notesId)";
const KEY_EXISTS: &str = "attribute_exists(notesId)";

/// Stored shape of a [`Note`]. The wire field `id` maps to the `notesId`
/// partition-key attribute.
#[derive(Debug, Serialize, Deserialize)]
struct NoteItem {
    #[serde(rename = "notesId")]
    notes_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    body: String,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            notes_id: note.id,
            title: note.title,
            body: note.body,
        }
    }
}

impl From<NoteItem> for Note {
    fn from(item: NoteItem) -> Self {
        Self {
            id: item.notes_id,
            title: item.title,
            body: item.body,
        }
    }
}

fn store_error<E: std::error::Error>(err: E) -> NoteStoreError {
    NoteStoreError::Store(DisplayErrorContext(err).to_string())
}

fn item_error(err: serde_dynamo::Error) -> NoteStoreError {
    NoteStoreError::Serialization(err.to_string())
}

/// A notes table in DynamoDB.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the shared SDK client from `config` and binds it to the
    /// configured table. Call once at process start; the client is cheap to
    /// clone and safe to share across invocations.
    pub async fn from_config(config: &GatewayConfig) -> Self {
        let sdk_config = config.load_aws_config().await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl NoteStore for DynamoStore {
    async fn put_new(&self, note: Note) -> Result<()> {
        let id = note.id.clone();
        let item = to_item(NoteItem::from(note)).map_err(item_error)?;

        match self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression(KEY_ABSENT)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                if matches!(
                    err.as_service_error(),
                    Some(PutItemError::ConditionalCheckFailedException(_))
                ) {
                    Err(NoteStoreError::Conflict(id))
                } else {
                    Err(store_error(err))
                }
            }
        }
    }

    async fn replace(&self, id: &str, content: NoteContent) -> Result<()> {
        match self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .update_expression("SET #title = :title, #body = :body")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#body", "body")
            .expression_attribute_values(":title", AttributeValue::S(content.title))
            .expression_attribute_values(":body", AttributeValue::S(content.body))
            .condition_expression(KEY_EXISTS)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                if matches!(
                    err.as_service_error(),
                    Some(UpdateItemError::ConditionalCheckFailedException(_))
                ) {
                    Err(NoteStoreError::NotFound(id.to_string()))
                } else {
                    Err(store_error(err))
                }
            }
        }
    }

    async fn remove(&self, id: &str) -> Result<()> {
        match self
            .client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .condition_expression(KEY_EXISTS)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                if matches!(
                    err.as_service_error(),
                    Some(DeleteItemError::ConditionalCheckFailedException(_))
                ) {
                    Err(NoteStoreError::NotFound(id.to_string()))
                } else {
                    Err(store_error(err))
                }
            }
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Note>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(store_error)?;

        match output.item {
            Some(item) => {
                let item: NoteItem = from_item(item).map_err(item_error)?;
                Ok(Some(item.into()))
            }
            None => Ok(None),
        }
    }

    async fn scan(&self, limit: Option<usize>) -> Result<ScanPage> {
        let mut items: Vec<Note> = Vec::new();
        let mut truncated = false;
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(store_error)?;

            let page: Vec<NoteItem> = from_items(output.items().to_vec()).map_err(item_error)?;
            for item in page {
                if limit.is_some_and(|limit| items.len() >= limit) {
                    truncated = true;
                    break;
                }
                items.push(item.into());
            }
            if truncated {
                break;
            }

            match output.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }

        let count = items.len();
        Ok(ScanPage {
            items,
            count,
            truncated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "n1".to_string(),
            title: "A".to_string(),
            body: "x".to_string(),
        }
    }

    #[test]
    fn test_item_uses_the_partition_key_attribute() {
        let item = to_item(NoteItem::from(note())).unwrap();
        assert!(matches!(
            item.get(KEY_ATTRIBUTE),
            Some(AttributeValue::S(id)) if id == "n1"
        ));
        assert!(item.get("id").is_none());
    }

    #[test]
    fn test_item_round_trips_back_to_note() {
        let item = to_item(NoteItem::from(note())).unwrap();
        let back: NoteItem = from_item(item).unwrap();
        assert_eq!(Note::from(back), note());
    }

    #[test]
    fn test_item_tolerates_missing_content_attributes() {
        let mut item = to_item(NoteItem::from(note())).unwrap();
        item.remove("title");
        item.remove("body");

        let back: NoteItem = from_item(item).unwrap();
        let note = Note::from(back);
        assert_eq!(note.id, "n1");
        assert!(note.title.is_empty());
        assert!(note.body.is_empty());
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A todo item as stored by the remote API.
///
/// Identity is by `id`, which the server assigns and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawItem")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the title and description as an update body.
    pub fn draft(&self) -> ItemDraft {
        ItemDraft::new(self.title.clone(), self.description.clone())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.description)
    }
}

/// Wire shape of an item. Mongo-style backends send `_id`, some also send
/// a virtual `id` next to it; `_id` wins when both are present.
#[derive(Deserialize)]
struct RawItem {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_id")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_id")]
    id: Option<String>,
    title: String,
    description: String,
}

impl TryFrom<RawItem> for Item {
    type Error = String;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .or(raw.id)
            .ok_or_else(|| "missing field `_id` or `id`".to_string())?;

        Ok(Self {
            id,
            title: raw.title,
            description: raw.description,
        })
    }
}

/// Accepts both `"abc"` and `42` for the identifier.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Some(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

/// Request body for create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// True when neither field is blank. Whitespace-only counts as blank.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Pending edits for a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl EditSession {
    /// Opens a session seeded with the item's current values.
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        }
    }

    pub fn draft(&self) -> ItemDraft {
        ItemDraft::new(self.title.clone(), self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_mongo_style_json() {
        let item: Item = serde_json::from_str(
            r#"{"_id":"65f0c1","title":"Buy milk","description":"2 litres","__v":0}"#,
        )
        .unwrap();

        assert_eq!(item.id, "65f0c1");
        assert_eq!(item.title, "Buy milk");
        assert_eq!(item.description, "2 litres");
    }

    #[test]
    fn test_item_numeric_id() {
        let item: Item =
            serde_json::from_str(r#"{"id":2,"title":"B","description":"b"}"#).unwrap();
        assert_eq!(item, Item::new("2", "B", "b"));
    }

    #[test]
    fn test_item_with_both_id_fields_prefers_mongo_id() {
        let item: Item = serde_json::from_str(
            r#"{"_id":"65f0c1","id":"65f0c1","title":"T","description":"D","__v":0}"#,
        )
        .unwrap();
        assert_eq!(item, Item::new("65f0c1", "T", "D"));

        let item: Item =
            serde_json::from_str(r#"{"id":"virtual","_id":"real","title":"T","description":"D"}"#)
                .unwrap();
        assert_eq!(item.id, "real");
    }

    #[test]
    fn test_item_without_id_is_rejected() {
        let result = serde_json::from_str::<Item>(r#"{"title":"T","description":"D"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_serializes_plain_id() {
        let json = serde_json::to_value(Item::new("7", "T", "D")).unwrap();
        assert_eq!(json["id"], "7");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_item_missing_title_is_rejected() {
        let result = serde_json::from_str::<Item>(r#"{"id":"1","description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_draft_is_complete() {
        assert!(ItemDraft::new("a", "b").is_complete());
        assert!(!ItemDraft::new("", "b").is_complete());
        assert!(!ItemDraft::new("a", "").is_complete());
        assert!(!ItemDraft::new("   ", "b").is_complete());
        assert!(!ItemDraft::new("a", "\t\n").is_complete());
    }

    #[test]
    fn test_draft_keeps_untrimmed_values() {
        let json = serde_json::to_string(&ItemDraft::new(" a ", "b")).unwrap();
        assert_eq!(json, r#"{"title":" a ","description":"b"}"#);
    }

    #[test]
    fn test_edit_session_seeded_from_item() {
        let item = Item::new("1", "A", "a");
        let session = EditSession::for_item(&item);

        assert_eq!(session.id, "1");
        assert_eq!(session.draft(), item.draft());
    }
}

//! Wire types for the pet-store API

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Well-known pet status values
pub mod status {
    pub const AVAILABLE: &str = "available";
    pub const PENDING: &str = "pending";
    pub const SOLD: &str = "sold";
}

/// Identifier of a pet record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub i64);

impl PetId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PetId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A raw `{id}` path segment.
///
/// Not required to be numeric: negative-path fixtures wrap overlong or
/// alphanumeric garbage here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetIdParam(String);

impl PetIdParam {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PetId> for PetIdParam {
    fn from(id: PetId) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PetIdParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tag or category sub-record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Which shape the pet record uses for its category field.
///
/// The API moved from a `categories` list to a single `category` object;
/// both are kept so either server generation can be exercised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaRevision {
    /// `"categories": [Tag, ...]`
    CategoryList,
    /// `"category": Tag`
    #[default]
    SingleCategory,
}

impl SchemaRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaRevision::CategoryList => "category-list",
            SchemaRevision::SingleCategory => "single-category",
        }
    }
}

impl fmt::Display for SchemaRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaRevision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category-list" | "list" => Ok(SchemaRevision::CategoryList),
            "single-category" | "single" => Ok(SchemaRevision::SingleCategory),
            other => Err(format!(
                "unknown schema revision '{}' (expected category-list or single-category)",
                other
            )),
        }
    }
}

/// Category payload, keyed by the schema revision that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Categories {
    /// Sent as `"categories"`
    List(Vec<Tag>),
    /// Sent as `"category"`
    Single(Tag),
}

impl Categories {
    pub fn revision(&self) -> SchemaRevision {
        match self {
            Categories::List(_) => SchemaRevision::CategoryList,
            Categories::Single(_) => SchemaRevision::SingleCategory,
        }
    }
}

/// Pet record as sent to and returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PetWire", into = "PetWire")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub tags: Vec<Tag>,
    pub categories: Option<Categories>,
    pub photo_urls: Vec<String>,
}

/// JSON shape of [`Pet`], with both category spellings as plain fields
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PetWire {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<Tag>>,
    #[serde(default)]
    photo_urls: Vec<String>,
}

impl TryFrom<PetWire> for Pet {
    type Error = String;

    fn try_from(wire: PetWire) -> Result<Self, Self::Error> {
        let categories = match (wire.category, wire.categories) {
            (Some(_), Some(_)) => {
                return Err("pet carries both \"category\" and \"categories\"".to_string())
            }
            (Some(single), None) => Some(Categories::Single(single)),
            (None, Some(list)) => Some(Categories::List(list)),
            (None, None) => None,
        };

        Ok(Pet {
            id: wire.id,
            name: wire.name,
            status: wire.status,
            tags: wire.tags,
            categories,
            photo_urls: wire.photo_urls,
        })
    }
}

impl From<Pet> for PetWire {
    fn from(pet: Pet) -> Self {
        let (category, categories) = match pet.categories {
            Some(Categories::Single(single)) => (Some(single), None),
            Some(Categories::List(list)) => (None, Some(list)),
            None => (None, None),
        };

        PetWire {
            id: pet.id,
            name: pet.name,
            status: pet.status,
            tags: pet.tags,
            category,
            categories,
            photo_urls: pet.photo_urls,
        }
    }
}

impl Pet {
    pub fn pet_id(&self) -> PetId {
        PetId(self.id)
    }

    /// Schema revision of the category field, if one is present
    pub fn revision(&self) -> Option<SchemaRevision> {
        self.categories.as_ref().map(Categories::revision)
    }
}

/// Error body returned by the API on failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_category_wire_shape() {
        let pet = Pet {
            id: 4242,
            name: "doggieNiki".to_string(),
            status: status::AVAILABLE.to_string(),
            tags: vec![Tag::new(1, "myTag1")],
            categories: Some(Categories::Single(Tag::new(1, "myCategory1"))),
            photo_urls: vec!["https://example.com/a.png".to_string()],
        };

        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 4242,
                "name": "doggieNiki",
                "status": "available",
                "tags": [{"id": 1, "name": "myTag1"}],
                "category": {"id": 1, "name": "myCategory1"},
                "photoUrls": ["https://example.com/a.png"]
            })
        );
    }

    #[test]
    fn test_category_list_wire_shape() {
        let pet = Pet {
            id: 1,
            categories: Some(Categories::List(vec![
                Tag::new(1, "a"),
                Tag::new(2, "b"),
            ])),
            ..Default::default()
        };

        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(value["categories"], json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]));
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_deserialize_server_response() {
        let body = r#"{
            "id": 9223,
            "category": {"id": 1, "name": "myCategory1"},
            "name": "doggieNiki",
            "photoUrls": ["u1", "u2"],
            "tags": [{"id": 1, "name": "myTag1"}],
            "status": "sold"
        }"#;

        let pet: Pet = serde_json::from_str(body).unwrap();
        assert_eq!(pet.pet_id(), PetId(9223));
        assert_eq!(pet.status, status::SOLD);
        assert_eq!(pet.revision(), Some(SchemaRevision::SingleCategory));
        assert_eq!(pet.photo_urls.len(), 2);
    }

    #[test]
    fn test_deserialize_without_category() {
        let pet: Pet = serde_json::from_str(r#"{"id": 7, "name": "x", "photoUrls": []}"#).unwrap();
        assert_eq!(pet.categories, None);
        assert!(pet.tags.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let result: Result<Pet, _> = serde_json::from_str(r#"{"id": "not-a-number"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_category_is_rejected() {
        let single: Result<Pet, _> =
            serde_json::from_str(r#"{"id": 7, "name": "x", "category": "oops", "photoUrls": []}"#);
        assert!(single.is_err());

        let list: Result<Pet, _> =
            serde_json::from_str(r#"{"id": 7, "categories": {"id": 1, "name": "a"}}"#);
        assert!(list.is_err());
    }

    #[test]
    fn test_both_category_spellings_rejected() {
        let body = r#"{
            "id": 7,
            "category": {"id": 1, "name": "a"},
            "categories": [{"id": 1, "name": "a"}]
        }"#;
        let err = serde_json::from_str::<Pet>(body).unwrap_err();
        assert!(err.to_string().contains("both"), "{}", err);
    }

    #[test]
    fn test_null_category_reads_as_absent() {
        let pet: Pet = serde_json::from_str(r#"{"id": 7, "category": null}"#).unwrap();
        assert_eq!(pet.categories, None);
    }

    #[test]
    fn test_tag_equality() {
        assert_eq!(Tag::new(1, "a"), Tag::new(1, "a"));
        assert_ne!(Tag::new(1, "a"), Tag::new(2, "a"));
        assert_ne!(Tag::new(1, "a"), Tag::new(1, "b"));
    }

    #[test]
    fn test_api_error_type_field() {
        let err: ApiError = serde_json::from_str(
            r#"{"code": 404, "type": "unknown", "message": "For input string: \"12abc\""}"#,
        )
        .unwrap();
        assert_eq!(err.code, 404);
        assert_eq!(err.kind, "unknown");
        assert!(err.message.contains("12abc"));
    }

    #[test]
    fn test_schema_revision_parse() {
        assert_eq!(
            "category-list".parse::<SchemaRevision>().unwrap(),
            SchemaRevision::CategoryList
        );
        assert_eq!("single".parse::<SchemaRevision>().unwrap(), SchemaRevision::SingleCategory);
        assert!("both".parse::<SchemaRevision>().is_err());
    }

    #[test]
    fn test_id_param_from_pet_id() {
        let param = PetIdParam::from(PetId(1234));
        assert_eq!(param.as_str(), "1234");
    }
}

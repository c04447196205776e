//! Wire types for the content-listing endpoint.
//!
//! Only `data[].values.slug.value` matters for slug collection. Everything
//! else is modelled so callers can inspect a page, but every field is optional:
//! missing and `null` values both decode to their defaults, so `"data": null`
//! reads as an empty page.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of content returned by `GET /api/collections/page/content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiResponse {
    /// Whether the API considered the request successful
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,
    /// Content records on this page, in API order
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<ContentItem>,
    /// Response metadata
    pub meta: Option<Meta>,
    /// Pagination as reported by the API
    pub pagination: Option<Pagination>,
}

/// Response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Server timestamp of the response
    pub timestamp: Option<String>,
}

/// Pagination block echoed by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// 1-based page number
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,
    /// Page size the server applied
    #[serde(deserialize_with = "null_as_default")]
    pub per_page: u32,
}

/// A single content entity of the `page` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    /// Content identifier
    pub id: Option<i64>,
    /// Creation timestamp as sent by the API
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the API
    pub updated_at: Option<String>,
    /// Field values of the entity
    #[serde(deserialize_with = "null_as_default")]
    pub values: ContentValues,
}

impl ContentItem {
    /// Raw, un-normalized slug value. Empty when the field is absent.
    pub fn raw_slug(&self) -> &str {
        &self.values.slug.value
    }
}

/// Field values of a page entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentValues {
    /// Path segment identifying the page
    #[serde(deserialize_with = "null_as_default")]
    pub slug: Field,
    /// Human-readable page name
    pub name: Option<Field>,
    /// Content modules referenced by the page
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub modules: Vec<ModuleRef>,
}

/// A typed scalar field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Field identifier
    pub id: Option<i64>,
    /// Field value, `null` decodes as empty
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Field type name, e.g. `"text"`
    pub field_type: Option<String>,
}

/// Reference from a page to a module in another collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleRef {
    /// Field identifier
    pub id: Option<i64>,
    /// Referenced value
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Field type name
    pub field_type: Option<String>,
    /// Collection the module belongs to
    pub collection: Option<CollectionRef>,
}

/// Collection summary embedded in a module reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionRef {
    /// Collection identifier
    pub id: Option<i64>,
    /// Collection name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Collection alias used in API paths
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

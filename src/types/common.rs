//! Shapes shared by every resource: links, paginated lists, datetime encoding

use serde::{Deserialize, Serialize};

/// Layout of datetimes in payloads and query strings
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Relation parameters of a [`Link`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Relation name, e.g. `self`
    #[serde(default)]
    pub rel: String,
}

/// HATEOAS link attached to API resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link parameters
    #[serde(default)]
    pub params: Params,
    /// Target URL
    #[serde(default)]
    pub href: String,
}

/// Paginated list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of matching items
    #[serde(default)]
    pub count: u32,
    /// Number of items skipped
    #[serde(default)]
    pub offset: u32,
    /// Maximum number of items returned
    #[serde(default)]
    pub limit: u32,
    /// Items of this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Navigation links
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl<T> Page<T> {
    /// Whether the page holds no items
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the items of this page
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

/// Serde adapter for optional `YYYY-MM-DDTHH:MM:SS` datetimes
pub(crate) mod optional_datetime {
    use super::DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(datetime) => {
                serializer.serialize_str(&datetime.format(DATETIME_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            Some(text) if !text.is_empty() => NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_tolerates_missing_fields() {
        let page: Page<Link> = serde_json::from_value(json!({ "count": 0 })).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.limit, 0);
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_link_shape() {
        let link: Link = serde_json::from_value(json!({
            "params": { "rel": "self" },
            "href": "https://api.sandbox.hyperwallet.com/rest/v3/users/usr-1"
        }))
        .unwrap();
        assert_eq!(link.params.rel, "self");
        assert!(link.href.ends_with("usr-1"));
    }
}

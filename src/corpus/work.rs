//! Work record type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author name used for records without one.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

fn unknown_author() -> String {
    UNKNOWN_AUTHOR.to_string()
}

/// A single poem: its author and its paragraphs in order.
///
/// Records in the corpus carry more fields (title, id, ...); only these two
/// are used and everything else is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default = "unknown_author")]
    pub author: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

impl Work {
    /// Create a new work.
    pub fn new<A, I, P>(author: A, paragraphs: I) -> Self
    where
        A: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Work {
            author: author.into(),
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a work from a loosely-shaped JSON record.
    ///
    /// Returns `None` when the value is not an object. A missing or
    /// non-string author becomes [`UNKNOWN_AUTHOR`]; a missing paragraph
    /// list becomes empty and non-string paragraphs are dropped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;

        let author = map
            .get("author")
            .and_then(Value::as_str)
            .map_or_else(unknown_author, str::to_string);

        let paragraphs = map
            .get("paragraphs")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some(Work { author, paragraphs })
    }
}

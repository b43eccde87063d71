//! Navigation snapshots and targets exchanged with guards
//!
//! [`RouteContext`] is what the consuming router hands to a guard for both the
//! route being left (`from`) and the route being entered (`to`).
//! [`Location`] is where a guard or a redirect option sends navigation instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of one side of a navigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteContext {
    /// Resolved path, e.g. `/dashboard/home`
    pub path: String,
    /// Route name, if the matched route has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Dynamic segment values
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    /// Query string values
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    /// Metadata of the matched route
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl RouteContext {
    /// Creates a context for a bare path
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteContext;
    ///
    /// let to = RouteContext::new("/dashboard").with_param("id", "7");
    /// assert_eq!(to.path, "/dashboard");
    /// assert_eq!(to.params.get("id").map(String::as_str), Some("7"));
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_meta(mut self, meta: serde_json::Value) -> Self {
        self.meta = meta;
        self
    }
}

/// Navigation target
///
/// Serialized untagged, so a TOML/JSON value of `"/login"` is a
/// [`Location::Path`] and a table with a `name` key is a [`Location::Named`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Location {
    Path(String),
    Named(NamedLocation),
}

/// Target addressed by route name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: BTreeMap<String, String>,
}

impl Location {
    /// Location pointing at a named route without params
    pub fn named(name: impl Into<String>) -> Self {
        Location::Named(NamedLocation {
            name: name.into(),
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        })
    }

    /// Plain path of this location, if it has one
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Location::Path(path) => Some(path),
            Location::Named(_) => None,
        }
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::Path(path.to_string())
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Location::Path(path)
    }
}

impl From<NamedLocation> for Location {
    fn from(named: NamedLocation) -> Self {
        Location::Named(named)
    }
}

//! Inline route options
//!
//! Every key is optional and passed through to the compiled route verbatim.
//! The one key the builder may touch is `before_enter`: when a route has
//! guards and no caller hook, the builder fills it in.

use crate::context::{Location, RouteContext};
use crate::hook::NavigationHook;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Computes view props from the matched route
pub type PropsFn = Arc<dyn Fn(&RouteContext) -> serde_json::Value + Send + Sync>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<Alias>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Props>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_to_regexp_options: Option<PathToRegexpOptions>,

    /// Caller-supplied hook; when set, guards never replace it
    #[serde(skip)]
    pub before_enter: Option<NavigationHook>,
}

/// One alias or several
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alias {
    One(String),
    Many(Vec<String>),
}

impl Alias {
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Alias::One(path) => vec![path.as_str()],
            Alias::Many(paths) => paths.iter().map(String::as_str).collect(),
        }
    }

    /// Appends `other` after these aliases; the result is always a list
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::Alias;
    ///
    /// let alias = Alias::from("/profile").merge(vec!["/a", "/b"].into());
    /// assert_eq!(alias.paths(), vec!["/profile", "/a", "/b"]);
    /// ```
    pub fn merge(self, other: Alias) -> Alias {
        let mut paths = self.into_paths();
        paths.extend(other.into_paths());
        Alias::Many(paths)
    }

    fn into_paths(self) -> Vec<String> {
        match self {
            Alias::One(path) => vec![path],
            Alias::Many(paths) => paths,
        }
    }
}

impl From<&str> for Alias {
    fn from(path: &str) -> Self {
        Alias::One(path.to_string())
    }
}

impl From<String> for Alias {
    fn from(path: String) -> Self {
        Alias::One(path)
    }
}

impl From<Vec<String>> for Alias {
    fn from(paths: Vec<String>) -> Self {
        Alias::Many(paths)
    }
}

impl From<Vec<&str>> for Alias {
    fn from(paths: Vec<&str>) -> Self {
        Alias::Many(paths.into_iter().map(String::from).collect())
    }
}

/// How route params reach the view
///
/// `Function` props only exist in code; serializing them is an error.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Props {
    Enabled(bool),
    Static(serde_json::Map<String, serde_json::Value>),
    #[serde(skip)]
    Function(PropsFn),
}

impl Props {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&RouteContext) -> serde_json::Value + Send + Sync + 'static,
    {
        Props::Function(Arc::new(f))
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Props::Enabled(enabled) => f.debug_tuple("Enabled").field(enabled).finish(),
            Props::Static(map) => f.debug_tuple("Static").field(map).finish(),
            Props::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<bool> for Props {
    fn from(enabled: bool) -> Self {
        Props::Enabled(enabled)
    }
}

/// Options forwarded to the router's path matcher
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathToRegexpOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<bool>,
}

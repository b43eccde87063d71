//! Compiled route value handed to the consuming router

use super::options::RouteOptions;
use super::Views;
use crate::hook::NavigationHook;
use serde::Serialize;

/// One entry of the router's route table
///
/// Produced by `build()`, detached from the builder that made it. Serializes
/// to the router's config shape: `path`, `components`, optional `children`,
/// and every inline option that was set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledRoute {
    pub path: String,

    #[serde(rename = "components")]
    pub views: Views,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CompiledRoute>>,

    #[serde(flatten)]
    pub options: RouteOptions,
}

impl CompiledRoute {
    /// Hook the router should run before entering this route
    pub fn before_enter(&self) -> Option<&NavigationHook> {
        self.options.before_enter.as_ref()
    }

    pub fn children(&self) -> &[CompiledRoute] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Depth-first list of every path in this subtree, this route first
    pub fn paths(&self) -> Vec<&str> {
        let mut paths = vec![self.path.as_str()];
        paths.extend(self.children().iter().flat_map(CompiledRoute::paths));
        paths
    }
}

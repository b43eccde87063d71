//! Route scopes
//!
//! A scope is an ordered list of route nodes and nested scopes sharing a path
//! prefix and a guard list. Scopes come in two flavours:
//!
//! - **root** scopes produce absolute paths (`/dashboard/home`)
//! - **child** scopes produce paths relative to the owning route (`home`)
//!
//! `build` walks the tree top-down, handing every node the chain of scopes
//! above it (outermost first). The node resolves its path right-to-left
//! through that chain and collects guards left-to-right.

use crate::guard::Guard;
use crate::path::join_under_scope;
use crate::route::options::RouteOptions;
use crate::route::{merge_views, Component, CompiledRoute, RouteNode, Views};
use std::fmt;
use std::sync::Arc;

pub mod wrapper;
pub use wrapper::ScopeWrapper;

/// Behaviour shared by everything that can sit in a scope's ancestor chain
///
/// Implemented by [`RouteScope`] and [`ScopeWrapper`]. Building while another
/// thread appends to the same scope is the caller's problem; scopes are only
/// meant to be mutated before `build`.
pub trait Scope: fmt::Debug + Send + Sync {
    /// Number of direct entries
    fn count(&self) -> usize;

    /// Guards this scope contributes to every route beneath it
    fn guards(&self) -> Vec<Guard>;

    /// Resolves a path one level outward through this scope's prefix
    fn resolve_route_path(&self, path: &str) -> String;

    /// Compiles every entry with this scope appended to `ancestors`
    fn build_within(&self, ancestors: &[&dyn Scope]) -> Vec<CompiledRoute>;
}

/// Resolves a raw fragment through an ancestor chain (outermost first)
///
/// The innermost scope is applied first, then each enclosing scope in turn.
pub fn resolve_path(ancestors: &[&dyn Scope], fragment: &str) -> String {
    ancestors
        .iter()
        .rev()
        .fold(fragment.to_string(), |path, scope| scope.resolve_route_path(&path))
}

/// Options for [`RouteScope::group`] and [`RouteScope::group_scope`]
#[derive(Debug, Clone, Default)]
pub struct GroupConfig {
    /// Prefix for every route in the group (default `/`)
    pub prefix: Option<String>,
    /// Guards run before the guards of any route in the group
    pub guards: Vec<Guard>,
}

impl GroupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn guard(mut self, guard: impl Into<Guard>) -> Self {
        self.guards.push(guard.into());
        self
    }

    pub fn guards<I>(mut self, guards: I) -> Self
    where
        I: IntoIterator<Item = Guard>,
    {
        self.guards.extend(guards);
        self
    }

    fn prefix_or_root(&self) -> String {
        self.prefix.clone().unwrap_or_else(|| "/".to_string())
    }
}

#[derive(Debug, Clone)]
enum Entry {
    /// Index into `RouteScope::nodes`
    Node(usize),
    Scope(Arc<dyn Scope>),
}

// ============================================================================
// RouteScope
// ============================================================================

#[derive(Debug, Clone)]
pub struct RouteScope {
    prefix: String,
    guards: Vec<Guard>,
    is_child: bool,
    nodes: Vec<RouteNode>,
    entries: Vec<Entry>,
}

impl RouteScope {
    /// Root scope with prefix `/`
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteScope;
    ///
    /// let mut routes = RouteScope::new();
    /// routes.add("/");
    /// routes.add("about");
    ///
    /// let paths: Vec<_> = routes.build().into_iter().map(|r| r.path).collect();
    /// assert_eq!(paths, vec!["/", "/about"]);
    /// ```
    pub fn new() -> Self {
        Self::with_prefix("/")
    }

    /// Root scope under a base prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            guards: Vec::new(),
            is_child: false,
            nodes: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Root scope from a group config (prefix and guards)
    pub fn with_config(config: GroupConfig) -> Self {
        let mut scope = Self::with_prefix(config.prefix_or_root());
        scope.guards = config.guards;
        scope
    }

    /// Child scope: paths are relative to the owning route
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteScope;
    ///
    /// let mut children = RouteScope::children();
    /// children.add("/");
    /// children.add("//about");
    ///
    /// let paths: Vec<_> = children.build().into_iter().map(|r| r.path).collect();
    /// assert_eq!(paths, vec!["/", "about"]);
    /// ```
    pub fn children() -> Self {
        Self::children_with_prefix("/")
    }

    pub fn children_with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            is_child: true,
            ..Self::with_prefix(prefix)
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_child_scope(&self) -> bool {
        self.is_child
    }

    pub fn own_guards(&self) -> &[Guard] {
        &self.guards
    }

    /// Number of direct entries (routes and nested scopes)
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ========================================================================
    // Declaring routes
    // ========================================================================

    /// Appends a prepared node and returns it for further chaining
    pub fn push(&mut self, node: RouteNode) -> &mut RouteNode {
        let index = self.nodes.len();
        self.nodes.push(node);
        self.entries.push(Entry::Node(index));
        &mut self.nodes[index]
    }

    /// Declares a route without views
    pub fn add(&mut self, path: impl Into<String>) -> &mut RouteNode {
        self.push(RouteNode::new(path))
    }

    /// Declares a route rendering one view in the default slot
    pub fn add_view(&mut self, path: impl Into<String>, view: impl Into<Component>) -> &mut RouteNode {
        self.push(RouteNode::new(path).with_view(view))
    }

    /// Declares a route with named views
    pub fn add_views(&mut self, path: impl Into<String>, views: Views) -> &mut RouteNode {
        self.push(RouteNode::new(path).with_views(views))
    }

    /// Declares a route with every input spelled out
    ///
    /// `view` lands in the `"default"` slot, overriding a `"default"` key in `views`.
    pub fn add_route(
        &mut self,
        path: impl Into<String>,
        view: Option<Component>,
        views: Views,
        options: RouteOptions,
    ) -> &mut RouteNode {
        self.push(
            RouteNode::new(path)
                .with_views(merge_views(view, views))
                .with_options(options),
        )
    }

    /// Declares a nested group
    ///
    /// The group shares this scope's root/child flavour.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::{GroupConfig, RouteScope};
    ///
    /// let mut routes = RouteScope::new();
    /// routes.group(GroupConfig::new().prefix("dashboard"), |dashboard| {
    ///     dashboard.add("home");
    ///     dashboard.add("about");
    /// });
    ///
    /// let paths: Vec<_> = routes.build().into_iter().map(|r| r.path).collect();
    /// assert_eq!(paths, vec!["/dashboard/home", "/dashboard/about"]);
    /// ```
    pub fn group<F>(&mut self, config: GroupConfig, f: F) -> &mut Self
    where
        F: FnOnce(&mut RouteScope),
    {
        let mut scope = RouteScope {
            is_child: self.is_child,
            ..RouteScope::with_config(config)
        };
        f(&mut scope);
        self.entries.push(Entry::Scope(Arc::new(scope)));
        self
    }

    /// Grafts an existing scope under a prefix and extra guards
    ///
    /// The grafted scope is shared, not copied or changed: it can still be
    /// built on its own or grafted elsewhere.
    pub fn group_scope(&mut self, config: GroupConfig, scope: impl Into<Arc<RouteScope>>) -> &mut Self {
        let wrapper = ScopeWrapper::new(scope.into(), config, self.is_child);
        self.entries.push(Entry::Scope(Arc::new(wrapper)));
        self
    }

    /// Adds an existing scope as-is, with its own prefix and guards
    pub fn append(&mut self, scope: impl Into<Arc<RouteScope>>) -> &mut Self {
        let scope: Arc<RouteScope> = scope.into();
        self.entries.push(Entry::Scope(scope));
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Compiles every route in declaration order
    pub fn build(&self) -> Vec<CompiledRoute> {
        self.build_within(&[])
    }

    /// Compiles the entries against a chain that already ends with the
    /// scope standing in for this one
    pub(crate) fn build_entries(&self, chain: &[&dyn Scope]) -> Vec<CompiledRoute> {
        tracing::trace!(prefix = %self.prefix, depth = chain.len(), entries = self.entries.len(), "building scope");

        self.entries
            .iter()
            .flat_map(|entry| match entry {
                Entry::Node(index) => vec![self.nodes[*index].build(chain)],
                Entry::Scope(scope) => scope.build_within(chain),
            })
            .collect()
    }
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope for RouteScope {
    fn count(&self) -> usize {
        self.entries.len()
    }

    fn guards(&self) -> Vec<Guard> {
        self.guards.clone()
    }

    fn resolve_route_path(&self, path: &str) -> String {
        join_under_scope(&self.prefix, path, self.is_child)
    }

    fn build_within(&self, ancestors: &[&dyn Scope]) -> Vec<CompiledRoute> {
        let chain: Vec<&dyn Scope> = ancestors
            .iter()
            .copied()
            .chain(std::iter::once(self as &dyn Scope))
            .collect();
        self.build_entries(&chain)
    }
}

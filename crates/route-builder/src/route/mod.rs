//! Route nodes
//!
//! A [`RouteNode`] is one declared route: its raw path fragment, the views it
//! binds, its inline options, its own guards, and optionally a child scope.
//! Nothing is resolved while the node is being declared; `build` computes the
//! final path and hook from whatever ancestor scopes it is built under.

use crate::context::Location;
use crate::guard::{Guard, GuardChain};
use crate::hook::NavigationHook;
use crate::path::normalize_path;
use crate::scope::{resolve_path, RouteScope, Scope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub mod compiled;
pub mod options;

pub use compiled::CompiledRoute;
pub use options::{Alias, PathToRegexpOptions, Props, RouteOptions};

/// Slot used for a single unnamed view
pub const DEFAULT_VIEW: &str = "default";

/// Opaque view handle
///
/// The builder never looks inside; it only copies handles into compiled routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Component(Arc<str>);

impl Component {
    pub fn new(name: impl AsRef<str>) -> Self {
        Component(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Component {
    fn from(name: &str) -> Self {
        Component::new(name)
    }
}

/// View slot → component
pub type Views = BTreeMap<String, Component>;

/// Merges a default view into a named-view map
///
/// The default view wins over a `"default"` entry already in the map.
pub fn merge_views(view: Option<Component>, views: Views) -> Views {
    let mut merged = views;
    if let Some(view) = view {
        merged.insert(DEFAULT_VIEW.to_string(), view);
    }
    merged
}

// ============================================================================
// RouteNode
// ============================================================================

#[derive(Debug, Clone)]
pub struct RouteNode {
    path: String,
    views: Views,
    options: RouteOptions,
    children: Option<RouteScope>,
    guards: Vec<Guard>,
}

impl RouteNode {
    /// Creates a node with no views
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteNode;
    ///
    /// let node = RouteNode::new("//about/");
    /// assert_eq!(node.path(), "//about/");
    /// assert_eq!(node.build(&[]).path, "/about");
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            views: Views::new(),
            options: RouteOptions::default(),
            children: None,
            guards: Vec::new(),
        }
    }

    pub fn with_view(mut self, view: impl Into<Component>) -> Self {
        self.views.insert(DEFAULT_VIEW.to_string(), view.into());
        self
    }

    pub fn with_views(mut self, views: Views) -> Self {
        self.views = views;
        self
    }

    pub fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }

    /// Raw fragment as declared
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn route_options(&self) -> &RouteOptions {
        &self.options
    }

    pub fn local_guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn child_scope(&self) -> Option<&RouteScope> {
        self.children.as_ref()
    }

    // ========================================================================
    // Chained configuration
    // ========================================================================

    /// Appends a guard that runs after every ancestor scope's guards
    pub fn guard(&mut self, guard: impl Into<Guard>) -> &mut Self {
        self.guards.push(guard.into());
        self
    }

    pub fn guards<I>(&mut self, guards: I) -> &mut Self
    where
        I: IntoIterator<Item = Guard>,
    {
        self.guards.extend(guards);
        self
    }

    /// Declares child routes, relative to this route
    ///
    /// Calling this again replaces the previous child scope.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteScope;
    ///
    /// let mut routes = RouteScope::new();
    /// routes.add("/users").children(|users| {
    ///     users.add("/");
    ///     users.add(":id");
    /// });
    ///
    /// let built = routes.build();
    /// assert_eq!(built[0].paths(), vec!["/users", "/", ":id"]);
    /// ```
    pub fn children<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut RouteScope),
    {
        let mut scope = RouteScope::children();
        f(&mut scope);
        self.children = Some(scope);
        self
    }

    /// Uses an existing scope as this route's children
    ///
    /// The scope is shared, not copied. Its paths come out relative to this
    /// route whatever its own flavour, and it can still be built on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::RouteScope;
    ///
    /// let mut shared = RouteScope::new();
    /// shared.add("/about");
    ///
    /// let mut routes = RouteScope::new();
    /// routes.add("/home").children_scope(shared);
    ///
    /// assert_eq!(routes.build()[0].paths(), vec!["/home", "about"]);
    /// ```
    pub fn children_scope(&mut self, scope: impl Into<Arc<RouteScope>>) -> &mut Self {
        let scope: Arc<RouteScope> = scope.into();
        let mut children = RouteScope::children();
        if !scope.is_empty() {
            children.append(scope);
        }
        self.children = Some(children);
        self
    }

    /// Adds named views, keeping slots already bound
    pub fn components(&mut self, views: Views) -> &mut Self {
        self.views.extend(views);
        self
    }

    /// Replaces all inline options
    pub fn options(&mut self, options: RouteOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.options.name = Some(name.into());
        self
    }

    pub fn redirect(&mut self, target: impl Into<Location>) -> &mut Self {
        self.options.redirect = Some(target.into());
        self
    }

    /// Adds aliases; earlier aliases are kept
    pub fn alias(&mut self, alias: impl Into<Alias>) -> &mut Self {
        let alias = alias.into();
        self.options.alias = Some(match self.options.alias.take() {
            Some(existing) => existing.merge(alias),
            None => alias,
        });
        self
    }

    pub fn meta(&mut self, meta: serde_json::Value) -> &mut Self {
        self.options.meta = Some(meta);
        self
    }

    pub fn props(&mut self, props: impl Into<Props>) -> &mut Self {
        self.options.props = Some(props.into());
        self
    }

    pub fn case_sensitive(&mut self, sensitive: bool) -> &mut Self {
        self.options.case_sensitive = Some(sensitive);
        self
    }

    pub fn path_to_regexp_options(&mut self, options: PathToRegexpOptions) -> &mut Self {
        self.options.path_to_regexp_options = Some(options);
        self
    }

    /// Installs a caller hook; attached guards will not replace it
    pub fn before_enter(&mut self, hook: NavigationHook) -> &mut Self {
        self.options.before_enter = Some(hook);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Compiles this node under the given ancestor scopes (outermost first)
    ///
    /// Does not mutate the node, so the same node can be built under
    /// different ancestor chains.
    pub fn build(&self, ancestors: &[&dyn Scope]) -> CompiledRoute {
        let path = if ancestors.is_empty() {
            normalize_path(&self.path).into_owned()
        } else {
            resolve_path(ancestors, &self.path)
        };

        let children = self
            .children
            .as_ref()
            .filter(|scope| !scope.is_empty())
            .map(RouteScope::build);

        let mut options = self.options.clone();
        if options.before_enter.is_some() {
            if !self.guards.is_empty() || ancestors.iter().any(|scope| !scope.guards().is_empty()) {
                tracing::debug!(path = %path, "caller hook supersedes route guards");
            }
        } else {
            let chain = GuardChain::collect(ancestors.iter().map(|scope| scope.guards()), &self.guards);
            options.before_enter = chain.into_hook();
        }

        tracing::trace!(path = %path, views = self.views.len(), "compiled route");

        CompiledRoute {
            path,
            views: self.views.clone(),
            children,
            options,
        }
    }
}

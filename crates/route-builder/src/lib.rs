//! # Route Builder
//!
//! Declarative builder for nested route tables:
//! - Scoped prefixes (`group`) and relative child routes (`children`)
//! - Named views, redirects, aliases, metadata and props passed through untouched
//! - Ordered navigation guards, synchronous or async, object or closure
//! - Reusable scopes grafted under new prefixes without being modified
//!
//! ## Path Composition
//!
//! Nothing is resolved while routes are declared. `build()` walks the tree
//! and resolves each route's fragment through every enclosing scope, innermost
//! first, collapsing duplicate slashes at each step:
//! - Root scopes give absolute paths: `dashboard` + `home` → `/dashboard/home`
//! - Child scopes give relative paths: `//about/` → `about`
//! - A lone `/` always stays `/`
//!
//! ## Guard Resolution
//!
//! A route's guards are its ancestors' scope guards (outermost first) followed
//! by its own. The generated `before_enter` hook evaluates them one at a time,
//! waiting for async guards to settle, and stops at the first outcome that is
//! not a pass. Routes without guards get no hook at all, and a hook the
//! caller set explicitly is never replaced.
//!
//! ## Example
//!
//! ```
//! use route_builder::{GroupConfig, Guard, RouteScope};
//!
//! let mut routes = RouteScope::new();
//! routes.add_view("/", "Home");
//! routes.group(
//!     GroupConfig::new()
//!         .prefix("dashboard")
//!         .guard(Guard::from_fn(|_to, _from| Ok("/login"))),
//!     |dashboard| {
//!         dashboard.add_view("home", "DashboardHome").children(|home| {
//!             home.add("settings");
//!         });
//!     },
//! );
//!
//! let built = routes.build();
//! assert_eq!(built[0].path, "/");
//! assert!(built[0].before_enter().is_none());
//! assert_eq!(built[1].path, "/dashboard/home");
//! assert_eq!(built[1].children()[0].path, "settings");
//! assert!(built[1].before_enter().is_some());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod context;
pub mod error;
pub mod guard;
pub mod hook;
pub mod manifest;
pub mod path;
pub mod route;
pub mod scope;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::{Location, NamedLocation, RouteContext};
pub use error::RouteError;
pub use guard::{Guard, GuardChain, GuardFuture, GuardOutcome, PostNavigation, RouteGuard};
pub use hook::{HookFuture, NavigationHook, Next, Verdict};
pub use manifest::{GuardRegistry, RouteManifest};
pub use path::{join_under_scope, normalize_path};
pub use route::{
    Alias, Component, CompiledRoute, PathToRegexpOptions, Props, RouteNode, RouteOptions, Views,
    DEFAULT_VIEW,
};
pub use scope::{GroupConfig, RouteScope, Scope, ScopeWrapper};

//! Path utilities for scope prefixes and route fragments
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.
//!
//! Two rules live here:
//! - [`normalize_path`] collapses slash runs and drops the trailing slash
//! - [`join_under_scope`] glues a fragment onto a scope prefix and applies the
//!   scope's leading-slash policy (absolute for root scopes, relative for child scopes)

use std::borrow::Cow;

/// Checks whether a path is already in normalized form
///
/// # Rules
///
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
///
/// Unlike a URL, a normalized fragment may be relative (`home`) or empty.
///
/// # Examples
///
/// ```
/// use route_builder::path::is_normalized;
///
/// assert!(is_normalized("/"));
/// assert!(is_normalized("/home/about"));
/// assert!(is_normalized("home"));
///
/// assert!(!is_normalized("home/"));
/// assert!(!is_normalized("//"));
/// assert!(!is_normalized("/home//about"));
/// ```
pub fn is_normalized(path: &str) -> bool {
    if path.contains("//") {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path fragment
///
/// Returns `Cow::Borrowed` when the input is already normalized.
///
/// - Runs of `/` collapse into one: `/home//about` → `/home/about`
/// - Trailing `/` is dropped unless the whole path is `/`: `home/` → `home`
/// - A leading `/` is kept (collapsed), never added
///
/// # Examples
///
/// ```
/// use route_builder::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("/about");
/// assert!(matches!(path, Cow::Borrowed("/about")));
///
/// assert_eq!(normalize_path("//home//about//"), "/home/about");
/// assert_eq!(normalize_path("home/"), "home");
/// assert_eq!(normalize_path("//"), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }

    let absolute = path.starts_with('/');
    let joined = path
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    match (absolute, joined.is_empty()) {
        (true, true) => Cow::Borrowed("/"),
        (true, false) => Cow::Owned(format!("/{}", joined)),
        (false, _) => Cow::Owned(joined),
    }
}

/// Resolve a fragment against a scope prefix
///
/// 1. Concatenate `{prefix}/{fragment}` and normalize
/// 2. A bare `/` is returned as-is
/// 3. Child scopes strip every leading `/` (children are relative to their parent);
///    root scopes keep exactly one
///
/// An empty root prefix behaves like `/`.
///
/// # Examples
///
/// ```
/// use route_builder::path::join_under_scope;
///
/// assert_eq!(join_under_scope("/", "about", false), "/about");
/// assert_eq!(join_under_scope("dashboard/", "//home", false), "/dashboard/home");
/// assert_eq!(join_under_scope("//dashboard//", "home", true), "dashboard/home");
/// assert_eq!(join_under_scope("/", "/", true), "/");
/// ```
pub fn join_under_scope(prefix: &str, fragment: &str, is_child_scope: bool) -> String {
    let joined = normalize_path(&format!("{}/{}", prefix, fragment)).into_owned();

    if joined == "/" {
        return joined;
    }

    if is_child_scope {
        joined.trim_start_matches('/').to_string()
    } else if joined.starts_with('/') {
        joined
    } else {
        format!("/{}", joined)
    }
}

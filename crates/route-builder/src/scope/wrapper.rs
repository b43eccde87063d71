//! Re-parenting adapter for shared scopes
//!
//! A [`ScopeWrapper`] stands in for a [`RouteScope`] inside another scope. It
//! adds a prefix and guards on top of the wrapped scope without touching it,
//! so one scope can be grafted in several places and still be built alone.

use super::{GroupConfig, RouteScope, Scope};
use crate::guard::Guard;
use crate::path::join_under_scope;
use crate::route::CompiledRoute;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ScopeWrapper {
    prefix: String,
    guards: Vec<Guard>,
    is_child: bool,
    inner: Arc<RouteScope>,
}

impl ScopeWrapper {
    /// Wraps `inner` with the group's prefix (default `/`) and guards
    ///
    /// `is_child` is the flavour of the scope the wrapper is grafted into.
    pub fn new(inner: Arc<RouteScope>, config: GroupConfig, is_child: bool) -> Self {
        Self {
            prefix: config.prefix_or_root(),
            guards: config.guards,
            is_child,
            inner,
        }
    }

    pub fn inner(&self) -> &Arc<RouteScope> {
        &self.inner
    }
}

impl Scope for ScopeWrapper {
    fn count(&self) -> usize {
        self.inner.count()
    }

    /// Wrapped scope's guards first, then the wrapper's own
    fn guards(&self) -> Vec<Guard> {
        self.inner
            .own_guards()
            .iter()
            .chain(self.guards.iter())
            .cloned()
            .collect()
    }

    /// Resolves through the wrapped scope's prefix, then the wrapper's
    fn resolve_route_path(&self, path: &str) -> String {
        let inner = self.inner.resolve_route_path(path);
        join_under_scope(&self.prefix, &inner, self.is_child)
    }

    /// The wrapper takes the wrapped scope's place in the chain, so each
    /// prefix and guard list is applied exactly once
    fn build_within(&self, ancestors: &[&dyn Scope]) -> Vec<CompiledRoute> {
        let chain: Vec<&dyn Scope> = ancestors
            .iter()
            .copied()
            .chain(std::iter::once(self as &dyn Scope))
            .collect();
        self.inner.build_entries(&chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_composes_prefixes() {
        let mut inner = RouteScope::with_prefix("settings");
        inner.add("profile");

        let wrapper = ScopeWrapper::new(Arc::new(inner), GroupConfig::new().prefix("dashboard"), false);
        assert_eq!(wrapper.resolve_route_path("profile"), "/dashboard/settings/profile");
        assert_eq!(wrapper.count(), 1);
    }

    #[test]
    fn test_wrapper_guard_order() {
        let inner = RouteScope::with_config(GroupConfig::new().guard(Guard::from_fn(|_, _| Ok("/inner"))));
        let wrapper = ScopeWrapper::new(
            Arc::new(inner),
            GroupConfig::new().guard(Guard::from_fn(|_, _| Ok("/outer"))),
            false,
        );

        assert_eq!(wrapper.guards().len(), 2);
    }

    #[test]
    fn test_wrapper_default_prefix() {
        let mut inner = RouteScope::new();
        inner.add("home");

        let wrapper = ScopeWrapper::new(Arc::new(inner), GroupConfig::new(), true);
        assert_eq!(wrapper.resolve_route_path("home"), "home");
    }
}

//! Ordered guard list with sequential resolution
//!
//! Ordering rule: guards of outer scopes come first, the route's own guards
//! come last. Resolution walks that order, waits for each guard to settle,
//! and stops at the first non-pass outcome.

use super::{Guard, GuardOutcome};
use crate::context::RouteContext;
use crate::hook::{NavigationHook, Verdict};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct GuardChain {
    guards: Arc<[Guard]>,
}

impl GuardChain {
    /// Concatenates scope guard lists (outermost first) and the local guards
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::{Guard, GuardChain};
    ///
    /// let outer = vec![Guard::from_fn(|_, _| Ok(true))];
    /// let inner = vec![Guard::from_fn(|_, _| Ok(true))];
    /// let local = vec![Guard::from_fn(|_, _| Ok("/login"))];
    ///
    /// let chain = GuardChain::collect([outer, inner], &local);
    /// assert_eq!(chain.len(), 3);
    /// ```
    pub fn collect<I>(scope_guards: I, local: &[Guard]) -> Self
    where
        I: IntoIterator<Item = Vec<Guard>>,
    {
        let guards: Vec<Guard> = scope_guards
            .into_iter()
            .flatten()
            .chain(local.iter().cloned())
            .collect();

        Self {
            guards: guards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guard> {
        self.guards.iter()
    }

    /// Evaluates guards one after another
    ///
    /// Returns `Ok(None)` when every guard passed, or the first non-pass
    /// outcome. Guard *i + 1* is never invoked before guard *i* has settled,
    /// and never invoked at all once a guard halts the chain. A failing guard
    /// ends resolution with its error.
    pub async fn resolve(&self, to: &RouteContext, from: &RouteContext) -> anyhow::Result<Option<GuardOutcome>> {
        for (index, guard) in self.guards.iter().enumerate() {
            let outcome = guard.evaluate(to, from).await?;

            if !outcome.is_pass() {
                tracing::debug!(
                    to = %to.path,
                    from = %from.path,
                    guard = index,
                    outcome = ?outcome,
                    "guard chain halted"
                );
                return Ok(Some(outcome));
            }
        }

        Ok(None)
    }

    /// Navigation hook running this chain, or `None` for an empty chain
    pub fn into_hook(self) -> Option<NavigationHook> {
        if self.is_empty() {
            return None;
        }

        Some(NavigationHook::new(move |to, from, next| {
            let chain = self.clone();
            async move {
                match chain.resolve(&to, &from).await? {
                    Some(outcome) => next(Verdict::Halt(outcome)),
                    None => next(Verdict::Proceed),
                }
                Ok(())
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording(log: &Arc<Mutex<Vec<&'static str>>>, label: &'static str, outcome: GuardOutcome) -> Guard {
        let log = Arc::clone(log);
        Guard::from_fn(move |_to, _from| {
            log.lock().unwrap().push(label);
            Ok(outcome.clone())
        })
    }

    #[tokio::test]
    async fn test_resolve_stops_at_first_redirect() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = GuardChain::collect(
            [vec![
                recording(&log, "A", GuardOutcome::Pass),
                recording(&log, "B", GuardOutcome::redirect("/login")),
            ]],
            &[recording(&log, "C", GuardOutcome::Pass)],
        );

        let ctx = RouteContext::default();
        let outcome = chain.resolve(&ctx, &ctx).await.unwrap();

        assert_eq!(outcome, Some(GuardOutcome::redirect("/login")));
        assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_resolve_all_pass() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let chain = GuardChain::collect(
            [vec![recording(&log, "A", GuardOutcome::Pass)], vec![]],
            &[recording(&log, "B", GuardOutcome::Pass)],
        );

        let ctx = RouteContext::default();
        assert_eq!(chain.resolve(&ctx, &ctx).await.unwrap(), None);
        assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_chain_has_no_hook() {
        let chain = GuardChain::collect(Vec::<Vec<Guard>>::new(), &[]);
        assert!(chain.is_empty());
        assert!(chain.into_hook().is_none());
    }
}

//! Pre-navigation hook attached to compiled routes
//!
//! The consuming router calls a hook as `(to, from, next)`. The hook settles
//! its decision by calling `next` exactly once with a [`Verdict`].

use crate::context::RouteContext;
use crate::guard::GuardOutcome;
use futures::channel::oneshot;
use futures::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Decision delivered to the navigation continuation
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Every guard passed; navigation continues unchanged
    Proceed,
    /// A guard stopped navigation with this outcome
    Halt(GuardOutcome),
}

/// Navigation continuation
pub type Next = Box<dyn FnOnce(Verdict) + Send>;

/// Future returned by a hook invocation
pub type HookFuture = BoxFuture<'static, anyhow::Result<()>>;

type HookFn = dyn Fn(RouteContext, RouteContext, Next) -> HookFuture + Send + Sync;

/// `beforeEnter`-style hook
///
/// Cloning is cheap; clones share the same underlying function.
#[derive(Clone)]
pub struct NavigationHook {
    inner: Arc<HookFn>,
}

impl NavigationHook {
    /// Creates a hook from an async closure
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::{NavigationHook, Verdict};
    ///
    /// let hook = NavigationHook::new(|to, _from, next| async move {
    ///     next(if to.path == "/" { Verdict::Proceed } else { Verdict::Halt(false.into()) });
    ///     Ok(())
    /// });
    /// ```
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(RouteContext, RouteContext, Next) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |to, from, next| f(to, from, next).boxed()),
        }
    }

    /// Invokes the hook with a continuation
    ///
    /// Guard failures surface as the future's error, unchanged.
    pub fn call<N>(&self, to: RouteContext, from: RouteContext, next: N) -> HookFuture
    where
        N: FnOnce(Verdict) + Send + 'static,
    {
        (self.inner)(to, from, Box::new(next))
    }

    /// Invokes the hook and returns what it passed to `next`
    ///
    /// `None` means the hook finished without calling `next`.
    pub async fn run(&self, to: RouteContext, from: RouteContext) -> anyhow::Result<Option<Verdict>> {
        let (tx, rx) = oneshot::channel();
        self.call(to, from, move |verdict| {
            let _ = tx.send(verdict);
        })
        .await?;

        Ok(rx.await.ok())
    }

    /// Whether both handles share one function
    pub fn ptr_eq(&self, other: &NavigationHook) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NavigationHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavigationHook(..)")
    }
}

//! Navigation guards
//!
//! A guard decides, before a navigation completes, whether it may proceed.
//! Guards come in two shapes that are evaluated identically:
//!
//! - [`RouteGuard`] implementors, called as `handle(from, to)`
//! - plain closures, called as `(to, from)`
//!
//! Either shape may answer synchronously or asynchronously. Evaluation order
//! and short-circuiting live in [`GuardChain`].

use crate::context::{Location, RouteContext};
use async_trait::async_trait;
use futures::future::{self, BoxFuture, FutureExt};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

pub mod chain;
pub use chain::GuardChain;

/// Callback run after navigation, receiving the mounted view instance
pub type PostNavigation = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// Future returned by closure guards
pub type GuardFuture<'a> = BoxFuture<'a, anyhow::Result<GuardOutcome>>;

type GuardFn = dyn for<'a> Fn(&'a RouteContext, &'a RouteContext) -> GuardFuture<'a> + Send + Sync;

// ============================================================================
// Outcome
// ============================================================================

/// What a guard decided
///
/// Only [`GuardOutcome::Pass`] lets the chain continue. Every other variant
/// ends the chain and is handed to the navigation continuation.
///
/// # Conversions
///
/// ```
/// use route_builder::{GuardOutcome, Location};
///
/// assert!(GuardOutcome::from(true).is_pass());
/// assert!(GuardOutcome::from(()).is_pass());
/// assert!(GuardOutcome::from(None::<&str>).is_pass());
///
/// assert!(matches!(GuardOutcome::from(false), GuardOutcome::Abort));
/// assert_eq!(
///     GuardOutcome::from("/login").redirect_target(),
///     Some(&Location::from("/login"))
/// );
/// ```
#[derive(Clone)]
pub enum GuardOutcome {
    /// Navigation may continue to the next guard
    Pass,
    /// Navigation is cancelled
    Abort,
    /// Navigation goes elsewhere
    Redirect(Location),
    /// Navigation proceeds and the callback runs once the view is mounted
    Callback(PostNavigation),
}

impl GuardOutcome {
    pub fn redirect(location: impl Into<Location>) -> Self {
        GuardOutcome::Redirect(location.into())
    }

    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&dyn Any) + Send + Sync + 'static,
    {
        GuardOutcome::Callback(Arc::new(f))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, GuardOutcome::Pass)
    }

    pub fn redirect_target(&self) -> Option<&Location> {
        match self {
            GuardOutcome::Redirect(location) => Some(location),
            _ => None,
        }
    }
}

impl fmt::Debug for GuardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardOutcome::Pass => f.write_str("Pass"),
            GuardOutcome::Abort => f.write_str("Abort"),
            GuardOutcome::Redirect(location) => f.debug_tuple("Redirect").field(location).finish(),
            GuardOutcome::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl PartialEq for GuardOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GuardOutcome::Pass, GuardOutcome::Pass) => true,
            (GuardOutcome::Abort, GuardOutcome::Abort) => true,
            (GuardOutcome::Redirect(a), GuardOutcome::Redirect(b)) => a == b,
            (GuardOutcome::Callback(a), GuardOutcome::Callback(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for GuardOutcome {
    fn from(allowed: bool) -> Self {
        if allowed {
            GuardOutcome::Pass
        } else {
            GuardOutcome::Abort
        }
    }
}

impl From<()> for GuardOutcome {
    fn from(_: ()) -> Self {
        GuardOutcome::Pass
    }
}

impl From<Location> for GuardOutcome {
    fn from(location: Location) -> Self {
        GuardOutcome::Redirect(location)
    }
}

impl From<&str> for GuardOutcome {
    fn from(path: &str) -> Self {
        GuardOutcome::Redirect(Location::from(path))
    }
}

impl From<String> for GuardOutcome {
    fn from(path: String) -> Self {
        GuardOutcome::Redirect(Location::from(path))
    }
}

impl<T: Into<GuardOutcome>> From<Option<T>> for GuardOutcome {
    fn from(outcome: Option<T>) -> Self {
        outcome.map(Into::into).unwrap_or(GuardOutcome::Pass)
    }
}

// ============================================================================
// Guard shapes
// ============================================================================

/// Object-style guard
///
/// # Examples
///
/// ```
/// use route_builder::{GuardOutcome, RouteContext, RouteGuard};
/// use async_trait::async_trait;
///
/// struct RequireLogin;
///
/// #[async_trait]
/// impl RouteGuard for RequireLogin {
///     async fn handle(&self, _from: &RouteContext, to: &RouteContext) -> anyhow::Result<GuardOutcome> {
///         Ok(if to.query.contains_key("token") {
///             GuardOutcome::Pass
///         } else {
///             GuardOutcome::redirect("/login")
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait RouteGuard: Send + Sync {
    async fn handle(&self, from: &RouteContext, to: &RouteContext) -> anyhow::Result<GuardOutcome>;
}

/// A registered guard, either shape
#[derive(Clone)]
pub enum Guard {
    Handler(Arc<dyn RouteGuard>),
    Function(Arc<GuardFn>),
}

fn function_guard<F>(f: F) -> Guard
where
    F: for<'a> Fn(&'a RouteContext, &'a RouteContext) -> GuardFuture<'a> + Send + Sync + 'static,
{
    Guard::Function(Arc::new(f))
}

impl Guard {
    /// Wraps a [`RouteGuard`] implementor
    pub fn handler<G: RouteGuard + 'static>(guard: G) -> Self {
        Guard::Handler(Arc::new(guard))
    }

    /// Wraps a synchronous closure taking `(to, from)`
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::Guard;
    ///
    /// let guard = Guard::from_fn(|to, _from| {
    ///     Ok(if to.path.starts_with("/admin") { Some("/login") } else { None })
    /// });
    /// ```
    pub fn from_fn<F, O>(f: F) -> Self
    where
        F: Fn(&RouteContext, &RouteContext) -> anyhow::Result<O> + Send + Sync + 'static,
        O: Into<GuardOutcome>,
    {
        function_guard(move |to, from| {
            let outcome: anyhow::Result<GuardOutcome> = f(to, from).map(Into::into);
            future::ready(outcome).boxed()
        })
    }

    /// Wraps an asynchronous closure taking owned `(to, from)` snapshots
    ///
    /// # Examples
    ///
    /// ```
    /// use route_builder::Guard;
    ///
    /// let guard = Guard::from_async(|to, _from| async move {
    ///     Ok(to.params.contains_key("id"))
    /// });
    /// ```
    pub fn from_async<F, Fut, O>(f: F) -> Self
    where
        F: Fn(RouteContext, RouteContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<O>> + Send + 'static,
        O: Into<GuardOutcome>,
    {
        function_guard(move |to, from| {
            let pending = f(to.clone(), from.clone());
            async move { pending.await.map(Into::<GuardOutcome>::into) }.boxed()
        })
    }

    /// Runs the guard once, dispatching on its shape
    pub async fn evaluate(&self, to: &RouteContext, from: &RouteContext) -> anyhow::Result<GuardOutcome> {
        match self {
            Guard::Handler(handler) => handler.handle(from, to).await,
            Guard::Function(f) => f(to, from).await,
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Handler(_) => f.write_str("Guard::Handler"),
            Guard::Function(_) => f.write_str("Guard::Function"),
        }
    }
}

impl From<Arc<dyn RouteGuard>> for Guard {
    fn from(handler: Arc<dyn RouteGuard>) -> Self {
        Guard::Handler(handler)
    }
}

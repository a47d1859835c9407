//! Fetch cycles: begin, fetch, settle.
//!
//! The resource lives with its view. A cycle only holds a [`ResourceCell`]
//! handle to it, so a view that unmounts mid-flight simply stops accepting
//! updates. Overlapping cycles are resolved by ticket: the latest wins.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::de::DeserializeOwned;
use storefront_data::{CollectionQuery, Fetcher, Transport};

use crate::render::{select, RenderMode, ViewOptions};
use crate::resource::{AsyncResource, ResourceStatus};

/// A handle through which a fetch cycle reaches its resource.
pub trait ResourceCell<T> {
    /// Run `f` against the resource. `None` means the owning view is gone.
    fn try_update<R>(&self, f: impl FnOnce(&mut AsyncResource<T>) -> R) -> Option<R>;
}

impl<T> ResourceCell<T> for Weak<RefCell<AsyncResource<T>>> {
    fn try_update<R>(&self, f: impl FnOnce(&mut AsyncResource<T>) -> R) -> Option<R> {
        let cell = self.upgrade()?;
        let mut resource = cell.borrow_mut();
        Some(f(&mut *resource))
    }
}

/// How a fetch cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was written; the resource now has this status.
    Applied(ResourceStatus),
    /// A newer cycle started meanwhile; the result was dropped.
    Stale,
    /// The owning view was gone; nothing was written.
    Detached,
}

/// Run one fetch cycle against `cell`.
pub async fn load<T, C, Tr>(cell: &C, fetcher: &Fetcher<Tr>, query: &CollectionQuery) -> LoadOutcome
where
    T: DeserializeOwned,
    C: ResourceCell<T>,
    Tr: Transport,
{
    let Some(ticket) = cell.try_update(|r| r.begin()) else {
        tracing::debug!(path = query.path(), "view gone before fetch started");
        return LoadOutcome::Detached;
    };

    let result = fetcher.fetch::<T>(query).await;

    let settled = cell.try_update(|r| match result {
        Ok(items) => r.succeed(ticket, items).then_some(ResourceStatus::Success),
        Err(e) => r.fail(ticket, e.reason()).then_some(ResourceStatus::Failure),
    });

    match settled {
        Some(Some(status)) => LoadOutcome::Applied(status),
        Some(None) => {
            tracing::debug!(path = query.path(), ticket = ticket.sequence(), "dropping stale result");
            LoadOutcome::Stale
        }
        None => {
            tracing::debug!(path = query.path(), "view unmounted before fetch resolved");
            LoadOutcome::Detached
        }
    }
}

/// Owning side of a resource, held by a view for its lifetime.
///
/// Dropping the slot is unmounting: outstanding cycles become no-ops.
#[derive(Debug)]
pub struct ResourceSlot<T> {
    inner: Rc<RefCell<AsyncResource<T>>>,
}

impl<T> Default for ResourceSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceSlot<T> {
    /// Mount a fresh, idle resource.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(AsyncResource::new())),
        }
    }

    /// A non-owning handle for fetch cycles.
    pub fn cell(&self) -> Weak<RefCell<AsyncResource<T>>> {
        Rc::downgrade(&self.inner)
    }

    /// Read the current state.
    pub fn with<R>(&self, f: impl FnOnce(&AsyncResource<T>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Current render mode.
    pub fn render_mode(&self, options: &ViewOptions) -> RenderMode {
        self.with(|r| select(r, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use storefront_data::{FetchError, StaticTransport};

    const BASE: &str = "https://api.test";

    #[test]
    fn test_load_applies_success() {
        let fetcher = Fetcher::new(
            StaticTransport::new().with_json(
                "https://api.test/public/categories",
                r#"{"data":{"categories":[1,2]}}"#,
            ),
            BASE,
        );
        let slot = ResourceSlot::<u32>::new();
        let outcome = block_on(load(&slot.cell(), &fetcher, &CollectionQuery::categories()));

        assert_eq!(outcome, LoadOutcome::Applied(ResourceStatus::Success));
        slot.with(|r| assert_eq!(r.data(), &[1, 2]));
    }

    #[test]
    fn test_load_applies_failure() {
        let fetcher = Fetcher::new(
            StaticTransport::new().with_error(
                "https://api.test/public/categories",
                FetchError::Connection("offline".into()),
            ),
            BASE,
        );
        let slot = ResourceSlot::<u32>::new();
        let outcome = block_on(load(&slot.cell(), &fetcher, &CollectionQuery::categories()));

        assert_eq!(outcome, LoadOutcome::Applied(ResourceStatus::Failure));
        slot.with(|r| {
            assert!(r.data().is_empty());
            assert_eq!(r.error(), Some("Request failed: offline"));
        });
    }

    #[test]
    fn test_load_without_owner_skips_fetch() {
        let fetcher = Fetcher::new(StaticTransport::new(), BASE);
        let cell = ResourceSlot::<u32>::new().cell();

        let outcome = block_on(load(&cell, &fetcher, &CollectionQuery::categories()));

        assert_eq!(outcome, LoadOutcome::Detached);
        assert!(fetcher.transport().requests().is_empty());
    }
}

//! Reactive glue between fetch cycles and components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use storefront_core::{load, AsyncResource, RenderMode, ResourceCell, StoreConfig, ViewOptions};
use storefront_data::{CollectionQuery, Fetcher, HttpTransport};

/// A signal-backed resource cell.
///
/// Signals are disposed with the component that created them, so a fetch
/// that resolves after unmount finds nothing to write to.
pub struct SignalCell<T: Send + Sync + 'static>(RwSignal<AsyncResource<T>>);

impl<T: Send + Sync + 'static> ResourceCell<T> for SignalCell<T> {
    fn try_update<R>(&self, f: impl FnOnce(&mut AsyncResource<T>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// A collection fetched for the lifetime of the calling component.
pub struct Collection<T: Send + Sync + 'static> {
    resource: RwSignal<AsyncResource<T>>,
    query: StoredValue<CollectionQuery>,
    fetcher: StoredValue<Fetcher<HttpTransport>>,
}

impl<T: Send + Sync + 'static> Clone for Collection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Collection<T> {}

impl<T> Collection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Render mode under `options`. Tracks the resource.
    pub fn mode(&self, options: &ViewOptions) -> RenderMode {
        self.resource.with(|r| storefront_core::select(r, options))
    }

    /// Snapshot of the loaded items. Tracks the resource.
    pub fn items(&self) -> Vec<T> {
        self.resource.with(|r| r.data().to_vec())
    }

    /// Start a fresh fetch cycle with the current query.
    pub fn reload(&self) {
        let cell = SignalCell(self.resource);
        let query = self.query.get_value();
        // Clones share the underlying client.
        let fetcher = self.fetcher.get_value();

        spawn_local(async move {
            let outcome = load(&cell, &fetcher, &query).await;
            tracing::debug!(path = query.path(), ?outcome, "fetch cycle finished");
        });
    }

    fn start(&self, query: CollectionQuery) {
        self.query.set_value(query);
        self.reload();
    }
}

/// Fetch a collection on mount, and again whenever `query` changes.
///
/// `query` may read signals (route params, search terms); it is re-run
/// reactively.
pub fn use_collection<T>(query: impl Fn() -> CollectionQuery + 'static) -> Collection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let config = expect_context::<StoreConfig>();
    let collection = Collection {
        resource: RwSignal::new(AsyncResource::new()),
        query: StoredValue::new(CollectionQuery::new("", "")),
        fetcher: StoredValue::new(config.fetcher(HttpTransport::new())),
    };

    Effect::new(move |_| collection.start(query()));

    collection
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use storefront_core::{LoadOutcome, ResourceStatus};
    use storefront_data::StaticTransport;

    const BASE: &str = "https://api.test";

    fn fetcher() -> Fetcher<StaticTransport> {
        Fetcher::new(
            StaticTransport::new()
                .with_json("https://api.test/public/categories", r#"{"data":{"categories":[1,2]}}"#),
            BASE,
        )
    }

    #[test]
    fn test_live_signal_receives_result() {
        let owner = Owner::new();
        let resource = owner.with(|| RwSignal::new(AsyncResource::<u32>::new()));
        let cell = SignalCell(resource);

        let outcome = block_on(load(&cell, &fetcher(), &CollectionQuery::categories()));

        assert_eq!(outcome, LoadOutcome::Applied(ResourceStatus::Success));
        resource.with_untracked(|r| assert_eq!(r.data(), &[1, 2]));
    }

    #[test]
    fn test_disposed_signal_detaches() {
        let owner = Owner::new();
        let resource = owner.with(|| RwSignal::new(AsyncResource::<u32>::new()));
        let cell = SignalCell(resource);
        owner.cleanup();

        let fetcher = fetcher();
        let outcome = block_on(load(&cell, &fetcher, &CollectionQuery::categories()));

        assert_eq!(outcome, LoadOutcome::Detached);
        assert!(fetcher.transport().requests().is_empty());
        assert!(resource.try_with_untracked(|_| ()).is_none());
    }
}

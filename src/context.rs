//! Storefront Context
//!
//! Shared handle provided via Leptos Context API. Each action runs the
//! synchronous transition on the store, then (if data is needed) spawns
//! the fetch and settles the result with the ticket it was issued.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{Catalog, HttpTransport};
use crate::config::StorefrontConfig;
use crate::controller::{AddOrigin, Storefront, Ticket};
use crate::models::{ProductId, Selection};
use crate::store::{transition, StorefrontStore};
use crate::view_model::Formatting;

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub store: StorefrontStore,
    config: StoredValue<StorefrontConfig>,
}

impl StorefrontContext {
    pub fn new(store: StorefrontStore, config: StorefrontConfig) -> Self {
        Self { store, config: StoredValue::new(config) }
    }

    pub fn debug_log(&self) -> bool {
        self.config.with_value(|config| config.debug_log)
    }

    pub fn formatting(&self) -> Formatting {
        self.config.with_value(|config| Formatting::from(config))
    }

    fn catalog(&self) -> Catalog<HttpTransport> {
        self.config.with_value(|config| Catalog::http(&config.api_base))
    }

    fn update<R>(&self, f: impl FnOnce(&mut Storefront) -> R) -> R {
        transition(self.store, f)
    }

    /// Startup and the categories Retry button
    pub fn load_categories(&self) {
        let ticket = self.update(Storefront::begin_categories);
        let catalog = self.catalog();
        let store = self.store;
        spawn_local(async move {
            let result = catalog.fetch_categories().await;
            transition(store, |s| s.finish_categories(ticket, result));
        });
    }

    pub fn select(&self, selection: Selection) {
        let ticket = self.update(|s| s.select(selection));
        self.load_products(selection, ticket);
    }

    /// Grid Retry button: same filter, new request
    pub fn retry_products(&self) {
        let (selection, ticket) = self.update(Storefront::retry_products);
        self.load_products(selection, ticket);
    }

    fn load_products(&self, selection: Selection, ticket: Ticket) {
        let catalog = self.catalog();
        let store = self.store;
        spawn_local(async move {
            let result = catalog.fetch_products(selection).await;
            transition(store, |s| s.finish_products(ticket, result));
        });
    }

    pub fn open_detail(&self, id: ProductId) {
        let ticket = self.update(|s| s.open_detail(id));
        self.load_detail(id, ticket);
    }

    pub fn retry_detail(&self) {
        if let Some((id, ticket)) = self.update(Storefront::retry_detail) {
            self.load_detail(id, ticket);
        }
    }

    fn load_detail(&self, id: ProductId, ticket: Ticket) {
        let catalog = self.catalog();
        let store = self.store;
        spawn_local(async move {
            let result = catalog.fetch_product_detail(id).await;
            transition(store, |s| s.finish_detail(ticket, result));
        });
    }

    pub fn close_detail(&self) {
        self.update(Storefront::close_detail);
    }

    pub fn add_to_cart(&self, id: ProductId, name: &str, price: u64, origin: AddOrigin) {
        match self.update(|s| s.add_to_cart(id, name, price, origin)) {
            Ok(_) => {
                if let Some(serial) = self.store.with_untracked(|s| s.added_serial(id)) {
                    let store = self.store;
                    let delay = self.config.with_value(|c| c.added_feedback_ms);
                    spawn_local(async move {
                        TimeoutFuture::new(delay).await;
                        transition(store, |s| s.clear_added(serial));
                    });
                }
            }
            Err(_) => self.expire_notice(),
        }
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        self.update(|s| s.remove_from_cart(id));
    }

    pub fn acknowledge_donation(&self) {
        self.update(Storefront::acknowledge_donation);
        self.expire_notice();
    }

    pub fn dismiss_notice(&self, serial: u64) {
        self.update(|s| s.dismiss_notice(serial));
    }

    /// Clear the current notice after `notice_ms`, unless replaced meanwhile
    fn expire_notice(&self) {
        let Some(serial) = self.store.with_untracked(Storefront::notice_serial) else {
            return;
        };
        let store = self.store;
        let delay = self.config.with_value(|c| c.notice_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            transition(store, |s| s.dismiss_notice(serial));
        });
    }
}

/// Get the storefront context
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}

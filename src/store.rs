//! Storefront Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! `Storefront` state. Components read single fields
//! (`store.cart()`, `store.products()`); transitions write the whole value.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::Storefront;

/// Type alias for the store
pub type StorefrontStore = Store<Storefront>;

/// Fresh session: empty cart, every region idle
pub fn new_store() -> StorefrontStore {
    Store::new(Storefront::new())
}

/// Apply one synchronous transition and return its result
pub fn transition<R>(store: StorefrontStore, f: impl FnOnce(&mut Storefront) -> R) -> R {
    f(&mut store.write())
}

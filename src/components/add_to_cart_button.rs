//! Add To Cart Button
//!
//! Shared by grid cards and the detail modal. Reads "✓ Added!" for a
//! short while after its product was added.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::controller::{AddOrigin, StorefrontStoreFields};
use crate::models::ProductId;
use crate::view_model::add_button_label;

#[component]
pub fn AddToCartButton(
    product_id: ProductId,
    #[prop(into)] name: String,
    price: u64,
    origin: AddOrigin,
) -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;
    let just_added = move || store.added().read().iter().any(|flash| flash.product_id == product_id);

    view! {
        <button
            class=move || if just_added() { "btn-add-cart added" } else { "btn-add-cart" }
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.add_to_cart(product_id, &name, price, origin);
            }
        >
            {move || add_button_label(just_added())}
        </button>
    }
}

//! Cart Panel Component
//!
//! Cart lines in insertion order with a remove button each, and the total.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::controller::StorefrontStoreFields;
use crate::view_model::cart_panel;

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;
    let fmt = ctx.formatting();

    view! {
        <aside class="cart-panel">
            <h3 class="cart-title">"Your Cart"</h3>
            {move || {
                let panel = cart_panel(&store.cart().read(), &fmt);
                let lines = match panel.empty_message {
                    Some(message) => view! { <p class="empty-cart">{message}</p> }.into_any(),
                    None => panel
                        .lines
                        .into_iter()
                        .map(|line| {
                            let id = line.id;
                            view! {
                                <div class="cart-item">
                                    <div class="cart-item-info">
                                        <div class="cart-item-name">{line.name}</div>
                                        <div class="cart-item-price">{line.price_label}</div>
                                    </div>
                                    <button
                                        class="remove-btn"
                                        title="Remove from cart"
                                        on:click=move |_| ctx.remove_from_cart(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                };
                view! {
                    <div class="cart-items">{lines}</div>
                    <div class="cart-total">
                        <span>"Total:"</span>
                        <span class="total-amount">{panel.total_label}</span>
                    </div>
                }
            }}
        </aside>
    }
}

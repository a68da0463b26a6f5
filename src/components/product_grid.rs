//! Product Grid Component
//!
//! Cards for the current filter, or a spinner / placeholder / error.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::controller::{AddOrigin, StorefrontStoreFields};
use crate::components::{AddToCartButton, TreeImage};
use crate::models::PLACEHOLDER_IMAGE;
use crate::view_model::{grid_view, GridView, ProductCard};

/// Single product card
#[component]
fn TreeCard(card: ProductCard) -> impl IntoView {
    let ctx = use_storefront();
    let ProductCard { id, name, category, image, summary, price, price_label } = card;

    view! {
        <div class="tree-card">
            <TreeImage src=image alt=name.clone() img_class="tree-image" placeholder=PLACEHOLDER_IMAGE />
            <div class="tree-info">
                <div class="tree-category">{category}</div>
                <h3 class="tree-name" on:click=move |_| ctx.open_detail(id)>{name.clone()}</h3>
                <p class="tree-description">{summary}</p>
                <div class="tree-price">{price_label}</div>
                <AddToCartButton product_id=id name=name price=price origin=AddOrigin::Grid />
            </div>
        </div>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;
    let fmt = ctx.formatting();

    view! {
        <section class="trees-section">
            {move || {
                let grid = grid_view(store.products().read().state(), &fmt);
                match grid {
                    GridView::Idle => view! { <div></div> }.into_any(),
                    GridView::Loading => view! { <div class="spinner active"></div> }.into_any(),
                    GridView::Empty { message } => view! {
                        <p class="grid-empty">{message}</p>
                    }.into_any(),
                    GridView::Failed { message } => view! {
                        <div class="grid-error">
                            <p class="error-text">{message}</p>
                            <button class="retry-btn" on:click=move |_| ctx.retry_products()>
                                "Retry"
                            </button>
                        </div>
                    }.into_any(),
                    GridView::Cards(cards) => view! {
                        <div class="trees-grid">
                            {cards
                                .into_iter()
                                .map(|card| view! { <TreeCard card=card /> })
                                .collect_view()}
                        </div>
                    }.into_any(),
                }
            }}
        </section>
    }
}

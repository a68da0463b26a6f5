//! Detail Modal Component
//!
//! Full product detail over a backdrop. Closes on the close button, a
//! backdrop click, Escape (wired in `App`), or an add-to-cart from inside.

use leptos::prelude::*;

use crate::components::{AddToCartButton, TreeImage};
use crate::context::use_storefront;
use crate::controller::{AddOrigin, StorefrontStoreFields};
use crate::models::DETAIL_PLACEHOLDER_IMAGE;
use crate::view_model::{detail_view, DetailView, ProductDetail};

#[component]
fn DetailBody(detail: ProductDetail) -> impl IntoView {
    let ProductDetail {
        id,
        name,
        category,
        image,
        description,
        benefits,
        conditions,
        price,
        price_label,
    } = detail;

    view! {
        <TreeImage src=image alt=name.clone() img_class="modal-image" placeholder=DETAIL_PLACEHOLDER_IMAGE />
        <div class="tree-category">{category}</div>
        <h2 class="modal-title">{name.clone()}</h2>
        <div class="modal-detail">
            <strong>"Description:"</strong>
            <p>{description}</p>
        </div>
        <div class="modal-detail">
            <strong>"Benefits:"</strong>
            <p>{benefits}</p>
        </div>
        <div class="modal-detail">
            <strong>"Best Conditions:"</strong>
            <p>{conditions}</p>
        </div>
        <div class="tree-price">{price_label}</div>
        <AddToCartButton product_id=id name=name price=price origin=AddOrigin::Detail />
    }
}

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;
    let fmt = ctx.formatting();
    let is_open = move || store.detail().read().open;

    view! {
        <div
            class=move || if is_open() { "modal active" } else { "modal" }
            on:click=move |_| ctx.close_detail()
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| ctx.close_detail()>"×"</button>
                {move || {
                    let detail = detail_view(&store.detail().read(), &fmt);
                    match detail {
                        DetailView::Hidden => view! { <div></div> }.into_any(),
                        DetailView::Loading => view! {
                            <div class="spinner active modal-spinner"></div>
                        }.into_any(),
                        DetailView::Failed { message } => view! {
                            <div class="modal-error">
                                <p class="error-text">{message}</p>
                                <button class="retry-btn" on:click=move |_| ctx.retry_detail()>
                                    "Retry"
                                </button>
                                <button class="close-btn" on:click=move |_| ctx.close_detail()>
                                    "Close"
                                </button>
                            </div>
                        }.into_any(),
                        DetailView::Ready(detail) => view! { <DetailBody detail=detail /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}

//! Category Bar Component
//!
//! Filter buttons: "All Trees" plus one per category, one marked active.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::controller::StorefrontStoreFields;
use crate::view_model::{categories_view, CategoriesView};

#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;

    view! {
        <div class="categories-container">
            {move || {
                let selection = store.selection().get();
                let categories = categories_view(store.categories().read().state(), selection);
                match categories {
                    CategoriesView::Loading => view! { <div class="spinner active"></div> }.into_any(),
                    CategoriesView::Failed { message } => view! {
                        <div class="categories-error">
                            <p class="error-text">{message}</p>
                            <button class="retry-btn" on:click=move |_| ctx.load_categories()>
                                "Retry"
                            </button>
                        </div>
                    }.into_any(),
                    CategoriesView::Buttons(buttons) => buttons
                        .into_iter()
                        .map(|button| {
                            let selection = button.selection;
                            view! {
                                <button
                                    class=if button.active { "category-btn active" } else { "category-btn" }
                                    on:click=move |_| ctx.select(selection)
                                >
                                    {button.label}
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

//! Tree Storefront App
//!
//! Root component: category sidebar, product grid, cart panel, detail
//! modal and the donation section.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{
    CartPanel, CategoryBar, DetailModal, DonationForm, LogPanel, NoticeToast, ProductGrid,
};
use crate::config::StorefrontConfig;
use crate::context::StorefrontContext;
use crate::models::Selection;
use crate::store::new_store;

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let ctx = StorefrontContext::new(new_store(), config);

    // Provide context to all children
    provide_context(ctx);

    // Categories and the "All" grid load independently on mount
    Effect::new(move |_| {
        ctx.load_categories();
        ctx.select(Selection::All);
    });

    // Escape closes the detail modal; lives as long as the page
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_detail();
        }
    });

    view! {
        <div class="storefront">
            <header class="hero">
                <h1>"Green Earth"</h1>
                <p>"Plant a tree today and help the planet breathe."</p>
            </header>

            <main class="shop-layout" id="shop">
                // Left: category filters
                <aside class="categories-sidebar">
                    <h3>"Categories"</h3>
                    <CategoryBar />
                </aside>

                // Center: product grid
                <ProductGrid />

                // Right: cart
                <CartPanel />
            </main>

            <DonationForm />
            <Show when=move || ctx.debug_log()>
                <LogPanel />
            </Show>

            <DetailModal />
            <NoticeToast />
        </div>
    }
}

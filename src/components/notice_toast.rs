//! Notice Toast Component

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::controller::{NoticeKind, StorefrontStoreFields};

/// Transient notice (duplicate cart item, donation thanks)
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_storefront();
    let store = ctx.store;

    view! {
        {move || store.notice().get().map(|notice| {
            let serial = notice.serial;
            let class = match notice.kind {
                NoticeKind::Info => "notice notice-info",
                NoticeKind::Warning => "notice notice-warning",
            };
            view! {
                <div class=class role="alert">
                    <span class="notice-text">{notice.message}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice(serial)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}

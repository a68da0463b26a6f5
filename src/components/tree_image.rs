//! Tree Image Component
//!
//! `<img>` that swaps to a placeholder when the source fails to load.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TreeImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    img_class: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            class=img_class
            on:error=move |ev| use_placeholder(ev.target(), placeholder)
        />
    }
}

fn use_placeholder(target: Option<web_sys::EventTarget>, placeholder: &str) {
    let Some(img) = target.and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok()) else {
        return;
    };
    // The placeholder itself failing must not loop
    if img.src() != placeholder {
        img.set_src(placeholder);
    }
}

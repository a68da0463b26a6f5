//! Donation Form Component
//!
//! Local acknowledgment only: submitting thanks the donor, clears the
//! fields and scrolls back to the top. Nothing is sent anywhere.

use leptos::prelude::*;

use crate::context::use_storefront;

#[component]
pub fn DonationForm() -> impl IntoView {
    let ctx = use_storefront();

    let (donor, set_donor) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (amount, set_amount) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.acknowledge_donation();
        set_donor.set(String::new());
        set_email.set(String::new());
        set_amount.set(String::new());
        scroll_to_top();
    };

    view! {
        <section class="donation-section" id="donate">
            <h2>"Plant a Tree, Grow the Future"</h2>
            <form class="donation-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Your name"
                    required=true
                    prop:value=move || donor.get()
                    on:input=move |ev| set_donor.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email address"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    placeholder="Amount (৳)"
                    required=true
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-donate">"Donate Now"</button>
            </form>
        </section>
    }
}

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

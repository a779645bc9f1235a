//! Press contact block shown under the listing and each article.

use leptos::prelude::*;
use news::share::ContactLinks;
use news::site;

#[component]
pub fn ContactStrip() -> impl IntoView {
    let contact = ContactLinks::press();

    view! {
        <aside class="contact-strip">
            <h2 class="contact-strip__title">"Media inquiries"</h2>
            <p class="contact-strip__text">
                "Journalists can reach the " {site::BRAND} " communications team directly."
            </p>
            <div class="contact-strip__links">
                <a class="contact-strip__link" href=contact.email_href>{contact.email_label}</a>
                <a class="contact-strip__link" href=contact.phone_href>{contact.phone_label}</a>
            </div>
        </aside>
    }
}

use super::{BRAND, CONTACT_EMAIL};
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_email = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(CONTACT_EMAIL);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    let mailto = format!("mailto:{CONTACT_EMAIL}");
    let pilot_mailto = format!("mailto:{CONTACT_EMAIL}?subject={BRAND}%20Pilot%20Request");

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="contact-box">
                    <h2 class="contact-title">"Contact"</h2>
                    <p class="contact-intro">"For pilot access, onboarding, or support, reach out:"</p>
                    <div class="contact-grid">
                        <div class="contact-card">
                            <div class="contact-label">"Email"</div>
                            <div class="contact-command-box">
                                <a href=mailto class="contact-link">{CONTACT_EMAIL}</a>
                                <button type="button" class="copy-btn-small" on:click=copy_email>
                                    {move || if copied.get() { "COPIED" } else { "COPY" }}
                                </button>
                            </div>
                            <div class="contact-note">"We reply within 24–48 hours."</div>
                        </div>
                        <div class="contact-card">
                            <div class="contact-label">"Pilot"</div>
                            <div class="contact-text">{format!("Want to trial {BRAND} with your club?")}</div>
                            <a href=pilot_mailto class="btn btn-primary">"Request a pilot"</a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

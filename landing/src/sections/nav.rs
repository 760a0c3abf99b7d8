use super::BRAND;
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <img src="screens/scoutablelogonew.png" alt="Scoutable logo" />
                    </div>
                    <div>
                        <span class="nav-title">{BRAND}</span>
                        <span class="nav-tagline">"Tools for modern scouts"</span>
                    </div>
                </a>
                <nav class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="#screens" class="nav-link">"Screens"</a>
                    <a href="#faq" class="nav-link">"FAQ"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
                <a href="#contact" class="nav-cta">"Get in touch"</a>
            </div>
        </header>
    }
}

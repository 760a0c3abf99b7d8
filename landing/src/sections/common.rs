use leptos::prelude::*;

#[component]
pub fn Pill(children: Children) -> impl IntoView {
    view! { <span class="pill">{children()}</span> }
}

#[component]
pub fn SectionTitle(kicker: &'static str, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <p class="section-eyebrow">{kicker}</p>
            <h2 class="section-title">{title}</h2>
            <p class="section-description">{subtitle}</p>
        </div>
    }
}

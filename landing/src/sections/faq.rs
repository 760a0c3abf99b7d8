use super::common::SectionTitle;
use leptos::prelude::*;

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container">
                <SectionTitle
                    kicker="FAQ"
                    title="Common questions"
                    subtitle="A few quick answers to what clubs usually ask first."
                />
                <div class="faq-list">
                    <FaqItem
                        question="Will scanned fixtures and reports persist for users?"
                        answer="Yes. Fixtures, match logs and reports are saved to each user's account and stay available across devices."
                    />
                    <FaqItem
                        question="Can staff view reports without editing?"
                        answer="Yes. Viewers get read-only access; only writers can create or change reports."
                    />
                    <FaqItem
                        question="Do you support substitutes?"
                        answer="Yes. Substitutes are picked up from the teamsheet scan and carried into the match log."
                    />
                    <FaqItem
                        question="What’s needed for a pilot?"
                        answer="A club workspace, a small user list, and agreed permissions (who can edit vs view)."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <button
            type="button"
            class=move || if open.get() { "faq-item open" } else { "faq-item" }
            aria-expanded=move || if open.get() { "true" } else { "false" }
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            <div class="faq-question">
                <span>{question}</span>
                <span class="faq-toggle">{move || if open.get() { "–" } else { "+" }}</span>
            </div>
            <Show when=move || open.get()>
                <div class="faq-answer">{answer}</div>
            </Show>
        </button>
    }
}

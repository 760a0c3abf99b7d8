use super::common::SectionTitle;
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionTitle
                    kicker="Features"
                    title="Built for real matchday workflows"
                    subtitle="Keep admin lightweight: capture the teamsheet, log the match, and file player notes in one flow."
                />
                <div class="features-grid">
                    <FeatureCard
                        title="Instant teamsheet capture"
                        text="Upload a photo and extract players quickly — so you spend time watching, not typing."
                    />
                    <FeatureCard
                        title="Match logs + score tracking"
                        text="Capture formations, score, and a short match summary — ready for coaches or recruitment."
                    />
                    <FeatureCard
                        title="Player reports in seconds"
                        text="Rate Technical/Tactical/Physical/Psych, add notes, and tag MOTM — fast and consistent."
                    />
                    <FeatureCard
                        title="Shared club workspace"
                        text="A single place to browse recent reports and keep scouting aligned across staff."
                    />
                    <FeatureCard
                        title="Permissions built-in"
                        text="Writers can edit; viewers can read. Designed for clubs with multiple roles."
                    />
                    <FeatureCard
                        title="Pilot-friendly setup"
                        text="Start with one club workspace and iterate — no heavy onboarding needed."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{text}</p>
        </article>
    }
}

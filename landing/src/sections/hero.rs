use super::common::Pill;
use crate::carousel::{CarouselHandle, CarouselRegion, DotStrip, PreviewImage};
use leptos::prelude::*;

#[component]
pub fn Hero(carousel: CarouselHandle) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <Pill>
                            <span class="pill-dot"></span>
                            "Pilot testing available now"
                        </Pill>
                        <h1 class="hero-title">
                            "Instant Team-sheet Scanning — "
                            <span class="hero-title-accent">"Match Logs & Player Reports"</span>
                            " in minutes."
                        </h1>
                        <p class="hero-description">
                            "Scoutable helps clubs capture teamsheets, generate match logs, and file quick player reports "
                            "with ratings, notes, and MOTM — built for real matchday workflows."
                        </p>
                        <div class="hero-actions">
                            <a href="#screens" class="btn btn-primary">"See the app screens"</a>
                            <a href="#contact" class="btn btn-secondary">"Book a pilot demo"</a>
                        </div>
                        <div class="hero-stats">
                            <Stat value="2–5 min" caption="from photo to log" />
                            <Stat value="Fast" caption="ratings & notes" />
                            <Stat value="Shared" caption="club workspace" />
                        </div>
                    </div>
                    <PilotPreview carousel=carousel />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="hero-stat">
            <div class="hero-stat-value">{value}</div>
            <div class="hero-stat-caption">{caption}</div>
        </div>
    }
}

/// Compact preview card: current shot, Prev, dots, Next.
#[component]
fn PilotPreview(carousel: CarouselHandle) -> impl IntoView {
    view! {
        <CarouselRegion carousel=carousel label="Pilot build preview">
            <div class="preview-card">
                <div class="preview-card-header">
                    <div>
                        <p class="preview-kicker">"Pilot build preview"</p>
                        <p class="preview-title">{move || carousel.preview().map(|s| s.title)}</p>
                        <p class="preview-subtitle">{move || carousel.preview().map(|s| s.subtitle)}</p>
                    </div>
                    <div class="preview-logo">
                        <img src="screens/scoutablelogonew.png" alt="Scoutable logo" />
                    </div>
                </div>
                <PreviewImage carousel=carousel frame="phone-frame" />
                <div class="preview-controls">
                    <button
                        type="button"
                        class="btn btn-ghost"
                        disabled=move || carousel.is_empty()
                        on:click=move |_| carousel.previous()
                    >
                        "← Prev"
                    </button>
                    <DotStrip carousel=carousel />
                    <button
                        type="button"
                        class="btn btn-ghost"
                        disabled=move || carousel.is_empty()
                        on:click=move |_| carousel.next()
                    >
                        "Next →"
                    </button>
                </div>
            </div>
        </CarouselRegion>
    }
}

use super::common::SectionTitle;
use crate::carousel::{
    CarouselHandle, CarouselRegion, DotStrip, PrevNext, PreviewImage, StepLabelText, ThumbnailGrid,
};
use leptos::prelude::*;

#[component]
pub fn Screens(carousel: CarouselHandle) -> impl IntoView {
    view! {
        <section id="screens" class="screens">
            <div class="container">
                <div class="screens-header">
                    <SectionTitle
                        kicker="Screens"
                        title="Scroll-stopping walkthrough"
                        subtitle="One clean carousel — click through the full flow."
                    />
                    <PrevNext carousel=carousel layout="carousel-controls desktop-only" />
                </div>
                <CarouselRegion carousel=carousel label="App screens walkthrough">
                    <div class="screens-grid">
                        <div class="screens-panel">
                            <div class="screens-panel-header">
                                <StepLabelText carousel=carousel />
                                <span class="screens-badge">"Pilot-ready UI"</span>
                            </div>
                            <h3 class="screens-title">{move || carousel.preview().map(|s| s.title)}</h3>
                            <p class="screens-subtitle">{move || carousel.preview().map(|s| s.subtitle)}</p>
                            <DotStrip carousel=carousel />
                            <PreviewImage carousel=carousel frame="phone-frame phone-frame-large" />
                            <PrevNext carousel=carousel layout="carousel-controls mobile-only" />
                        </div>
                        <div class="screens-panel">
                            <ThumbnailGrid carousel=carousel />
                        </div>
                    </div>
                </CarouselRegion>
                <p class="screens-note">"Screens shown are from an internal pilot build."</p>
            </div>
        </section>
    }
}

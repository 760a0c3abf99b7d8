// Scoutable Landing Page — Leptos 0.8 Edition

mod carousel;
mod sections;
mod shots;

use carousel::CarouselHandle;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // One controller per page: the hero preview and the walkthrough both read it.
    let carousel = CarouselHandle::new(shots::load_carousel());

    view! {
        <Nav />
        <main>
            <Hero carousel=carousel />
            <Features />
            <Screens carousel=carousel />
            <Faq />
            <Contact />
        </main>
        <Footer />
    }
}

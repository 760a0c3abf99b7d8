use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use scoutable_carousel::Thumbnail;

use super::CarouselHandle;

/// Keyboard-focusable wrapper: arrows step, Home/End jump to the ends.
#[component]
pub fn CarouselRegion(carousel: CarouselHandle, label: &'static str, children: Children) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        let handled = match ev.key().as_str() {
            "ArrowRight" => {
                carousel.next();
                true
            }
            "ArrowLeft" => {
                carousel.previous();
                true
            }
            "Home" => {
                carousel.go_to(0);
                true
            }
            "End" => {
                carousel.go_to(-1);
                true
            }
            _ => false,
        };
        if handled {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class="carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label=label
            tabindex="0"
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}

/// The large phone-framed image of the selected shot.
#[component]
pub fn PreviewImage(carousel: CarouselHandle, frame: &'static str) -> impl IntoView {
    view! {
        <div class=frame>
            {move || match carousel.preview() {
                Some(shot) => view! { <img src=shot.image alt=shot.title /> }.into_any(),
                None => view! { <div class="preview-empty">"No screens yet"</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn StepLabelText(carousel: CarouselHandle) -> impl IntoView {
    view! { <span class="step-label">{move || carousel.step_label()}</span> }
}

/// One dot per shot; the selected one is highlighted.
#[component]
pub fn DotStrip(carousel: CarouselHandle) -> impl IntoView {
    view! {
        <div class="carousel-dots">
            {move || {
                carousel
                    .dots()
                    .into_iter()
                    .map(|dot| {
                        let index = dot.index;
                        view! {
                            <button
                                type="button"
                                class=if dot.active { "carousel-dot active" } else { "carousel-dot" }
                                aria-label=dot.aria_label
                                aria-current=dot.active.then_some("step")
                                on:click=move |_| carousel.select(index)
                            ></button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Prev/Next pair. `layout` picks the desktop or compact styling; both
/// variants call the same controller operations.
#[component]
pub fn PrevNext(carousel: CarouselHandle, #[prop(default = "carousel-controls")] layout: &'static str) -> impl IntoView {
    view! {
        <div class=layout>
            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || carousel.is_empty()
                on:click=move |_| carousel.previous()
            >
                "← Prev"
            </button>
            <button
                type="button"
                class="btn btn-primary"
                disabled=move || carousel.is_empty()
                on:click=move |_| carousel.next()
            >
                "Next →"
            </button>
        </div>
    }
}

/// Grid of every shot; clicking a cell selects it.
#[component]
pub fn ThumbnailGrid(carousel: CarouselHandle) -> impl IntoView {
    view! {
        <div class="thumb-grid">
            {move || {
                carousel
                    .thumbnails()
                    .into_iter()
                    .map(|Thumbnail { index, shot, active }| {
                        let alt = shot.title.clone();
                        view! {
                            <button
                                type="button"
                                class=if active { "thumb active" } else { "thumb" }
                                aria-pressed=if active { "true" } else { "false" }
                                on:click=move |_| carousel.select(index)
                            >
                                <div class="thumb-image">
                                    <img src=shot.image alt=alt />
                                </div>
                                <p class="thumb-title">{shot.title}</p>
                                <p class="thumb-subtitle">{shot.subtitle}</p>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

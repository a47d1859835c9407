//! Home page hero banner.

use leptos::prelude::*;
use storefront_core::{Carousel, AUTOPLAY_INTERVAL, HERO_SLIDES};

/// Home page banner with autoplay.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(HERO_SLIDES.len()));

    match set_interval_with_handle(
        move || {
            carousel.try_update(|c| c.tick());
        },
        AUTOPLAY_INTERVAL,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!(error = ?e, "hero autoplay unavailable"),
    }

    let slide = move || HERO_SLIDES.get(carousel.with(|c| c.current()));

    view! {
        <section class="hero">
            {move || slide().map(|s| view! {
                <h1>{s.title}</h1>
                <p>{s.subtitle}</p>
                <a href=s.cta_href class="btn" style="margin-top: 1rem;">{s.cta}</a>
            })}
            <div class="controls">
                <button aria-label="Previous slide" on:click=move |_| carousel.update(|c| c.prev())>
                    "‹"
                </button>
                <span class="dots">
                    {(0..HERO_SLIDES.len())
                        .map(|i| view! {
                            <button
                                aria-label=format!("Slide {}", i + 1)
                                class:active=move || carousel.with(|c| c.current() == i)
                                on:click=move |_| carousel.update(|c| c.select(i))
                            ></button>
                        })
                        .collect::<Vec<_>>()}
                </span>
                <button aria-label="Next slide" on:click=move |_| carousel.update(|c| c.next())>
                    "›"
                </button>
                <button on:click=move |_| carousel.update(|c| c.toggle_autoplay())>
                    {move || if carousel.with(|c| c.autoplay()) { "Pause" } else { "Play" }}
                </button>
            </div>
        </section>
    }
}

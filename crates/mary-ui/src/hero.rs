//! Hero section with its entrance timeline and watermark parallax.

use leptos::{ev, prelude::*};
use mary_core::{
    HeroProps, HeroTarget, Playback, Pose,
    hero::{self, entrance_timeline},
};

use crate::{dom, raf::RafLoop};

fn background_style(background: &str, pose: &Pose) -> String {
    format!(
        "background-image: {background}; background-size: cover; \
         background-position: center; background-repeat: no-repeat; {}",
        pose.css()
    )
    .trim_end()
    .to_string()
}

fn cta_label(cta_text: &str) -> String {
    format!("{cta_text} - Explore Mary Agency's portfolio and services")
}

/// Full-screen hero.
///
/// The entrance plays once per mount on animation frames. With reduced
/// motion requested, or no `requestAnimationFrame`, the final pose is
/// shown straight away.
#[component]
pub fn HeroSection(
    /// Content and background.
    #[prop(into)]
    hero: HeroProps,
    /// Extra classes for the `<section>`.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let words: Vec<String> = hero.title_words().into_iter().map(str::to_string).collect();
    let mut playback = Playback::new(entrance_timeline(words.len()));
    let final_frame = playback.final_frame();
    let reduced_motion = dom::prefers_reduced_motion();

    let frame = RwSignal::new(if reduced_motion {
        final_frame.clone()
    } else {
        playback.timeline().sample(0.0)
    });
    let parallax = RwSignal::new(0.0_f64);
    let hero_ref = NodeRef::<leptos::html::Section>::new();

    let raf = StoredValue::new_local(None::<RafLoop>);
    if !reduced_motion {
        let raf_loop = RafLoop::new(move |now_ms| {
            let (next, done) = playback.advance(now_ms);
            frame.set(next);
            !done
        });
        if raf_loop.start() {
            raf.set_value(Some(raf_loop));
        } else {
            log::debug!("hero animation unavailable, showing final frame");
            frame.set(final_frame);
        }

        let update_parallax = move || {
            if let Some(section) = hero_ref.get_untracked() {
                let rect = section.get_bounding_client_rect();
                let offset = hero::parallax_offset(hero::scroll_progress(rect.top(), rect.height()));
                parallax.set(offset);
            }
        };
        let on_scroll = window_event_listener(ev::scroll, move |_| update_parallax());
        let on_resize = window_event_listener(ev::resize, move |_| update_parallax());
        Effect::new(move |_| {
            if hero_ref.get().is_some() {
                update_parallax();
            }
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    on_cleanup(move || {
        raf.try_update_value(|raf| raf.take());
    });

    let background = hero.background_css();
    let cta_text = hero.cta_text.clone();

    let title_words = words
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            view! {
              <span class="inline-block overflow-hidden">
                <span
                  class="inline-block"
                  style=move || frame.with(|f| f.pose(HeroTarget::TitleWord(index)).css())
                >
                  {word}
                </span>
              </span>
              " "
            }
        })
        .collect_view();

    view! {
      <section
        node_ref=hero_ref
        role="banner"
        aria-label="Hero section showcasing Mary Agency's premium digital experiences"
        class=format!(
          "relative h-screen flex items-center justify-center overflow-hidden bg-black text-white {class}",
        )
      >
        <div
          class="absolute inset-0 z-0"
          role="img"
          aria-label="Creative artistic background representing Mary Agency's authentic digital experiences"
          style=move || frame.with(|f| background_style(&background, &f.pose(HeroTarget::BackgroundImage)))
        >
          <div class="absolute inset-0 bg-black/40" aria-hidden="true"></div>
        </div>

        <div
          class="absolute inset-0 flex items-center justify-center z-10 pointer-events-none"
          aria-hidden="true"
          style=move || {
            let offset = parallax.get();
            frame.with(|f| f.pose(HeroTarget::Watermark).offset_px(offset).css())
          }
        >
          <span class="text-[20vw] font-display font-bold text-white/10 select-none">
            {hero.background_text}
          </span>
        </div>

        <div class="relative z-20 text-center max-w-4xl mx-auto px-6">
          <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold uppercase tracking-wide mb-8 leading-tight">
            <span class="sr-only">"Mary Agency - "</span>
            {title_words}
          </h1>

          <a
            href=hero.cta_href
            aria-label=cta_label(&cta_text)
            class="inline-block px-8 py-4 border-2 border-white text-white uppercase tracking-wider \
                   text-sm font-medium hover:bg-white hover:text-black transition-all duration-300 \
                   transform hover:scale-105 focus:outline-none focus:ring-2 focus:ring-white \
                   focus:ring-offset-2 focus:ring-offset-black focus:scale-105"
            style=move || frame.with(|f| f.pose(HeroTarget::Cta).css())
          >
            {cta_text.clone()}
            <span class="sr-only">" - View our portfolio"</span>
          </a>
        </div>

        <div
          class="absolute bottom-8 left-1/2 transform -translate-x-1/2 z-20"
          role="img"
          aria-label="Scroll down indicator"
        >
          <div class="flex flex-col items-center">
            <div class="w-px h-16 bg-white/60 mb-4 animate-pulse" aria-hidden="true"></div>
            <span class="text-white/60 text-xs uppercase tracking-wider rotate-90 origin-center">
              <span class="sr-only">"Scroll down to see more content"</span>
              <span aria-hidden="true">"Scroll"</span>
            </span>
          </div>
        </div>
      </section>
    }
}

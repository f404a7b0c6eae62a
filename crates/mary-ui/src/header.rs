//! Site header.

use leptos::{ev, prelude::*};
use mary_core::{
    CloseReason, HeaderState, NavItem, TextTone, config::ContactInfo, header::nav_link_class,
};

use crate::{burger::BurgerButton, dom, drawer::MobileDrawer};

fn logo_class(tone: TextTone, compact: bool) -> String {
    let size = if compact { "text-2xl" } else { "text-3xl" };
    format!(
        "{size} font-display font-bold tracking-tight leading-none {}",
        tone.text_class()
    )
}

fn tagline_class(tone: TextTone) -> String {
    format!(
        "text-xs uppercase tracking-widest mt-1 font-sans {}",
        tone.muted_text_class()
    )
}

/// Logo and tagline.
#[component]
pub fn Brand(
    #[prop(into)] logo_text: String,
    #[prop(into)] tagline: String,
    #[prop(into, default = TextTone::Light.into())] tone: Signal<TextTone>,
    /// Smaller logo, as used in the drawer.
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    view! {
      <div class="text-left">
        <div class=move || logo_class(tone.get(), compact)>{logo_text}</div>
        <div class=move || tagline_class(tone.get())>{tagline}</div>
      </div>
    }
}

/// Fixed header with desktop navigation and the mobile drawer.
///
/// The bar is transparent over the first section and turns solid once
/// the page scrolls past the threshold.
#[component]
pub fn Header(
    /// Top-level navigation, rendered as given.
    #[prop(into)]
    items: Signal<Vec<NavItem>>,
    /// Whether the page allows a transparent header.
    #[prop(default = true)]
    transparent: bool,
    /// Drawer footer details.
    #[prop(optional)]
    contact: ContactInfo,
    #[prop(into, default = "mary".to_string())] logo_text: String,
    #[prop(into, default = "BUSINESS GRAPHIC".to_string())] tagline: String,
    /// Extra classes for the `<header>`.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let state = RwSignal::new(HeaderState::new(transparent));

    // A page restored mid-scroll renders solid straight away.
    state.maybe_update(|state| state.on_scroll(dom::scroll_y()));

    let scroll = window_event_listener(ev::scroll, move |_| {
        let offset = dom::scroll_y();
        state.maybe_update(|state| state.on_scroll(offset));
    });
    on_cleanup(move || scroll.remove());

    let visual = Memo::new(move |_| state.with(HeaderState::visual));
    let tone = Signal::derive(move || visual.get().text);
    let menu_open = Signal::derive(move || state.with(HeaderState::menu_open));

    let close = Callback::new(move |reason: CloseReason| {
        state.maybe_update(|state| state.close_menu(reason));
    });
    let toggle = Callback::new(move |()| {
        state.update(HeaderState::toggle_menu);
        log::debug!("mobile menu toggled");
    });

    let logo_drawer = logo_text.clone();
    let tagline_drawer = tagline.clone();

    view! {
      <header class=move || format!("{} {class}", visual.get().class()).trim_end().to_string()>
        <div class="relative w-full px-8 py-4 md:px-12 md:py-6">
          <a
            href="/"
            class="absolute left-8 top-4 md:left-12 md:top-6"
            on:click=move |_| close.run(CloseReason::Link)
          >
            <Brand logo_text=logo_text tagline=tagline tone=tone />
          </a>

          <nav class="hidden md:flex justify-center items-end h-full" aria-label="Navigation principale">
            <ul class="flex items-baseline space-x-12">
              <For
                each=move || items.get()
                key=|item| (item.href.clone(), item.active)
                children=move |item| {
                  let active = item.active;
                  view! {
                    <li>
                      <a
                        href=item.href.clone()
                        class=move || nav_link_class(active, tone.get())
                        aria-current=item.aria_current()
                        on:click=move |_| close.run(CloseReason::Link)
                      >
                        {item.label.clone()}
                      </a>
                    </li>
                  }
                }
              />

            </ul>
          </nav>

          <div class="absolute right-8 top-4 md:right-12 md:top-6 md:hidden">
            <BurgerButton is_open=menu_open on_toggle=toggle tone=tone />
          </div>
        </div>
      </header>

      <MobileDrawer
        is_open=menu_open
        on_close=close
        items=items
        contact=contact
        logo_text=logo_drawer
        tagline=tagline_drawer
        class="md:hidden"
      />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_classes_follow_tone() {
        assert!(logo_class(TextTone::Light, false).contains("text-3xl"));
        assert!(logo_class(TextTone::Light, false).ends_with("text-white"));
        assert!(logo_class(TextTone::Dark, true).contains("text-2xl"));
        assert!(logo_class(TextTone::Dark, true).ends_with("text-black"));
        assert!(tagline_class(TextTone::Light).ends_with("text-white/60"));
        assert!(tagline_class(TextTone::Dark).ends_with("text-black/60"));
    }
}

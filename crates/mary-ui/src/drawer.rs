//! Off-canvas mobile navigation.

use leptos::{ev, prelude::*};
use mary_core::{
    CloseReason, DrawerEffects, DrawerTransition, NavItem, TextTone,
    config::ContactInfo,
    drawer::{self, backdrop_class, entry_class, entry_style, panel_class},
};

use crate::{
    dom::{self, BodyOverflow, WindowListener},
    header::Brand,
};

fn link_class(active: bool) -> &'static str {
    if active {
        "block text-2xl font-condensed font-semibold uppercase tracking-wider \
         transition-colors duration-300 leading-tight hover:text-white text-white"
    } else {
        "block text-2xl font-condensed font-semibold uppercase tracking-wider \
         transition-colors duration-300 leading-tight hover:text-white text-white/70"
    }
}

fn with_extra(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

/// Slide-in navigation panel driven by the header.
///
/// While open it holds the body scroll lock and an Escape listener; both
/// are released on close and on unmount.
#[component]
pub fn MobileDrawer(
    /// Open state, owned by the parent.
    #[prop(into)]
    is_open: Signal<bool>,
    /// Asks the parent to close the drawer.
    on_close: Callback<CloseReason>,
    /// Navigation entries, in display order.
    #[prop(into)]
    items: Signal<Vec<NavItem>>,
    /// Address and phone shown in the footer.
    contact: ContactInfo,
    #[prop(into, default = "mary".to_string())] logo_text: String,
    #[prop(into, default = "BUSINESS GRAPHIC".to_string())] tagline: String,
    /// Extra classes for the backdrop and panel.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let effects = StoredValue::new_local(DrawerEffects::<BodyOverflow, WindowListener>::new(
        dom::body_scroll_lock(),
    ));

    Effect::new(move |_| {
        let open = is_open.get();
        effects.update_value(|effects| {
            let transition = effects.sync(open, || {
                WindowListener::new(window_event_listener(ev::keydown, move |ev| {
                    if drawer::key_requests_close(&ev.key(), is_open.get_untracked()) {
                        on_close.run(CloseReason::Escape);
                    }
                }))
            });
            if transition != DrawerTransition::Unchanged {
                log::debug!("mobile drawer {transition:?}");
            }
        });
    });

    on_cleanup(move || {
        effects.try_update_value(|effects| effects.release());
    });

    let [street, city] = contact.address.lines();
    let tel_href = contact.tel_href();
    let telephone = contact.telephone_display.clone();
    let backdrop_extra = class.clone();

    view! {
      <div
        class=move || with_extra(backdrop_class(is_open.get()), &backdrop_extra)
        on:click=move |_| on_close.run(CloseReason::Backdrop)
        aria-hidden="true"
      ></div>

      <div
        class=move || with_extra(panel_class(is_open.get()), &class)
        role="dialog"
        aria-modal="true"
        aria-label="Menu de navigation mobile"
        aria-hidden=move || (!is_open.get()).then_some("true")
      >
        <div class="flex items-center justify-between p-8 border-b border-white/10">
          <Brand logo_text=logo_text tagline=tagline tone=TextTone::Light compact=true />
        </div>

        <nav class="flex-1 px-8 py-12" aria-label="Navigation mobile principale">
          <ul class="space-y-8" role="menubar" aria-orientation="vertical">
            <For
              each=move || items.get().into_iter().enumerate()
              key=|(_, item)| (item.href.clone(), item.active)
              children=move |(index, item)| {
                view! {
                  <li
                    role="none"
                    class=move || entry_class(is_open.get())
                    style=move || entry_style(index, is_open.get())
                  >
                    <a
                      href=item.href.clone()
                      role="menuitem"
                      aria-current=item.aria_current()
                      class=link_class(item.active)
                      on:click=move |_| on_close.run(CloseReason::Link)
                    >
                      {item.label.clone()}
                    </a>
                  </li>
                }
              }
            />

          </ul>
        </nav>

        <footer class="p-8 border-t border-white/10">
          <address class="text-white/40 text-sm font-sans not-italic">
            <p class="mb-2">{street}</p>
            <p class="mb-2">{city}</p>
            <p>
              <a
                href=tel_href
                class="hover:text-white transition-colors"
                aria-label="Appeler Mary Agency"
              >
                {telephone}
              </a>
            </p>
          </address>
        </footer>
      </div>
    }
}

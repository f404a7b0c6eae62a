//! Burger menu toggle.

use leptos::prelude::*;
use mary_core::{
    BurgerSize, TextTone,
    burger::{self, Bar},
};

fn button_class(size: BurgerSize, extra: &str) -> String {
    format!(
        "relative flex flex-col justify-center items-center transition-all duration-300 \
         ease-out hover:scale-105 focus:outline-none focus:scale-105 {} {extra}",
        size.box_class()
    )
    .trim_end()
    .to_string()
}

fn bar_class(size: BurgerSize, tone: TextTone) -> String {
    format!(
        "absolute transition-all duration-300 ease-out origin-center {} {} {}",
        tone.fill_class(),
        size.bar_height_class(),
        size.bar_width_class()
    )
}

/// Two-bar toggle that crosses into an X while open.
///
/// Activation only reports through `on_toggle`; the open state belongs to
/// the caller. Enter and Space come with the native button.
#[component]
pub fn BurgerButton(
    /// Whether the controlled menu is open.
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called on every activation.
    on_toggle: Callback<()>,
    /// Toggle size.
    #[prop(optional)]
    size: BurgerSize,
    /// Bar colour.
    #[prop(into, default = TextTone::Light.into())]
    tone: Signal<TextTone>,
    /// Extra classes for the button.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let bar_style = move |bar: Bar| format!("transform: {}", burger::bar_transform(bar, is_open.get()));

    view! {
      <button
        type="button"
        class=button_class(size, &class)
        aria-label=move || burger::aria_label(is_open.get())
        aria-expanded=move || if is_open.get() { "true" } else { "false" }
        on:click=move |_| on_toggle.run(())
      >
        <span class=move || bar_class(size, tone.get()) style=move || bar_style(Bar::Top)></span>
        <span class=move || bar_class(size, tone.get()) style=move || bar_style(Bar::Bottom)></span>
      </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_sizes() {
        assert!(button_class(BurgerSize::Small, "").contains("w-5 h-4"));
        assert!(button_class(BurgerSize::Large, "").contains("w-9 h-7"));
        assert!(button_class(BurgerSize::Medium, "md:hidden").ends_with("w-7 h-6 md:hidden"));
        assert!(!button_class(BurgerSize::Medium, "").ends_with(' '));
    }

    #[test]
    fn test_bar_class_follows_tone_and_size() {
        let light = bar_class(BurgerSize::Medium, TextTone::Light);
        assert!(light.contains("bg-white"));
        assert!(light.contains("h-px"));
        assert!(light.contains("w-7"));

        let dark = bar_class(BurgerSize::Small, TextTone::Dark);
        assert!(dark.contains("bg-black"));
        assert!(dark.contains("h-0.5"));
        assert!(dark.contains("w-5"));
    }
}

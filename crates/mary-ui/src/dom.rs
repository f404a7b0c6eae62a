//! Browser adapters.
//!
//! Everything here degrades to a no-op when the capability is missing
//! (no window, no document, no body), so components render their static
//! presentation instead of failing.

use std::{cell::RefCell, fmt};

use leptos::leptos_dom::helpers::WindowListenerHandle;
use mary_core::{ScrollLock, ScrollLockTarget};

/// Locks page scroll by hiding overflow on `<body>`.
///
/// The inline value present before locking is restored on unlock.
#[derive(Debug, Default)]
pub struct BodyOverflow {
    previous: RefCell<Option<String>>,
}

fn body_style() -> Option<web_sys::CssStyleDeclaration> {
    let body = web_sys::window()?.document()?.body()?;
    Some(body.style())
}

/// Inline overflow value to put back, `None` to remove the property.
fn restored_overflow(previous: Option<String>) -> Option<String> {
    previous.filter(|value| !value.is_empty() && value != "hidden")
}

impl ScrollLockTarget for BodyOverflow {
    fn lock(&self) {
        let Some(style) = body_style() else {
            log::debug!("no document body, scroll lock skipped");
            return;
        };
        let previous = style.get_property_value("overflow").ok();
        *self.previous.borrow_mut() = previous;
        if style.set_property("overflow", "hidden").is_err() {
            log::warn!("failed to lock body scroll");
        }
    }

    fn unlock(&self) {
        let previous = self.previous.borrow_mut().take();
        let Some(style) = body_style() else {
            return;
        };
        let result = match restored_overflow(previous) {
            Some(value) => style.set_property("overflow", &value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if result.is_err() {
            log::warn!("failed to unlock body scroll");
        }
    }
}

thread_local! {
    static BODY_SCROLL_LOCK: ScrollLock<BodyOverflow> = ScrollLock::new(BodyOverflow::default());
}

/// The page-wide body scroll lock. Every holder shares one count.
pub fn body_scroll_lock() -> ScrollLock<BodyOverflow> {
    BODY_SCROLL_LOCK.with(Clone::clone)
}

/// A window event listener that is removed when dropped.
#[must_use = "the listener is removed as soon as this is dropped"]
pub struct WindowListener(Option<WindowListenerHandle>);

impl WindowListener {
    pub fn new(handle: WindowListenerHandle) -> Self {
        Self(Some(handle))
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.remove();
        }
    }
}

impl fmt::Debug for WindowListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowListener")
            .field("attached", &self.0.is_some())
            .finish()
    }
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether the user asked for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .is_some_and(|query| query.matches())
}

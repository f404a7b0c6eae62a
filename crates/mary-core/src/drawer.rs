//! Mobile drawer behaviour.
//!
//! The drawer never changes its own open state; the header owns it. What
//! the drawer does own are the side effects of being open, held in
//! [`DrawerEffects`] so that closing and tearing down release them the
//! same way.

use std::fmt;

use crate::{
    scroll_lock::{ScrollLock, ScrollLockGuard, ScrollLockTarget},
    tokens,
};

/// Whether a key press should ask the parent to close the drawer.
pub fn key_requests_close(key: &str, is_open: bool) -> bool {
    is_open && key == "Escape"
}

/// Enter-transition delay for entry `index`.
///
/// Entries stagger in when the drawer opens and all leave together.
pub fn entry_delay_ms(index: usize, is_open: bool) -> u32 {
    if !is_open {
        return 0;
    }
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    tokens::drawer::ENTRY_STEP_DELAY_MS
        .saturating_mul(index)
        .saturating_add(tokens::drawer::ENTRY_BASE_DELAY_MS)
}

/// Inline style for entry `index`.
pub fn entry_style(index: usize, is_open: bool) -> String {
    format!(
        "transition-delay: {}ms; transition-duration: {}ms",
        entry_delay_ms(index, is_open),
        tokens::drawer::ENTRY_TRANSITION_MS
    )
}

/// Slide/fade state of an entry.
pub fn entry_class(is_open: bool) -> &'static str {
    if is_open {
        "transform transition-all ease-in-out translate-x-0 opacity-100"
    } else {
        "transform transition-all ease-in-out translate-x-8 opacity-0"
    }
}

/// The panel slides fully off-screen when closed but stays mounted.
pub fn panel_class(is_open: bool) -> &'static str {
    if is_open {
        "fixed top-20 right-0 h-[calc(100vh-5rem)] w-80 max-w-[85vw] bg-black z-40 flex flex-col \
         transition-transform duration-700 ease-in-out translate-x-0"
    } else {
        "fixed top-20 right-0 h-[calc(100vh-5rem)] w-80 max-w-[85vw] bg-black z-40 flex flex-col \
         transition-transform duration-700 ease-in-out translate-x-full"
    }
}

pub fn backdrop_class(is_open: bool) -> &'static str {
    if is_open {
        "fixed top-20 left-0 right-0 bottom-0 bg-black/50 backdrop-blur-sm z-30 \
         transition-all duration-700 ease-in-out opacity-100 visible"
    } else {
        "fixed top-20 left-0 right-0 bottom-0 bg-black/50 backdrop-blur-sm z-30 \
         transition-all duration-700 ease-in-out opacity-0 invisible pointer-events-none"
    }
}

/// Outcome of [`DrawerEffects::sync`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTransition {
    Opened,
    Closed,
    Unchanged,
}

struct OpenEffects<T: ScrollLockTarget, K> {
    _listener: K,
    _scroll: ScrollLockGuard<T>,
}

/// Side effects held while the drawer is open.
///
/// `K` is whatever handle keeps the key listener registered; dropping it
/// must remove the listener. Dropping `DrawerEffects` itself releases
/// everything, which covers teardown while open.
pub struct DrawerEffects<T: ScrollLockTarget, K> {
    lock: ScrollLock<T>,
    active: Option<OpenEffects<T, K>>,
}

impl<T: ScrollLockTarget, K> DrawerEffects<T, K> {
    pub fn new(lock: ScrollLock<T>) -> Self {
        Self { lock, active: None }
    }

    /// Bring the effects in line with the parent's `is_open`.
    ///
    /// `listen` is only called on a closed→open transition.
    pub fn sync(&mut self, is_open: bool, listen: impl FnOnce() -> K) -> DrawerTransition {
        match (is_open, self.active.is_some()) {
            (true, false) => {
                let scroll = self.lock.acquire();
                self.active = Some(OpenEffects {
                    _listener: listen(),
                    _scroll: scroll,
                });
                DrawerTransition::Opened
            }
            (false, true) => {
                self.active = None;
                DrawerTransition::Closed
            }
            _ => DrawerTransition::Unchanged,
        }
    }

    /// Release everything regardless of the last known state.
    pub fn release(&mut self) {
        self.active = None;
    }
}

impl<T: ScrollLockTarget, K> fmt::Debug for DrawerEffects<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerEffects")
            .field("lock", &self.lock)
            .field("active", &self.active.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::scroll_lock::testing::RecordingTarget;

    /// Stand-in for a registered key listener.
    struct Listener(Rc<Cell<usize>>);

    impl Drop for Listener {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn listener_factory(
        registered: &Rc<Cell<usize>>,
        removed: &Rc<Cell<usize>>,
    ) -> impl FnOnce() -> Listener {
        let registered = Rc::clone(registered);
        let removed = Rc::clone(removed);
        move || {
            registered.set(registered.get() + 1);
            Listener(removed)
        }
    }

    #[test]
    fn test_open_close_cycle() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let (registered, removed) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let mut effects = DrawerEffects::new(lock.clone());

        let step = effects.sync(true, listener_factory(&registered, &removed));
        assert_eq!(step, DrawerTransition::Opened);
        assert!(lock.target().locked.get());
        assert_eq!(registered.get(), 1);

        let step = effects.sync(false, listener_factory(&registered, &removed));
        assert_eq!(step, DrawerTransition::Closed);
        assert!(!lock.target().locked.get());
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn test_repeated_open_acquires_once() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let (registered, removed) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let mut effects = DrawerEffects::new(lock.clone());

        effects.sync(true, listener_factory(&registered, &removed));
        let step = effects.sync(true, listener_factory(&registered, &removed));
        assert_eq!(step, DrawerTransition::Unchanged);
        assert_eq!(lock.holders(), 1);
        assert_eq!(registered.get(), 1);

        assert_eq!(
            effects.sync(false, listener_factory(&registered, &removed)),
            DrawerTransition::Closed
        );
        assert_eq!(
            effects.sync(false, listener_factory(&registered, &removed)),
            DrawerTransition::Unchanged
        );
        assert_eq!(lock.target().unlocks.get(), 1);
    }

    #[test]
    fn test_teardown_while_open_releases() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let (registered, removed) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        {
            let mut effects = DrawerEffects::new(lock.clone());
            effects.sync(true, listener_factory(&registered, &removed));
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert!(!lock.target().locked.get());
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn test_two_drawers_share_the_lock() {
        let lock = ScrollLock::new(RecordingTarget::default());
        let (registered, removed) = (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)));
        let mut first = DrawerEffects::new(lock.clone());
        let mut second = DrawerEffects::new(lock.clone());

        first.sync(true, listener_factory(&registered, &removed));
        second.sync(true, listener_factory(&registered, &removed));
        first.release();
        assert!(lock.target().locked.get());
        second.release();
        assert!(!lock.target().locked.get());
        assert_eq!(removed.get(), 2);
    }

    #[test]
    fn test_escape_only_when_open() {
        assert!(key_requests_close("Escape", true));
        assert!(!key_requests_close("Escape", false));
        assert!(!key_requests_close("Enter", true));
    }

    #[test]
    fn test_entry_stagger() {
        assert_eq!(entry_delay_ms(0, true), 200);
        assert_eq!(entry_delay_ms(1, true), 300);
        assert_eq!(entry_delay_ms(3, true), 500);
        assert_eq!(entry_delay_ms(3, false), 0);
        assert_eq!(entry_style(2, true), "transition-delay: 400ms; transition-duration: 500ms");
    }

    #[test]
    fn test_closed_panel_is_off_screen() {
        assert!(panel_class(false).contains("translate-x-full"));
        assert!(panel_class(true).contains("translate-x-0"));
        assert!(backdrop_class(false).contains("pointer-events-none"));
        assert!(entry_class(false).contains("opacity-0"));
    }
}

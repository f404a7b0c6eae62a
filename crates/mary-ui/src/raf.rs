//! `requestAnimationFrame` tick source.
//!
//! [`RafLoop`] calls back once per animation frame with the
//! [`DOMHighResTimeStamp`][mdn] in milliseconds, and keeps re-registering
//! itself until the callback asks to stop, [`stop`](RafLoop::stop) is
//! called or the loop is dropped.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use wasm_bindgen::{JsCast, closure::Closure};

type RafClosure = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop.
pub struct RafLoop {
    inner: Rc<RafInner>,
}

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Kept apart from `callback` so the closure can re-register itself
    /// while the callback is borrowed.
    closure: RefCell<Option<RafClosure>>,

    /// Receives the frame timestamp; returns `false` to end the loop.
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,

    running: Cell<bool>,

    /// Id of the pending request, for cancellation.
    raf_id: Cell<Option<i32>>,
}

fn request_frame(closure: &RafClosure) -> Option<i32> {
    let window = web_sys::window()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        let _ = window.cancel_animation_frame(id);
    }
}

impl RafLoop {
    /// Creates a loop that is **not yet running**.
    pub fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(None),
            }),
        }
    }

    /// Starts the loop.
    ///
    /// Returns `false` when the browser offers no `requestAnimationFrame`;
    /// the loop is then left stopped. Starting a running loop is a no-op.
    pub fn start(&self) -> bool {
        if self.inner.running.get() {
            return true;
        }

        if self.inner.closure.borrow().is_none() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if !inner.running.get() {
                    return;
                }
                inner.raf_id.set(None);

                let keep_going = inner.callback.borrow_mut()(timestamp_ms);
                if !keep_going {
                    inner.running.set(false);
                    return;
                }

                if inner.running.get()
                    && let Some(ref closure) = *inner.closure.borrow()
                {
                    let id = request_frame(closure);
                    if id.is_none() {
                        inner.running.set(false);
                    }
                    inner.raf_id.set(id);
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        let id = self.inner.closure.borrow().as_ref().and_then(request_frame);
        let Some(id) = id else {
            log::debug!("requestAnimationFrame unavailable");
            return false;
        };
        self.inner.raf_id.set(Some(id));
        self.inner.running.set(true);
        true
    }

    /// Stops the loop and cancels the pending frame. Can be restarted.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.raf_id.take() {
            cancel_frame(id);
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // The closure holds an `Rc` to `inner`; dropping it breaks the cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .finish()
    }
}

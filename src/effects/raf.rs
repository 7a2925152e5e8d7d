//! `requestAnimationFrame` loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Calls a callback once per animation frame until stopped or dropped.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    running: Cell<bool>,
    frame_id: Cell<i32>,
}

fn request_frame(closure: &FrameClosure) -> Option<i32> {
    let window = web_sys::window()?;
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(?err, "requestAnimationFrame failed");
            None
        }
    }
}

impl FrameLoop {
    /// Not running until [`start`](Self::start). `callback` receives the
    /// frame timestamp in milliseconds.
    pub fn new(callback: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                frame_id: Cell::new(0),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            if !inner.running.get() {
                return;
            }
            inner.callback.borrow_mut()(timestamp);

            if !inner.running.get() {
                return;
            }
            if let Some(closure) = inner.closure.borrow().as_ref() {
                match request_frame(closure) {
                    Some(id) => inner.frame_id.set(id),
                    None => inner.running.set(false),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        match request_frame(&closure) {
            Some(id) => self.inner.frame_id.set(id),
            None => self.inner.running.set(false),
        }
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.inner.frame_id.get());
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Breaks the closure -> inner -> closure cycle.
        self.inner.closure.borrow_mut().take();
    }
}

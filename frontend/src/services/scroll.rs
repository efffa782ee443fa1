//! Scoped scroll-position subscription.
//!
//! A [`ScrollSubscription`] registers a handler with a [`ScrollSource`] when it
//! is acquired and removes it when it is dropped, so a component that hands
//! the guard to `on_cleanup` can never receive scroll events after unmount.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::{SiteError, SiteResult};

/// Something that reports vertical scroll offsets to registered handlers.
pub trait ScrollSource {
    /// Token identifying one registration.
    type Handle;

    fn subscribe(&self, handler: Box<dyn FnMut(f64)>) -> SiteResult<Self::Handle>;

    fn unsubscribe(&self, handle: Self::Handle) -> SiteResult<()>;
}

/// Live registration of a scroll handler. Released on drop.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Register `handler` with `source`.
    pub fn acquire(source: S, handler: impl FnMut(f64) + 'static) -> SiteResult<Self> {
        let handle = source.subscribe(Box::new(handler))?;
        Ok(Self {
            source,
            handle: Some(handle),
        })
    }

    /// Release the registration now instead of at drop.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            match self.source.unsubscribe(handle) {
                Ok(()) => log::debug!("🔕 Scroll listener removed"),
                Err(e) => log::warn!("Could not remove scroll listener: {}", e),
            }
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

/// The browser window as a scroll source.
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new() -> SiteResult<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(SiteError::NoWindow)
    }
}

impl ScrollSource for WindowScroll {
    type Handle = Closure<dyn FnMut()>;

    fn subscribe(&self, mut handler: Box<dyn FnMut(f64)>) -> SiteResult<Self::Handle> {
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move || {
            handler(window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback(
                "scroll",
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| SiteError::Listener(format!("{:?}", e)))?;

        Ok(callback)
    }

    fn unsubscribe(&self, callback: Self::Handle) -> SiteResult<()> {
        // The closure is freed when `callback` goes out of scope here
        self.window
            .remove_event_listener_with_callback(
                "scroll",
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| SiteError::Listener(format!("{:?}", e)))
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeWindow;
    use super::*;
    use crate::NavState;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracked_state(window: &FakeWindow) -> (Rc<RefCell<NavState>>, ScrollSubscription<FakeWindow>) {
        let state = Rc::new(RefCell::new(NavState::default()));
        let sink = state.clone();
        let sub = ScrollSubscription::acquire(window.clone(), move |offset| {
            sink.borrow_mut().on_scroll(offset);
        })
        .unwrap();
        (state, sub)
    }

    #[test]
    fn test_events_reach_state_while_subscribed() {
        let window = FakeWindow::default();
        let (state, _sub) = tracked_state(&window);

        assert_eq!(window.listener_count(), 1);

        window.emit(51.0);
        assert!(state.borrow().is_scrolled);
        window.emit(50.0);
        assert!(!state.borrow().is_scrolled);
    }

    #[test]
    fn test_drop_removes_listener() {
        let window = FakeWindow::default();
        let (state, sub) = tracked_state(&window);

        window.emit(200.0);
        drop(sub);
        assert_eq!(window.listener_count(), 0);

        // No stale update after release
        window.emit(0.0);
        assert!(state.borrow().is_scrolled);
    }

    #[test]
    fn test_cancel_releases_once() {
        let window = FakeWindow::default();
        let (state, sub) = tracked_state(&window);
        let (_other_state, _other) = tracked_state(&window);
        assert_eq!(window.listener_count(), 2);

        sub.cancel();
        assert_eq!(window.listener_count(), 1);

        window.emit(75.0);
        assert!(!state.borrow().is_scrolled);
    }

    #[test]
    fn test_acquire_failure_is_reported() {
        let window = FakeWindow {
            reject: true,
            ..FakeWindow::default()
        };
        let result = ScrollSubscription::acquire(window.clone(), |_| {});

        assert!(matches!(result, Err(SiteError::Listener(_))));
        assert_eq!(window.listener_count(), 0);
    }
}

//! Viewport visibility detection for entrance animations.
//!
//! Browser-only: wraps `IntersectionObserver`. When no observer can be
//! attached callers show content immediately.
//!
//! An attached observer lives in an [`ObserverGuard`]. Dropping the guard
//! disconnects the observer before its callback is released, so unmounted
//! views leave nothing registered with the browser.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Portion of an element that must be on screen before it counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// An observer that stops delivering callbacks once disconnected.
pub trait Disconnect {
    fn disconnect(&self);
}

/// Owns an observer together with the callback it invokes.
///
/// Disconnects on drop; the callback is dropped only afterwards.
pub struct ObserverGuard<O: Disconnect, C> {
    observer: O,
    _callback: C,
}

impl<O: Disconnect, C> ObserverGuard<O, C> {
    pub fn new(observer: O, callback: C) -> Self {
        Self { observer, _callback: callback }
    }
}

impl<O: Disconnect, C> Drop for ObserverGuard<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Disconnect for web_sys::IntersectionObserver {
    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

#[cfg(feature = "hydrate")]
type VisibilityCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// Live viewport observer for one element.
#[cfg(feature = "hydrate")]
pub type VisibilityWatch = ObserverGuard<web_sys::IntersectionObserver, VisibilityCallback>;

/// Call `on_visible` once, the first time `el` scrolls into view.
///
/// Returns `None` when no observer could be attached. The observer stays
/// registered only as long as the returned guard is held.
#[cfg(feature = "hydrate")]
pub fn observe_once(el: &web_sys::Element, on_visible: impl Fn() + 'static) -> Option<VisibilityWatch> {
    use wasm_bindgen::JsCast as _;

    let callback = VisibilityCallback::new(move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if intersecting {
            observer.disconnect();
            on_visible();
        }
    });

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(el);
    Some(ObserverGuard::new(observer, callback))
}

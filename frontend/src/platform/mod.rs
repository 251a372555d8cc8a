//! Browser bindings for the navigation controller.
//!
//! Everything here degrades to a no-op when there is no `window`, so the
//! controller simply keeps its initial state.

pub mod logger;

use std::time::Duration;

use gloo_timers::callback::Timeout;
use navigation::{Scheduler, Subscription};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, ScrollBehavior, ScrollToOptions};

/// [`Scheduler`] backed by `setTimeout`. Dropping the returned [`Timeout`]
/// clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Task = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}

/// Register a passive listener on `window`.
///
/// The listener stays attached for as long as the returned subscription is
/// alive. Returns `None` when there is no window to listen on.
pub fn listen_window(event: &'static str, handler: impl Fn() + 'static) -> Option<Subscription> {
    let window = web_sys::window()?;

    let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .is_err()
    {
        log::warn!("could not listen for window {} events", event);
        return None;
    }
    log::debug!("listening for window {} events", event);

    Some(Subscription::new(move || {
        let _ = window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        log::debug!("stopped listening for window {} events", event);
        drop(closure);
    }))
}

/// Current vertical scroll offset, 0 without a window.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Current viewport width in CSS pixels, 0 without a window.
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

//! Browser glue reporting which content section is in view, built on the
//! host `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::ui_state::SectionId;

/// Fraction of a section's height that must intersect the viewport before
/// it counts as "in view".
pub const VISIBLE_FRACTION: f64 = 0.4;

/// Observes registered section elements and reports each one that enters the
/// viewport. Entries that leave the viewport are ignored, so the most
/// recently entered section stays reported while scrolling through the gap
/// between two sections.
///
/// The tracker owns both the observer and its callback closure; dropping it
/// disconnects the observer and releases the closure, so no callback can
/// fire against a torn-down view. Callers keep it alive for exactly the
/// lifetime of the observed content.
pub struct SectionTracker {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl SectionTracker {
    pub fn new(mut on_enter: impl FnMut(SectionId) + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                // Elements with ids outside the fixed section set are not
                // ours to report.
                if let Some(id) = SectionId::from_anchor(&entry.target().id()) {
                    on_enter(id);
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBLE_FRACTION));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    #[allow(dead_code)]
    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for SectionTracker {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

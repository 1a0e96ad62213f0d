//! Browser-side plumbing: section geometry, the window scroll subscription and
//! smooth in-page navigation.

use leptos::{ev, prelude::*, web_sys::HtmlElement};
use wasm_bindgen::JsCast;

use crate::scroll::{LayoutProvider, ScrollState, ScrollTracker, Section, SectionBounds};

/// Reads section geometry off the rendered page.
pub struct DomLayout;

impl LayoutProvider for DomLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }
}

pub struct ScrollTracking {
    pub offset: ReadSignal<f64>,
    pub state: Memo<ScrollState>,
}

fn window_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Subscribes to window scrolling for the lifetime of the calling component.
/// The listener is removed when the owner is cleaned up.
pub fn use_scroll_tracking() -> ScrollTracking {
    let (offset, set_offset) = signal(0.0_f64);
    let tracker = RwSignal::new(ScrollTracker::new());

    let handle = window_event_listener(ev::scroll, move |_| set_offset.set(window_offset()));
    on_cleanup(move || handle.remove());

    // pick up a restored scroll position before the first event
    Effect::new(move |_| set_offset.set(window_offset()));
    Effect::new(move |_| {
        let offset = offset.get();
        tracker.update(|t| {
            t.on_scroll(offset, &DomLayout);
        });
    });

    let state = Memo::new(move |_| tracker.with(ScrollTracker::state));
    ScrollTracking { offset, state }
}

/// Scrolls the section into view. Smoothness comes from the stylesheet's
/// `scroll-behavior`.
pub fn scroll_to(section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element for section {section}"),
    }
}

//! Browser Services
//!
//! Browser-backed implementations of the domain capabilities, plus the few
//! DOM helpers the app needs.

mod storage;
mod uploader;

pub use storage::{open_storage, BrowserStorage};
pub use uploader::RandomStockUploader;

/// Smooth-scroll a section into view by element id
pub fn scroll_to(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("[DOM] No element #{}", id);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll back to the top of the page
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

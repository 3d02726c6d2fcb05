/// Publish Sort - content script for the Suwayomi library view
/// Built with Rust + WASM + Yew
///
/// Reorders the library grid by each entry's most recent chapter date and
/// keeps a sort button in the toolbar across re-renders.

mod browser;
mod injector;
mod item_info;
mod operations;
mod page;
mod published;
mod selectors;
mod watcher;
pub mod ui;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::browser::BrowserPage;
use crate::operations::{SortOrder, sort_grid};
use crate::selectors::Selectors;
use crate::watcher::Watcher;

thread_local! {
    static SESSION: RefCell<Option<Watcher<BrowserPage>>> = const { RefCell::new(None) };
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Start watching the page. `selectors` may override any of the default
/// selectors (`gridItems`, `titleLink`, `chapterDate`, `toolbar`).
#[wasm_bindgen]
pub fn install(selectors: JsValue) -> Result<(), JsValue> {
    if SESSION.with(|session| session.borrow().is_some()) {
        log::warn!("Publish sort already installed on this page");
        return Ok(());
    }

    let selectors: Selectors = if selectors.is_null() || selectors.is_undefined() {
        Selectors::default()
    } else {
        serde_wasm_bindgen::from_value(selectors)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse selectors: {:?}", e)))?
    };

    let page = BrowserPage::from_window().map_err(|e| JsValue::from_str(&e))?;
    let watcher = Watcher::start(page, selectors).map_err(|e| JsValue::from_str(&e))?;

    SESSION.with(|session| *session.borrow_mut() = Some(watcher));
    log::info!("Publish sort installed");
    Ok(())
}

/// Sort the library grid now. Returns the number of entries moved.
#[wasm_bindgen]
pub fn sort_by_published(descending: bool) -> usize {
    let order = SortOrder::from(descending);

    let installed = SESSION.with(|session| session.borrow().as_ref().map(|watcher| watcher.sort(order)));
    if let Some(moved) = installed {
        return moved;
    }

    match BrowserPage::from_window() {
        Ok(page) => sort_grid(&page, &Selectors::default(), order),
        Err(e) => {
            log::warn!("Cannot sort: {}", e);
            0
        }
    }
}

/// Per-entry data read off the library grid
use chrono::{DateTime, Utc};

use crate::page::Page;
use crate::published::{published_or_epoch, resolve_date_text};
use crate::selectors::Selectors;

/// A grid entry and its resolved publish date
///
/// Borrowed from the page for the duration of one sort; never stored.
#[derive(Debug)]
pub struct ItemInfo<'a, E> {
    pub element: &'a E,
    pub title: String,
    pub published: DateTime<Utc>,
}

impl<'a, E> ItemInfo<'a, E> {
    pub fn new(element: &'a E, title: String, published: DateTime<Utc>) -> ItemInfo<'a, E> {
        ItemInfo {
            element,
            title,
            published,
        }
    }
}

/// Read the title and newest chapter date of one grid item
pub fn extract_item_info<'a, P: Page>(
    page: &P,
    element: &'a P::Element,
    selectors: &Selectors,
) -> ItemInfo<'a, P::Element> {
    let title = page
        .query_within(element, &selectors.title_link)
        .and_then(|link| page.text_content(&link))
        .map(|t| t.trim().to_string())
        .unwrap_or_default();

    let date_text = match page.query_within(element, &selectors.chapter_date) {
        Some(date_el) => resolve_date_text(
            page.attribute(&date_el, "datetime"),
            page.text_content(&date_el),
        ),
        None => String::new(),
    };

    ItemInfo::new(element, title, published_or_epoch(&date_text))
}

/// Grid operations: ordering entries by publish date

use crate::item_info::{ItemInfo, extract_item_info};
use crate::page::Page;
use crate::selectors::Selectors;

/// Direction of a publish-date sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest chapter first
    #[default]
    Descending,
    Ascending,
}

impl From<bool> for SortOrder {
    fn from(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Sort entries by publish date (stable: equal dates keep their order)
pub fn sort_items<E>(items: &mut [ItemInfo<'_, E>], order: SortOrder) {
    match order {
        SortOrder::Descending => items.sort_by(|a, b| b.published.cmp(&a.published)),
        SortOrder::Ascending => items.sort_by(|a, b| a.published.cmp(&b.published)),
    }
}

/// Reorder the live library grid by publish date.
///
/// The container is the parent of the first grid item. Appending an
/// attached element moves it to the end, so appending every item in
/// target order leaves the container in target order.
///
/// Returns how many items were moved; 0 when there is no grid.
pub fn sort_grid<P: Page>(page: &P, selectors: &Selectors, order: SortOrder) -> usize {
    let Some(grid) = page
        .query(&selectors.grid_items)
        .and_then(|first| page.parent(&first))
    else {
        log::debug!("No library grid on page, nothing to sort");
        return 0;
    };

    let elements = page.query_all(&selectors.grid_items);
    let mut items: Vec<ItemInfo<'_, P::Element>> = elements
        .iter()
        .map(|el| extract_item_info(page, el, selectors))
        .collect();

    sort_items(&mut items, order);

    let mut moved = 0;
    for item in &items {
        log::trace!("{} @ {}", item.title, item.published);
        match page.append_child(&grid, item.element) {
            Ok(()) => moved += 1,
            Err(e) => log::warn!("Failed to move '{}': {}", item.title, e),
        }
    }

    log::debug!("Sorted {} library entries ({:?})", moved, order);
    moved
}

/// Re-runs the injector whenever the host page re-renders
use std::cell::RefCell;
use std::rc::Rc;

use crate::injector::{InjectOutcome, Injector};
use crate::operations::{SortOrder, sort_grid};
use crate::page::Page;
use crate::selectors::Selectors;

/// A running page session: the injector plus its change subscription.
///
/// There is no stop: the subscription lasts as long as the page.
pub struct Watcher<P: Page> {
    page: P,
    selectors: Rc<Selectors>,
    injector: Rc<RefCell<Injector<P>>>,
}

impl<P: Page> Watcher<P> {
    /// Subscribe to structural changes and inject once right away
    pub fn start(page: P, selectors: Selectors) -> Result<Self, String> {
        let selectors = Rc::new(selectors);
        let injector = Rc::new(RefCell::new(Injector::new(page.clone(), Rc::clone(&selectors))));

        let on_change = Rc::clone(&injector);
        page.on_structure_change(Box::new(move || {
            on_change.borrow_mut().ensure_control();
        }))
        .map_err(|e| format!("Failed to observe page: {}", e))?;

        let watcher = Watcher {
            page,
            selectors,
            injector,
        };
        watcher.refresh();
        Ok(watcher)
    }

    /// Run the injector outside of a change notification
    pub fn refresh(&self) -> InjectOutcome {
        self.injector.borrow_mut().ensure_control()
    }

    pub fn sort(&self, order: SortOrder) -> usize {
        sort_grid(&self.page, &self.selectors, order)
    }
}

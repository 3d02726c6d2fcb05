/// Keeps exactly one sort control in the host toolbar
use std::rc::Rc;

use crate::operations::{SortOrder, sort_grid};
use crate::page::Page;
use crate::selectors::{BUTTON_LABEL, Selectors};

/// Result of one injection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    NoToolbar,
    AlreadyInjected,
    Injected,
    Failed,
}

/// Tracks which toolbar instances already carry a control.
///
/// The set is keyed by element identity and pruned of detached toolbars
/// on every call, so a toolbar the host swaps out gets a fresh control
/// while the one in place is never doubled.
pub struct Injector<P: Page> {
    page: P,
    selectors: Rc<Selectors>,
    injected: Vec<P::Element>,
}

impl<P: Page> Injector<P> {
    pub fn new(page: P, selectors: Rc<Selectors>) -> Self {
        Injector {
            page,
            selectors,
            injected: Vec::new(),
        }
    }

    pub fn ensure_control(&mut self) -> InjectOutcome {
        self.injected.retain(|toolbar| self.page.is_connected(toolbar));

        let Some(toolbar) = self.page.query(&self.selectors.toolbar) else {
            return InjectOutcome::NoToolbar;
        };

        if self.injected.contains(&toolbar) {
            return InjectOutcome::AlreadyInjected;
        }

        let page = self.page.clone();
        let selectors = Rc::clone(&self.selectors);
        let on_activate: Rc<dyn Fn()> = Rc::new(move || {
            sort_grid(&page, &selectors, SortOrder::Descending);
        });

        match self.page.append_control(&toolbar, BUTTON_LABEL, on_activate) {
            Ok(_) => {
                self.injected.push(toolbar);
                log::debug!(
                    "Injected '{}' control ({} toolbar(s) tracked)",
                    BUTTON_LABEL,
                    self.injected_count()
                );
                InjectOutcome::Injected
            }
            Err(e) => {
                log::warn!("Failed to inject sort control: {}", e);
                InjectOutcome::Failed
            }
        }
    }

    /// Number of toolbars currently tracked as injected
    pub fn injected_count(&self) -> usize {
        self.injected.len()
    }
}

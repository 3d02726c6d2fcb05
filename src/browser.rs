/// `Page` over the real document, via web-sys
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit};
use yew::prelude::*;

use crate::page::Page;
use crate::ui::components::{SortButton, SortButtonProps};

#[derive(Clone)]
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    pub fn from_window() -> Result<BrowserPage, String> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document is unavailable".to_string())?;
        Ok(BrowserPage { document })
    }
}

impl Page for BrowserPage {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document
            .query_selector(selector)
            .unwrap_or_else(|e| {
                log::debug!("Invalid selector '{}': {:?}", selector, e);
                None
            })
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("Invalid selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Option<Element> {
        scope.query_selector(selector).unwrap_or_else(|e| {
            log::debug!("Invalid selector '{}': {:?}", selector, e);
            None
        })
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text_content(&self, element: &Element) -> Option<String> {
        element.text_content()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn is_connected(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), String> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|e| format!("appendChild failed: {:?}", e))
    }

    fn append_control(
        &self,
        container: &Element,
        label: &str,
        on_activate: Rc<dyn Fn()>,
    ) -> Result<Element, String> {
        let host = self
            .document
            .create_element("span")
            .map_err(|e| format!("Failed to create control host: {:?}", e))?;
        container
            .append_child(&host)
            .map_err(|e| format!("Failed to attach control host: {:?}", e))?;

        let props = SortButtonProps {
            label: AttrValue::from(label.to_string()),
            onclick: Callback::from(move |_: MouseEvent| on_activate()),
        };
        yew::Renderer::<SortButton>::with_root_and_props(host.clone(), props).render();

        Ok(host)
    }

    fn on_structure_change(&self, mut callback: Box<dyn FnMut()>) -> Result<(), String> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| "document has no root element".to_string())?;

        let on_mutation = Closure::wrap(Box::new(move |_records: JsValue, _observer: JsValue| {
            callback();
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        let observer = MutationObserver::new(on_mutation.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to create MutationObserver: {:?}", e))?;

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer
            .observe_with_options(&root, &options)
            .map_err(|e| format!("Failed to observe document: {:?}", e))?;

        // Observed for the rest of the page's life
        on_mutation.forget();
        Ok(())
    }
}

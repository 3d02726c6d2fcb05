/// In-memory page used by the unit tests
///
/// Selectors are matched by exact string: each node carries the list of
/// selector strings it answers to. Mutation batches are delivered only
/// when a test calls `flush_mutations`, mirroring the async delivery of
/// a real MutationObserver.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::page::Page;
use crate::selectors::Selectors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Default)]
struct FakeNode {
    tag: String,
    matches: Vec<String>,
    attributes: HashMap<String, String>,
    text: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    on_activate: Option<Rc<dyn Fn()>>,
}

struct FakeDom {
    nodes: Vec<FakeNode>,
    dirty: bool,
    failing_appends: usize,
}

const ROOT: usize = 0;

#[derive(Clone)]
pub struct FakePage {
    dom: Rc<RefCell<FakeDom>>,
    observers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
}

impl FakePage {
    pub fn new() -> Self {
        let root = FakeNode {
            tag: "html".to_string(),
            ..FakeNode::default()
        };
        FakePage {
            dom: Rc::new(RefCell::new(FakeDom {
                nodes: vec![root],
                dirty: false,
                failing_appends: 0,
            })),
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(ROOT)
    }

    pub fn add_element(&self, parent: &NodeId, tag: &str, matches: &[&str]) -> NodeId {
        let mut dom = self.dom.borrow_mut();
        let id = dom.nodes.len();
        dom.nodes.push(FakeNode {
            tag: tag.to_string(),
            matches: matches.iter().map(|m| m.to_string()).collect(),
            parent: Some(parent.0),
            ..FakeNode::default()
        });
        dom.nodes[parent.0].children.push(id);
        dom.dirty = true;
        NodeId(id)
    }

    pub fn add_text_element(&self, parent: &NodeId, tag: &str, matches: &[&str], text: &str) -> NodeId {
        let id = self.add_element(parent, tag, matches);
        self.dom.borrow_mut().nodes[id.0].text = Some(text.to_string());
        id
    }

    pub fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.dom.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    /// Grid container; its children are the grid items
    pub fn add_grid(&self) -> NodeId {
        let root = self.root();
        self.add_element(&root, "div", &[])
    }

    pub fn add_grid_item(
        &self,
        grid: &NodeId,
        selectors: &Selectors,
        title: &str,
        date: Option<&str>,
    ) -> NodeId {
        let item = self.add_element(grid, "div", &[&selectors.grid_items]);
        self.add_text_element(&item, "a", &[&selectors.title_link], title);
        if let Some(date) = date {
            self.add_text_element(&item, "time", &[&selectors.chapter_date], date);
        }
        item
    }

    pub fn add_toolbar(&self, selectors: &Selectors) -> NodeId {
        let root = self.root();
        self.add_element(&root, "header", &[&selectors.toolbar])
    }

    pub fn remove(&self, node: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        if let Some(parent) = dom.nodes[node.0].parent.take() {
            dom.nodes[parent].children.retain(|c| *c != node.0);
        }
        dom.dirty = true;
    }

    pub fn children(&self, node: &NodeId) -> Vec<NodeId> {
        self.dom.borrow().nodes[node.0]
            .children
            .iter()
            .map(|c| NodeId(*c))
            .collect()
    }

    /// Controls appended directly under `node`
    pub fn controls_in(&self, node: &NodeId) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        dom.nodes[node.0]
            .children
            .iter()
            .filter(|c| dom.nodes[**c].on_activate.is_some())
            .map(|c| NodeId(*c))
            .collect()
    }

    /// Controls anywhere in the connected document
    pub fn connected_controls(&self) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        let mut found = Vec::new();
        dom.walk(ROOT, &mut |id| {
            if dom.nodes[id].on_activate.is_some() {
                found.push(NodeId(id));
            }
        });
        found
    }

    /// Titles of the grid's children in their current order
    pub fn titles(&self, grid: &NodeId, selectors: &Selectors) -> Vec<String> {
        self.children(grid)
            .iter()
            .map(|item| {
                self.query_within(item, &selectors.title_link)
                    .and_then(|link| self.text_content(&link))
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Make the next `count` appends (children or controls) fail
    pub fn fail_next_appends(&self, count: usize) {
        self.dom.borrow_mut().failing_appends = count;
    }

    fn take_append_failure(&self) -> bool {
        let mut dom = self.dom.borrow_mut();
        if dom.failing_appends == 0 {
            return false;
        }
        dom.failing_appends -= 1;
        true
    }

    pub fn tag(&self, node: &NodeId) -> String {
        self.dom.borrow().nodes[node.0].tag.clone()
    }

    pub fn click(&self, node: &NodeId) {
        let action = self.dom.borrow().nodes[node.0].on_activate.clone();
        if let Some(action) = action {
            action();
        }
    }

    /// Deliver one pending mutation batch; false when nothing changed
    pub fn flush_mutations(&self) -> bool {
        {
            let mut dom = self.dom.borrow_mut();
            if !dom.dirty {
                return false;
            }
            dom.dirty = false;
        }

        let mut callbacks = std::mem::take(&mut *self.observers.borrow_mut());
        for callback in callbacks.iter_mut() {
            callback();
        }
        let mut observers = self.observers.borrow_mut();
        callbacks.append(&mut observers);
        *observers = callbacks;
        true
    }

    /// Flush until the page stops changing
    pub fn settle(&self) {
        for _ in 0..16 {
            if !self.flush_mutations() {
                return;
            }
        }
        panic!("page never settled");
    }
}

impl FakeDom {
    /// Pre-order walk of the descendants of `from`, excluding `from`
    fn walk(&self, from: usize, visit: &mut dyn FnMut(usize)) {
        for child in &self.nodes[from].children {
            visit(*child);
            self.walk(*child, visit);
        }
    }

    fn first_match(&self, from: usize, selector: &str) -> Option<usize> {
        for child in &self.nodes[from].children {
            if self.nodes[*child].matches.iter().any(|m| m == selector) {
                return Some(*child);
            }
            if let Some(found) = self.first_match(*child, selector) {
                return Some(found);
            }
        }
        None
    }

    fn collect_text(&self, id: usize, out: &mut String) {
        if let Some(text) = &self.nodes[id].text {
            out.push_str(text);
        }
        for child in &self.nodes[id].children {
            self.collect_text(*child, out);
        }
    }
}

impl Page for FakePage {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.dom.borrow().first_match(ROOT, selector).map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let dom = self.dom.borrow();
        let mut found = Vec::new();
        dom.walk(ROOT, &mut |id| {
            if dom.nodes[id].matches.iter().any(|m| m == selector) {
                found.push(NodeId(id));
            }
        });
        found
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        self.dom.borrow().first_match(scope.0, selector).map(NodeId)
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.dom.borrow().nodes[element.0].attributes.get(name).cloned()
    }

    fn text_content(&self, element: &NodeId) -> Option<String> {
        let mut text = String::new();
        self.dom.borrow().collect_text(element.0, &mut text);
        Some(text)
    }

    fn parent(&self, element: &NodeId) -> Option<NodeId> {
        self.dom.borrow().nodes[element.0].parent.map(NodeId)
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        let dom = self.dom.borrow();
        let mut current = element.0;
        while current != ROOT {
            match dom.nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        true
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), String> {
        if parent == child {
            return Err(format!("cannot append {:?} to itself", child));
        }
        if self.take_append_failure() {
            return Err(format!("append of {:?} rejected", child));
        }
        let mut dom = self.dom.borrow_mut();
        if let Some(old) = dom.nodes[child.0].parent.take() {
            dom.nodes[old].children.retain(|c| *c != child.0);
        }
        dom.nodes[child.0].parent = Some(parent.0);
        dom.nodes[parent.0].children.push(child.0);
        dom.dirty = true;
        Ok(())
    }

    fn append_control(
        &self,
        container: &NodeId,
        label: &str,
        on_activate: Rc<dyn Fn()>,
    ) -> Result<NodeId, String> {
        if self.take_append_failure() {
            return Err(format!("control append to {:?} rejected", container));
        }
        let control = self.add_text_element(container, "button", &[], label);
        self.dom.borrow_mut().nodes[control.0].on_activate = Some(on_activate);
        Ok(control)
    }

    fn on_structure_change(&self, callback: Box<dyn FnMut()>) -> Result<(), String> {
        self.observers.borrow_mut().push(callback);
        Ok(())
    }
}

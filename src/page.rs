/// The slice of the host document the sorter and injector work against
use std::rc::Rc;

/// Read/write access to the live page.
///
/// Lookups never fail: a selector that matches nothing (or cannot be
/// parsed) is simply a miss. Only structural writes report errors.
pub trait Page: Clone + 'static {
    /// Handle to a live element; equality is element identity
    type Element: Clone + PartialEq;

    /// First element in document order matching `selector`
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// First descendant of `scope` matching `selector`
    fn query_within(&self, scope: &Self::Element, selector: &str) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn text_content(&self, element: &Self::Element) -> Option<String>;

    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Whether the element is still part of the document tree
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Append `child` as the last child of `parent`, moving it if attached
    fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), String>;

    /// Append a clickable control labelled `label` to `container`.
    /// Returns the element that now represents the control.
    fn append_control(
        &self,
        container: &Self::Element,
        label: &str,
        on_activate: Rc<dyn Fn()>,
    ) -> Result<Self::Element, String>;

    /// Call `callback` after every batch of child-list changes anywhere
    /// in the document. The subscription lives as long as the page.
    fn on_structure_change(&self, callback: Box<dyn FnMut()>) -> Result<(), String>;
}

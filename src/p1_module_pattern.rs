// Pattern 1: Module Pattern - private state behind a public surface
// Demonstrates encapsulation with module-private fields and functions.

use crate::error::PatternError;
use std::collections::HashMap;
use tracing::debug;

/// Id of the element `HtmlChanger` rewrites.
pub const TARGET_ELEMENT: &str = "attribute-to-change";

// ============================================================================
// Example: A tiny page model to stand in for the DOM
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct Page {
    elements: HashMap<String, String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), String::new());
        self
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(String::as_str)
    }

    pub fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), PatternError> {
        let element = self
            .elements
            .get_mut(id)
            .ok_or_else(|| PatternError::ElementNotFound(id.to_string()))?;
        element.clear();
        element.push_str(html);
        Ok(())
    }
}

// ============================================================================
// Example: HtmlChanger keeps `contents` and `change_html` private
// ============================================================================

#[derive(Debug)]
pub struct HtmlChanger {
    contents: String,
}

impl HtmlChanger {
    pub fn new() -> Self {
        Self {
            contents: "contents".to_string(),
        }
    }

    fn change_html(&self, page: &mut Page) -> Result<(), PatternError> {
        page.set_inner_html(TARGET_ELEMENT, &self.contents)
    }

    /// The only public operation: rewrites the target element and returns
    /// the contents for the caller to print.
    pub fn call_change_html(&self, page: &mut Page) -> Result<&str, PatternError> {
        self.change_html(page)?;
        debug!(element = TARGET_ELEMENT, "inner html changed");
        Ok(&self.contents)
    }
}

impl Default for HtmlChanger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_change_html() {
        let mut page = Page::new().with_element(TARGET_ELEMENT);
        let changer = HtmlChanger::new();

        let logged = changer.call_change_html(&mut page).unwrap();

        assert_eq!(logged, "contents");
        assert_eq!(page.inner_html(TARGET_ELEMENT), Some("contents"));
    }

    #[test]
    fn test_missing_element() {
        let mut page = Page::new().with_element("something-else");
        let err = HtmlChanger::new().call_change_html(&mut page).unwrap_err();

        assert_eq!(err, PatternError::ElementNotFound(TARGET_ELEMENT.to_string()));
        assert_eq!(page.inner_html("something-else"), Some(""));
    }

    #[test]
    fn test_change_replaces_existing_html() {
        let mut page = Page::new().with_element(TARGET_ELEMENT);
        page.set_inner_html(TARGET_ELEMENT, "<b>old</b>").unwrap();

        HtmlChanger::new().call_change_html(&mut page).unwrap();
        assert_eq!(page.inner_html(TARGET_ELEMENT), Some("contents"));
    }
}

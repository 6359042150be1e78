//! Visibility-driven page effects other than counters

use crate::page::{ElementId, Page, LAZY_SRC_ATTR};

/// Class added to an image once its deferred source is loaded
pub const LOADED_CLASS: &str = "loaded";

/// Make a fade-in element fully opaque
pub fn reveal(page: &mut Page, id: ElementId) {
    if let Some(element) = page.get_mut(id) {
        element.opacity = 1.0;
    }
}

/// Swap a lazy image's `data-src` into its source
///
/// Returns false when the element has no deferred source.
pub fn load_image(page: &mut Page, id: ElementId) -> bool {
    let Some(element) = page.get_mut(id) else {
        return false;
    };
    let Some(src) = element.attribute(LAZY_SRC_ATTR).map(str::to_string) else {
        return false;
    };
    tracing::debug!(element = %id, src = %src, "Loading deferred image");
    element.src = Some(src);
    element.add_class(LOADED_CLASS);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Viewport;
    use crate::page::ElementSpec;

    fn spec(tag: &str, classes: &[&str], attrs: &[(&str, &str)]) -> ElementSpec {
        ElementSpec {
            tag: tag.to_string(),
            name: None,
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            left: 0.0,
            top: 0.0,
            width: None,
            height: 100.0,
            text: String::new(),
        }
    }

    #[test]
    fn test_reveal() {
        let mut page = Page::new("t", Viewport::default());
        let id = page.push(spec("div", &["fade-in-up"], &[]));
        assert_eq!(page.get(id).unwrap().opacity, 0.0);
        reveal(&mut page, id);
        assert_eq!(page.get(id).unwrap().opacity, 1.0);
    }

    #[test]
    fn test_load_image() {
        let mut page = Page::new("t", Viewport::default());
        let lazy = page.push(spec("img", &[], &[("data-src", "a.jpg")]));
        let eager = page.push(spec("img", &[], &[]));

        assert!(load_image(&mut page, lazy));
        let element = page.get(lazy).unwrap();
        assert_eq!(element.src.as_deref(), Some("a.jpg"));
        assert!(element.has_class(LOADED_CLASS));

        assert!(!load_image(&mut page, eager));
        assert!(page.get(eager).unwrap().src.is_none());
    }
}

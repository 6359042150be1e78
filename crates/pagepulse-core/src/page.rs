//! In-memory page model
//!
//! A page is a flat list of positioned elements plus a scroll offset. Element
//! rectangles are stored in document coordinates; client coordinates are
//! derived by subtracting the scroll offset.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Viewport};
use crate::{Error, Result};

const DEMO_PAGE: &str = include_str!("../assets/demo_page.toml");

/// Class marking fade-in elements
pub const FADE_IN_CLASS: &str = "fade-in-up";
/// Class marking counter elements
pub const COUNTER_CLASS: &str = "counter";
/// Attribute holding a lazy image's deferred source
pub const LAZY_SRC_ATTR: &str = "data-src";

/// Stable identity of an element within its page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub tag: String,
    /// Anchor name (`id` attribute in markup)
    pub name: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Position in document coordinates
    pub rect: Rect,
    pub text: String,
    pub opacity: f64,
    /// Loaded image source
    pub src: Option<String>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_section(&self) -> bool {
        self.tag == "section" && self.name.is_some()
    }

    pub fn is_image(&self) -> bool {
        self.tag == "img"
    }
}

/// Serialized page description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub left: f64,
    pub top: f64,
    /// Defaults to the viewport width
    #[serde(default)]
    pub width: Option<f64>,
    pub height: f64,
    #[serde(default)]
    pub text: String,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    elements: Vec<Element>,
    viewport: Viewport,
    scroll_y: f64,
}

impl Page {
    pub fn new(title: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
            viewport,
            scroll_y: 0.0,
        }
    }

    /// Build a page from its description. Fade-in elements start transparent.
    pub fn from_spec(spec: PageSpec) -> Self {
        let mut page = Self::new(spec.title, spec.viewport.unwrap_or_default());
        for element in spec.elements {
            page.push(element);
        }
        page
    }

    /// Parse a TOML page description
    pub fn parse(content: &str) -> Result<Self> {
        let spec: PageSpec = toml::from_str(content)?;
        Ok(Self::from_spec(spec))
    }

    /// Load a TOML page description from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The built-in marketing page used when no page file is configured
    pub fn demo() -> Result<Self> {
        Self::parse(DEMO_PAGE)
    }

    /// Append an element and return its identity
    pub fn push(&mut self, spec: ElementSpec) -> ElementId {
        let id = ElementId(self.elements.len());
        let width = spec.width.unwrap_or(self.viewport.width);
        let opacity = if spec.classes.iter().any(|c| c == FADE_IN_CLASS) {
            0.0
        } else {
            1.0
        };
        self.elements.push(Element {
            id,
            tag: spec.tag,
            name: spec.name,
            classes: spec.classes,
            attributes: spec.attributes,
            rect: Rect::new(spec.left, spec.top, width, spec.height),
            text: spec.text,
            opacity,
            src: None,
        });
        id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0)
    }

    /// Find an element by its anchor name
    pub fn find_by_name(&self, name: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.name.as_deref() == Some(name))
    }

    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.id)
            .collect()
    }

    /// Images carrying a deferred `data-src`
    pub fn lazy_images(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.is_image() && e.attribute(LAZY_SRC_ATTR).is_some())
            .map(|e| e.id)
            .collect()
    }

    /// Named sections in document order
    pub fn sections(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| e.is_section())
    }

    /// Element rectangle relative to the viewport
    pub fn bounding_client_rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(|e| e.rect.translated(0.0, -self.scroll_y))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize the viewport, keeping the scroll offset in range
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.rect.bottom())
            .fold(0.0, f64::max)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Scroll to `y`, clamped to the document. Returns the applied offset.
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.scroll_y
    }

    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<()> {
        let element = self
            .get_mut(id)
            .ok_or_else(|| Error::PageNotFound(id.to_string()))?;
        element.text = text.into();
        Ok(())
    }
}

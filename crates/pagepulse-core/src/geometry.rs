//! Rectangles, viewports, and the intersection math behind visibility checks

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in page pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Same rectangle moved by the given offsets
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Whether `self` lies completely inside `other`, edges included
    pub fn is_within(&self, other: &Rect) -> bool {
        self.left() >= other.left()
            && self.top() >= other.top()
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

/// Visible area of the page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Viewport rectangle with its bottom edge pulled up by `bottom_margin`
    pub fn root_rect(&self, bottom_margin: f64) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height - bottom_margin)
    }
}

/// Fraction of `target` covered by `root`, in [0.0, 1.0]
///
/// A zero-area target counts as fully visible when it sits inside `root`.
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    if target.area() == 0.0 {
        return if target.is_within(root) { 1.0 } else { 0.0 };
    }

    let overlap_w = (target.right().min(root.right()) - target.left().max(root.left())).max(0.0);
    let overlap_h = (target.bottom().min(root.bottom()) - target.top().max(root.top())).max(0.0);

    ((overlap_w * overlap_h) / target.area()).clamp(0.0, 1.0)
}

/// Whether a client rectangle is completely inside the viewport
pub fn is_element_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    rect.is_within(&viewport.root_rect(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_overlap() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let target = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!((intersection_ratio(&target, &root) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_overlap_at_bottom() {
        let root = Rect::new(0.0, 0.0, 1000.0, 700.0);
        // 20 of 100 pixels above the root's bottom edge
        let target = Rect::new(0.0, 680.0, 100.0, 100.0);
        assert!((intersection_ratio(&target, &root) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap() {
        let root = Rect::new(0.0, 0.0, 1000.0, 700.0);
        let below = Rect::new(0.0, 900.0, 100.0, 100.0);
        let above = Rect::new(0.0, -300.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&below, &root), 0.0);
        assert_eq!(intersection_ratio(&above, &root), 0.0);
    }

    #[test]
    fn test_zero_area_target() {
        let root = Rect::new(0.0, 0.0, 1000.0, 700.0);
        assert_eq!(intersection_ratio(&Rect::new(5.0, 5.0, 0.0, 0.0), &root), 1.0);
        assert_eq!(intersection_ratio(&Rect::new(5.0, 900.0, 0.0, 0.0), &root), 0.0);
    }

    #[test]
    fn test_root_rect_margin_never_negative() {
        let viewport = Viewport::new(800.0, 50.0);
        let root = viewport.root_rect(100.0);
        assert_eq!(root.height, 0.0);
        assert_eq!(root.width, 800.0);
    }

    #[test]
    fn test_is_element_in_viewport() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(is_element_in_viewport(&Rect::new(0.0, 0.0, 800.0, 600.0), &viewport));
        assert!(!is_element_in_viewport(&Rect::new(0.0, -1.0, 100.0, 100.0), &viewport));
        assert!(!is_element_in_viewport(&Rect::new(750.0, 0.0, 100.0, 100.0), &viewport));
    }
}

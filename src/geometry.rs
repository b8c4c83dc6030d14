//! Geometric value types for raster drawing.
//!
//! Coordinates are integer pixel positions; rasterization never works in
//! fractional coordinates except inside the bounding-box ellipse variant's
//! error term.

/// A 2D pixel position with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Position {
    /// Origin position (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
///
/// Covers the half-open pixel region `[x, x + width) x [y, y + height)`
/// when used as a fill target, and serves as the bounding box for the
/// rect-variant ellipse operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning two corner positions (inclusive).
    #[must_use]
    pub fn from_corners(a: Position, b: Position) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(
            x,
            y,
            a.x.abs_diff(b.x) + 1,
            a.y.abs_diff(b.y) + 1,
        )
    }

    /// Exclusive right edge (`x + width`).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge (`y + height`).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check whether a position lies in the covered pixel region.
    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_tuple() {
        let p: Position = (3, -4).into();
        assert_eq!(p, Position::new(3, -4));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Position::new(0, 0)));
        assert!(r.contains(Position::new(9, 9)));
        assert!(!r.contains(Position::new(10, 9)));
        assert!(!r.contains(Position::new(-1, 0)));
    }

    #[test]
    fn test_rect_from_corners() {
        let r = Rect::from_corners(Position::new(5, 9), Position::new(2, 3));
        assert_eq!(r, Rect::new(2, 3, 4, 7));
        assert!(r.contains(Position::new(5, 9)));
    }
}

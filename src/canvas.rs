//! The raster canvas: drawing primitives over an abstract pixel surface.
//!
//! [`Drawable`] is the capability contract a backing pixel store must
//! satisfy; [`Canvas`] layers the rasterization algorithms on top of it as
//! provided methods, so a backing type only adds one scalar of draw-color
//! state. All algorithms work in integer arithmetic except the
//! bounding-box ellipse variant, whose decision term needs the half-pixel
//! offset of odd box dimensions.
//!
//! No operation clips or bounds-checks: out-of-range coordinates go
//! straight to the backing store's accessors, which define the behavior
//! (the provided [`Surface`](crate::surface::Surface) panics).
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Zingl, A. (2012). "A Rasterizing Algorithm for Drawing Curves."

use crate::color::Rgba;
use crate::format::{PixelFormat, PixelValue};
use crate::geometry::{Position, Rect};

/// Capability contract for a backing pixel store.
///
/// A drawable is a rectangular grid of packed pixel values addressable by
/// integer coordinates. It owns the pixel memory; the canvas layer only
/// reads and writes through these five methods.
pub trait Drawable {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel format used to convert between [`Rgba`] and [`PixelValue`].
    fn format(&self) -> PixelFormat;

    /// Read the packed value at `(x, y)`.
    ///
    /// Out-of-range coordinates are the implementation's business; nothing
    /// at this layer checks them.
    fn pixel(&self, x: i32, y: i32) -> PixelValue;

    /// Write the packed value at `(x, y)`.
    ///
    /// Same bounds contract as [`Drawable::pixel`].
    fn set_pixel(&mut self, x: i32, y: i32, value: PixelValue);
}

/// 2D drawing primitives over a [`Drawable`].
///
/// The only state a canvas adds is the current draw color, one packed
/// [`PixelValue`]. Every stateful primitive (`draw_point`, `draw_line`,
/// the circle/ellipse/rectangle family, `clear`) consults that single
/// value; only the [`Canvas::cell`] accessor writes arbitrary colors
/// without touching it.
pub trait Canvas: Drawable {
    /// Current draw color as a packed value.
    fn draw_color(&self) -> PixelValue;

    /// Set the draw color from an already-packed value.
    fn set_draw_color_value(&mut self, value: PixelValue);

    /// Set the draw color from a color, packing through the pixel format.
    fn set_draw_color(&mut self, color: Rgba) {
        let value = self.format().pack(color);
        self.set_draw_color_value(value);
    }

    /// Write the current draw color at a single position.
    fn draw_point(&mut self, p: Position) {
        let color = self.draw_color();
        self.set_pixel(p.x, p.y, color);
    }

    /// Draw a line between two positions with Bresenham's algorithm.
    ///
    /// Integer arithmetic only, all eight octants handled by a symmetric
    /// error accumulator. `draw_line(p, p)` writes exactly one pixel.
    /// Endpoints are put in canonical order before walking, so the set of
    /// pixels written does not depend on the argument order.
    fn draw_line(&mut self, a: Position, b: Position) {
        let (a, b) = if (b.x, b.y) < (a.x, a.y) {
            (b, a)
        } else {
            (a, b)
        };
        let color = self.draw_color();
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = a.x;
        let mut y = a.y;

        loop {
            self.set_pixel(x, y, color);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x == b.x {
                    break;
                }
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                if y == b.y {
                    break;
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a circle outline with the midpoint algorithm.
    ///
    /// Plots four reflected points per step while sweeping one full
    /// quadrant, so the pixel set is symmetric under both axis reflections
    /// by construction. Radius 0 writes exactly the center pixel.
    fn draw_circle(&mut self, center: Position, radius: i32) {
        let color = self.draw_color();
        let (cx, cy) = (center.x, center.y);
        let mut x = -radius;
        let mut y = 0;
        let mut err = 2 - 2 * radius;

        while x < 0 {
            self.set_pixel(cx + x, cy + y, color);
            self.set_pixel(cx - x, cy + y, color);
            self.set_pixel(cx + x, cy - y, color);
            self.set_pixel(cx - x, cy - y, color);

            let e = err;
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if e > x || err > y {
                x += 1;
                err += x * 2 + 1;
            }
        }
        // Close the arc at the vertical axis; for radius 0 this is the
        // single center pixel.
        self.set_pixel(cx, cy + y, color);
        self.set_pixel(cx, cy - y, color);
    }

    /// Draw a filled circle.
    ///
    /// Same midpoint stepping as [`Canvas::draw_circle`], but each step
    /// emits horizontal spans through [`Canvas::draw_line`] instead of
    /// point pairs, after one vertical line through the center. The span
    /// endpoints are the outline pixels, so the fill always covers the
    /// outline.
    fn fill_circle(&mut self, center: Position, radius: i32) {
        let (cx, cy) = (center.x, center.y);
        self.draw_line(
            Position::new(cx, cy - radius),
            Position::new(cx, cy + radius),
        );

        let mut x = -radius;
        let mut y = 0;
        let mut err = 2 - 2 * radius;

        while x < 0 {
            self.draw_line(Position::new(cx + x, cy + y), Position::new(cx - x, cy + y));
            self.draw_line(Position::new(cx + x, cy - y), Position::new(cx - x, cy - y));

            let e = err;
            if e <= y {
                y += 1;
                err += y * 2 + 1;
            }
            if e > x || err > y {
                x += 1;
                err += x * 2 + 1;
            }
        }
    }

    /// Draw an ellipse outline from center and per-axis radii.
    ///
    /// Two-region integer midpoint algorithm: region 1 while the boundary
    /// slope is below 1, region 2 after. Distinct from the bounding-box
    /// variant ([`Canvas::draw_ellipse_rect`]); the two place boundary
    /// pixels differently and are deliberately not unified.
    fn draw_ellipse(&mut self, center: Position, rx: i32, ry: i32) {
        midpoint_ellipse(self, center, rx, ry, false);
    }

    /// Draw a filled ellipse from center and per-axis radii.
    ///
    /// Same stepping as [`Canvas::draw_ellipse`] with horizontal spans
    /// substituted for the symmetric point pairs.
    fn fill_ellipse(&mut self, center: Position, rx: i32, ry: i32) {
        midpoint_ellipse(self, center, rx, ry, true);
    }

    /// Draw the outline of the ellipse inscribed in a bounding box.
    ///
    /// Bresenham-style ellipse-in-rect with a floating-point error term;
    /// the fractional half-pixel center of odd-sized boxes cannot be
    /// represented in the integer formulation. The rasterized boundary
    /// touches all four box edges and never leaves the box.
    fn draw_ellipse_rect(&mut self, rect: Rect) {
        ellipse_rect(self, rect, false);
    }

    /// Draw the filled ellipse inscribed in a bounding box.
    ///
    /// Same stepping as [`Canvas::draw_ellipse_rect`] with horizontal
    /// spans substituted for the corner points.
    fn fill_ellipse_rect(&mut self, rect: Rect) {
        ellipse_rect(self, rect, true);
    }

    /// Draw a rectangle outline as four lines joining the corners.
    ///
    /// Corner pixels are shared between adjacent edges and written twice;
    /// the writes are idempotent.
    fn draw_rect(&mut self, rect: Rect) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        let tl = Position::new(rect.x, rect.y);
        let tr = Position::new(rect.right() - 1, rect.y);
        let br = Position::new(rect.right() - 1, rect.bottom() - 1);
        let bl = Position::new(rect.x, rect.bottom() - 1);

        self.draw_line(tl, tr);
        self.draw_line(tr, br);
        self.draw_line(br, bl);
        self.draw_line(bl, tl);
    }

    /// Fill every pixel of `[x, x + w) x [y, y + h)` with the draw color.
    fn fill_rect(&mut self, rect: Rect) {
        let color = self.draw_color();
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Fill the whole surface extent with the current draw color.
    fn clear(&mut self) {
        let extent = Rect::new(0, 0, self.width(), self.height());
        self.fill_rect(extent);
    }

    /// Pixel-cell accessor bound to `(x, y)`.
    ///
    /// The returned proxy reads and writes the one cell, packing and
    /// unpacking through the surface's format on demand. This is the only
    /// path that writes a color other than the current draw color.
    fn cell(&mut self, x: i32, y: i32) -> Cell<'_, Self> {
        Cell {
            drawable: self,
            x,
            y,
        }
    }
}

/// Proxy for a single pixel cell of a [`Drawable`].
///
/// Obtained through [`Canvas::cell`]; borrows the surface mutably for its
/// lifetime and carries no other state than the coordinate.
pub struct Cell<'a, D: ?Sized> {
    drawable: &'a mut D,
    x: i32,
    y: i32,
}

impl<D: Drawable + ?Sized> Cell<'_, D> {
    /// Read the cell as a packed value.
    #[must_use]
    pub fn value(&self) -> PixelValue {
        self.drawable.pixel(self.x, self.y)
    }

    /// Read the cell as a color, unpacking through the surface format.
    #[must_use]
    pub fn color(&self) -> Rgba {
        self.drawable.format().unpack(self.value())
    }

    /// Write an already-packed value to the cell.
    pub fn set_value(&mut self, value: PixelValue) {
        self.drawable.set_pixel(self.x, self.y, value);
    }

    /// Write a color to the cell, packing through the surface format.
    pub fn set_color(&mut self, color: Rgba) {
        let value = self.drawable.format().pack(color);
        self.set_value(value);
    }
}

/// Two-region midpoint ellipse shared by the outline and filled forms.
///
/// Decision terms are the textbook values scaled by 4 so the quarter-pixel
/// constant stays in integers. Region 1 runs while `2*ry^2*x < 2*rx^2*y`
/// (boundary slope below 1), region 2 takes over down to `y = 0`.
fn midpoint_ellipse<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Position,
    rx: i32,
    ry: i32,
    filled: bool,
) {
    let (cx, cy) = (center.x, center.y);
    let a2 = i64::from(rx) * i64::from(rx);
    let b2 = i64::from(ry) * i64::from(ry);

    let mut x: i64 = 0;
    let mut y: i64 = i64::from(ry);
    let mut dx: i64 = 0;
    let mut dy: i64 = 2 * a2 * y;

    let emit = |canvas: &mut C, x: i64, y: i64| {
        let (x, y) = (x as i32, y as i32);
        if filled {
            canvas.draw_line(Position::new(cx - x, cy + y), Position::new(cx + x, cy + y));
            canvas.draw_line(Position::new(cx - x, cy - y), Position::new(cx + x, cy - y));
        } else {
            let color = canvas.draw_color();
            canvas.set_pixel(cx + x, cy + y, color);
            canvas.set_pixel(cx - x, cy + y, color);
            canvas.set_pixel(cx + x, cy - y, color);
            canvas.set_pixel(cx - x, cy - y, color);
        }
    };

    // Region 1: slope below 1.
    let mut d1 = 4 * b2 - 4 * a2 * i64::from(ry) + a2;
    while dx < dy {
        emit(canvas, x, y);
        x += 1;
        dx += 2 * b2;
        if d1 < 0 {
            d1 += 4 * (dx + b2);
        } else {
            y -= 1;
            dy -= 2 * a2;
            d1 += 4 * (dx - dy + b2);
        }
    }

    // Region 2: slope 1 and above, down to the minor axis.
    let mut d2 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y >= 0 {
        emit(canvas, x, y);
        y -= 1;
        dy -= 2 * a2;
        if d2 > 0 {
            d2 += 4 * (a2 - dy);
        } else {
            x += 1;
            dx += 2 * b2;
            d2 += 4 * (dx - dy + a2);
        }
    }
}

/// Bresenham-style ellipse inscribed in a bounding box.
///
/// The error accumulator is `f64`: an odd-width or odd-height box centers
/// the ellipse on a half-pixel coordinate, and the quarter-step constants
/// (`b1` terms) do not stay integral. The loop keeps the four working
/// corners inside the box at all times, so nothing is written outside
/// `[x, x+w) x [y, y+h)`.
fn ellipse_rect<C: Canvas + ?Sized>(canvas: &mut C, rect: Rect, filled: bool) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let mut x0 = rect.x;
    let mut y0 = rect.y;
    let mut x1 = rect.right() - 1;
    let mut y1 = rect.bottom() - 1;

    let a = x1 - x0;
    let b = y1 - y0;
    let b1 = b & 1;
    let (af, bf) = (f64::from(a), f64::from(b));

    let mut dx = 4.0 * (1.0 - af) * bf * bf;
    let mut dy = 4.0 * f64::from(b1 + 1) * af * af;
    let mut err = dx + dy + f64::from(b1) * af * af;

    // Start from the horizontal diameter row(s); one row when the height
    // is even, two adjacent rows when odd.
    y0 += (b + 1) / 2;
    y1 = y0 - b1;
    let a8 = 8.0 * af * af;
    let b8 = 8.0 * bf * bf;

    let emit = |canvas: &mut C, x0: i32, x1: i32, y0: i32, y1: i32| {
        if filled {
            canvas.draw_line(Position::new(x0, y0), Position::new(x1, y0));
            canvas.draw_line(Position::new(x0, y1), Position::new(x1, y1));
        } else {
            let color = canvas.draw_color();
            canvas.set_pixel(x1, y0, color);
            canvas.set_pixel(x0, y0, color);
            canvas.set_pixel(x0, y1, color);
            canvas.set_pixel(x1, y1, color);
        }
    };

    // `poles` records whether the top/bottom box rows were emitted; when
    // y0 - y1 == b those rows are exactly rect.y and rect.bottom() - 1.
    let mut poles = false;
    loop {
        emit(canvas, x0, x1, y0, y1);
        poles = poles || y0 - y1 == b;
        let e2 = 2.0 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += a8;
            err += dy;
        }
        if e2 >= dx || 2.0 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += b8;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    // Narrow boxes cross the center columns before the sweep reaches the
    // poles; finish the remaining rows there, pole rows included.
    if !poles {
        while y0 - y1 < b {
            emit(canvas, x0 - 1, x1 + 1, y0, y1);
            y0 += 1;
            y1 -= 1;
        }
        emit(canvas, x0 - 1, x1 + 1, y0, y1);
    }
}

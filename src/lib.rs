//! # Pincel
//!
//! Software raster canvas: integer drawing primitives over an abstract
//! pixel surface.
//!
//! The core of the crate is the pair of traits in [`canvas`]:
//! [`Drawable`](canvas::Drawable) is the capability contract a backing
//! pixel store satisfies (read/write a packed pixel, report dimensions and
//! format), and [`Canvas`](canvas::Canvas) layers the rasterization
//! algorithms on top as provided methods. A canvas carries exactly one
//! piece of state, the current draw color; everything else is per-call
//! parameters. [`surface::Surface`] is the bundled concrete backing store,
//! and [`output::PngEncoder`] turns a surface into a PNG.
//!
//! ## Quick Start
//!
//! ```
//! use pincel::prelude::*;
//!
//! let mut canvas = Surface::new(64, 64, PixelFormat::Argb8888)?;
//! canvas.set_draw_color(Rgba::WHITE);
//! canvas.clear();
//!
//! canvas.set_draw_color(Rgba::BLUE);
//! canvas.draw_line(Position::new(0, 0), Position::new(63, 63));
//! canvas.draw_circle(Position::new(32, 32), 20);
//! canvas.fill_ellipse_rect(Rect::new(10, 24, 44, 16));
//! # Ok::<(), pincel::Error>(())
//! ```
//!
//! ## Bounds behavior
//!
//! Drawing operations do not clip. Out-of-range coordinates go straight to
//! the backing store, which defines the outcome; [`surface::Surface`]
//! panics. Keep geometry inside `[0, width) x [0, height)`.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Zingl, A. (2012). "A Rasterizing Algorithm for Drawing Curves."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Pixel formats and packed pixel values.
pub mod format;

/// Geometric value types (positions, rectangles).
pub mod geometry;

/// The raster canvas traits and drawing algorithms.
pub mod canvas;

/// Concrete software surface backing store.
pub mod surface;

// ============================================================================
// Output Modules
// ============================================================================

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pincel operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use pincel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{Canvas, Cell, Drawable};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::format::{PixelFormat, PixelValue};
    pub use crate::geometry::{Position, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::surface::Surface;
}

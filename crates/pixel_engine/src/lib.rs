#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::cast_lossless,
    clippy::cast_precision_loss,
    clippy::must_use_candidate,
    clippy::fn_params_excessive_bools,
    clippy::return_self_not_must_use,
    clippy::module_name_repetitions
)]
//! Data model of the pixel editing engine.
//!
//! A bounded raster canvas (`PixelBuffer`) whose cells reference a semantic tree
//! (`SemanticIdentifier`) and an indexed color table (`ColorPalette`), plus the
//! selection mask (`SelectedRegion`) and the persisted document format.

mod position;
pub use position::*;

mod transform;
pub use transform::*;

pub mod shapes;

mod color;
pub use color::*;

mod palette;
pub use palette::*;

mod semantic;
pub use semantic::*;

mod pixel_buffer;
pub use pixel_buffer::*;

mod selection;
pub use selection::*;

pub mod formats;
pub use formats::*;

mod error;
pub use error::*;

use serde::{Deserialize, Serialize};

/// Composited view of an artwork: one concrete color per cell.
pub type BitmapImage = PixelBuffer<Color>;

/// The edited layer: one semantic id + palette id per cell.
pub type PixelImage = PixelBuffer<SemanticPixel>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of cells a buffer of this size holds. Negative extents count as zero.
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

/// Axis aligned box with inclusive lower (`min`) and upper (`max`) corners.
///
/// The constructors normalize their input so `min.x <= max.x` and `min.y <= max.y` always hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    min: Position,
    max: Position,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(lx:{}, ly:{}, ux: {}, uy: {})", self.min.x, self.min.y, self.max.x, self.max.y)
    }
}

impl Rectangle {
    pub const ZERO: Rectangle = Rectangle {
        min: Position::ZERO,
        max: Position::ZERO,
    };

    pub fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Rectangle {
            min: Position::new(x1.min(x2), y1.min(y2)),
            max: Position::new(x1.max(x2), y1.max(y2)),
        }
    }

    pub fn from_pt(p1: Position, p2: Position) -> Self {
        Rectangle {
            min: p1.min(p2),
            max: p1.max(p2),
        }
    }

    /// Smallest rectangle covering all `points`, `None` for an empty iterator.
    pub fn covering(points: impl IntoIterator<Item = Position>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Rectangle::from_pt(first, first), |rect, pt| rect.union_pt(pt)))
    }

    pub fn union_pt(&self, pos: Position) -> Rectangle {
        Rectangle {
            min: self.min.min(pos),
            max: self.max.max(pos),
        }
    }

    pub fn min(&self) -> Position {
        self.min
    }

    pub fn max(&self) -> Position {
        self.max
    }

    pub fn left(&self) -> i32 {
        self.min.x
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn right(&self) -> i32 {
        self.max.x
    }

    pub fn bottom(&self) -> i32 {
        self.max.y
    }

    /// Number of columns covered, both corners included.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Number of rows covered, both corners included.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn contains_pt(&self, pos: Position) -> bool {
        self.min.x <= pos.x && pos.x <= self.max.x && self.min.y <= pos.y && pos.y <= self.max.y
    }

    pub fn x_range_inclusive(&self) -> std::ops::RangeInclusive<i32> {
        self.min.x..=self.max.x
    }

    pub fn y_range_inclusive(&self) -> std::ops::RangeInclusive<i32> {
        self.min.y..=self.max.y
    }

    /// All covered cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Position> + '_ {
        self.y_range_inclusive()
            .flat_map(move |y| self.x_range_inclusive().map(move |x| Position::new(x, y)))
    }
}

impl std::ops::Add<Position> for Rectangle {
    type Output = Rectangle;

    fn add(self, rhs: Position) -> Rectangle {
        Rectangle {
            min: self.min + rhs,
            max: self.max + rhs,
        }
    }
}

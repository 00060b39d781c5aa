use serde::{Deserialize, Serialize};

use crate::{Position, Rectangle};

/// Maps a cell to its image under "mirror about the centre axes of `bounds`, then translate by `offset`".
///
/// Keeping `bounds` with the flags makes the mapping reproducible after the selection that
/// produced it is gone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTransform {
    pub bounds: Rectangle,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub offset: Position,
}

impl PointTransform {
    pub fn new(bounds: Rectangle, flip_horizontal: bool, flip_vertical: bool, offset: Position) -> Self {
        Self {
            bounds,
            flip_horizontal,
            flip_vertical,
            offset,
        }
    }

    pub fn translation(bounds: Rectangle, offset: Position) -> Self {
        Self::new(bounds, false, false, offset)
    }

    pub fn is_identity(&self) -> bool {
        !self.flip_horizontal && !self.flip_vertical && self.offset == Position::ZERO
    }

    /// Mirrors a cell inside `bounds` without translating it.
    pub fn reflect(&self, pos: Position) -> Position {
        let mut result = pos;
        if self.flip_horizontal {
            result.x = self.bounds.left() + self.bounds.right() - pos.x;
        }
        if self.flip_vertical {
            result.y = self.bounds.top() + self.bounds.bottom() - pos.y;
        }
        result
    }

    /// Mirrors a cell corner (grid line intersection). Corner `c` of a cell lies between
    /// cells `c - 1` and `c`, so the axis is shifted by one compared to [`Self::reflect`].
    pub fn reflect_corner(&self, corner: Position) -> Position {
        let mut result = corner;
        if self.flip_horizontal {
            result.x = self.bounds.left() + self.bounds.right() + 1 - corner.x;
        }
        if self.flip_vertical {
            result.y = self.bounds.top() + self.bounds.bottom() + 1 - corner.y;
        }
        result
    }

    pub fn apply(&self, pos: Position) -> Position {
        self.reflect(pos) + self.offset
    }
}

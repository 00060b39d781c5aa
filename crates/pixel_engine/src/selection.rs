use crate::{PixelBuffer, PointTransform, Position, Rectangle, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    Select,
    Deselect,
    Toggle,
}

/// A unit edge between two cell corners. Corner `(x, y)` is the top left corner of cell `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundarySegment {
    pub from: Position,
    pub to: Position,
}

impl BoundarySegment {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Boolean mask over the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedRegion {
    mask: PixelBuffer<bool>,
}

impl SelectedRegion {
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            mask: PixelBuffer::new(size, false),
        }
    }

    /// A region of `size` with `points` selected.
    pub fn from_points(size: impl Into<Size>, points: &[Position]) -> Self {
        let mut region = Self::new(size);
        region.update(points.iter().copied(), SelectionMode::Select);
        region
    }

    pub fn size(&self) -> Size {
        self.mask.size()
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        self.mask.is_valid(pos)
    }

    /// Selection state at `pos`, `default` outside the mask.
    pub fn is_selected(&self, pos: Position, default: bool) -> bool {
        if self.mask.is_valid(pos) { *self.mask.get(pos) } else { default }
    }

    /// # Panics
    ///
    /// Panics if a point is outside the mask.
    pub fn update(&mut self, points: impl IntoIterator<Item = Position>, mode: SelectionMode) {
        for pos in points {
            assert!(self.mask.is_valid(pos), "selection update at {pos} outside of {}", self.mask.size());
            let selected = match mode {
                SelectionMode::Select => true,
                SelectionMode::Deselect => false,
                SelectionMode::Toggle => !*self.mask.get(pos),
            };
            self.mask.set(pos, selected);
        }
    }

    pub fn select_all(&mut self) {
        self.mask.fill(&true);
    }

    pub fn clear(&mut self) {
        self.mask.fill(&false);
    }

    pub fn is_empty(&self) -> bool {
        !self.mask.cells().contains(&true)
    }

    pub fn count(&self) -> usize {
        self.mask.cells().iter().filter(|selected| **selected).count()
    }

    /// Selected positions in row-major order.
    pub fn selected_points(&self) -> Vec<Position> {
        self.mask.points().filter(|pos| *self.mask.get(*pos)).collect()
    }

    /// Smallest rectangle covering the selection, [`Rectangle::ZERO`] if nothing is selected.
    pub fn bounding_rectangle(&self) -> Rectangle {
        Rectangle::covering(self.selected_points()).unwrap_or(Rectangle::ZERO)
    }

    /// Outline of the selection as independent unit edges.
    ///
    /// An edge of a selected cell is emitted when the neighbour across it is not selected
    /// (cells outside the mask count as not selected). Edges are not merged into polylines,
    /// consumers stroke every segment. With a flip flag set the segments are mirrored about
    /// the bounding rectangle like [`crate::PixelBuffer::transform`] mirrors the pixels.
    pub fn bounding_path(&self, flip_horizontal: bool, flip_vertical: bool) -> Vec<BoundarySegment> {
        let transform = PointTransform::new(self.bounding_rectangle(), flip_horizontal, flip_vertical, Position::ZERO);
        let mut segments = Vec::new();

        for pos in self.selected_points() {
            let top_left = pos;
            let top_right = pos + Position::new(1, 0);
            let bottom_left = pos + Position::new(0, 1);
            let bottom_right = pos + Position::new(1, 1);

            let edges = [
                (Position::new(pos.x, pos.y - 1), top_left, top_right),
                (Position::new(pos.x, pos.y + 1), bottom_left, bottom_right),
                (Position::new(pos.x - 1, pos.y), top_left, bottom_left),
                (Position::new(pos.x + 1, pos.y), top_right, bottom_right),
            ];
            for (neighbour, from, to) in edges {
                if !self.is_selected(neighbour, false) {
                    segments.push(BoundarySegment::new(transform.reflect_corner(from), transform.reflect_corner(to)));
                }
            }
        }

        segments
    }
}

use std::collections::HashSet;

use crate::{
    DecodingError, PointTransform, Position, Rectangle, SelectedRegion, Size,
    shapes::{get_ellipse_points, get_line_points},
};

/// Fixed size, row-major grid of cells. `index = y * width + x`.
///
/// `get`/`set` panic outside the grid; coordinates coming from user input or from the shape
/// generators must pass [`PixelBuffer::is_valid`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<T> {
    size: Size,
    cells: Vec<T>,
}

impl<T: Clone> PixelBuffer<T> {
    /// # Panics
    ///
    /// Panics if `size` has a negative extent.
    pub fn new(size: impl Into<Size>, value: T) -> Self {
        let size = size.into();
        assert!(size.width >= 0 && size.height >= 0, "negative buffer size {size}");
        Self {
            size,
            cells: vec![value; size.area()],
        }
    }

    /// # Errors
    ///
    /// Fails when `cells` doesn't hold exactly `width * height` values.
    pub fn from_cells(size: impl Into<Size>, cells: Vec<T>) -> Result<Self, DecodingError> {
        let size = size.into();
        if size.width < 0 || size.height < 0 {
            return Err(DecodingError::InvalidSize { size });
        }
        if cells.len() != size.area() {
            return Err(DecodingError::BufferLengthMismatch { size, actual: cells.len() });
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size.width && pos.y >= 0 && pos.y < self.size.height
    }

    fn index(&self, pos: Position) -> usize {
        assert!(self.is_valid(pos), "{pos} outside of {}", self.size);
        (pos.y * self.size.width + pos.x) as usize
    }

    pub fn get(&self, pos: Position) -> &T {
        &self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, value: T) {
        let index = self.index(pos);
        self.cells[index] = value;
    }

    pub fn fill(&mut self, value: &T) {
        for cell in &mut self.cells {
            cell.clone_from(value);
        }
    }

    /// All positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Position> {
        let width = self.size.width;
        (0..self.size.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Values at `points`, in the same order.
    pub fn values_at(&self, points: &[Position]) -> Vec<T> {
        points.iter().map(|pos| self.get(*pos).clone()).collect()
    }

    pub fn map<U: Clone>(&self, f: impl FnMut(&T) -> U) -> PixelBuffer<U> {
        PixelBuffer {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Points 4-connected to `start` for which `is_included` holds.
    ///
    /// Depth first with an explicit stack; visited points are kept in a hash set so every
    /// point is tested at most once per neighbour. An invalid or excluded start yields nothing.
    pub fn flood_search(&self, start: Position, is_included: impl Fn(Position, &T) -> bool) -> Vec<Position> {
        let mut result = Vec::new();
        if !self.is_valid(start) || !is_included(start, self.get(start)) {
            return result;
        }

        let mut visited = HashSet::new();
        visited.insert(start);
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            result.push(pos);
            for next in pos.neighbours() {
                if !self.is_valid(next) || visited.contains(&next) {
                    continue;
                }
                if is_included(next, self.get(next)) {
                    visited.insert(next);
                    stack.push(next);
                }
            }
        }

        result
    }

    /// Clears the rectangle spanned by `p1`/`p2` to `background` and pastes its previous
    /// content translated by `offset`. Cells falling outside the buffer are dropped.
    pub fn move_rectangle(&mut self, p1: Position, p2: Position, offset: Position, background: T) {
        let rect = Rectangle::from_pt(p1, p2);
        let points: Vec<Position> = rect.points().filter(|pos| self.is_valid(*pos)).collect();
        self.transform_points(&points, &PointTransform::translation(rect, offset), background);
    }

    /// Paints the Bresenham line from `p1` to `p2`, returns the painted points.
    pub fn draw_line(&mut self, p1: Position, p2: Position, value: &T) -> Vec<Position> {
        let points: Vec<Position> = get_line_points(p1, p2).into_iter().filter(|pos| self.is_valid(*pos)).collect();
        self.paint(&points, value);
        points
    }

    /// Paints the ellipse inscribed in the box spanned by `p1`/`p2`, returns the painted points.
    pub fn draw_ellipse(&mut self, p1: Position, p2: Position, value: &T) -> Vec<Position> {
        let points: Vec<Position> = get_ellipse_points(p1, p2).into_iter().filter(|pos| self.is_valid(*pos)).collect();
        self.paint(&points, value);
        points
    }

    /// Writes `value` at every point.
    pub fn paint(&mut self, points: &[Position], value: &T) {
        for pos in points {
            self.set(*pos, value.clone());
        }
    }

    /// Writes `values[i]` at `points[i]`.
    pub fn paint_values(&mut self, points: &[Position], values: &[T]) {
        for (pos, value) in points.iter().zip(values) {
            self.set(*pos, value.clone());
        }
    }

    /// Mirrors the selected cells about the centre of the selection's bounding rectangle
    /// (per flip flag) and moves them by `offset`. Vacated cells become `background`.
    pub fn transform(&mut self, selection: &SelectedRegion, flip_horizontal: bool, flip_vertical: bool, offset: Position, background: T) {
        if !flip_horizontal && !flip_vertical && offset == Position::ZERO {
            return;
        }
        let transform = PointTransform::new(selection.bounding_rectangle(), flip_horizontal, flip_vertical, offset);
        self.transform_region(selection, &transform, background);
    }

    /// Like [`PixelBuffer::transform`] with an explicit mapping, so a recorded transform
    /// replays with its original bounds.
    pub fn transform_region(&mut self, selection: &SelectedRegion, transform: &PointTransform, background: T) {
        if transform.is_identity() {
            return;
        }
        let points = selection.selected_points();
        self.transform_points(&points, transform, background);
    }

    fn transform_points(&mut self, points: &[Position], transform: &PointTransform, background: T) {
        let originals = self.values_at(points);
        for pos in points {
            self.set(*pos, background.clone());
        }
        for (pos, value) in points.iter().zip(originals) {
            let destination = transform.apply(*pos);
            if self.is_valid(destination) {
                self.set(destination, value);
            }
        }
    }
}

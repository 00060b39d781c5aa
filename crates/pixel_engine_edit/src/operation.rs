//! Reversible edits recorded in the [`crate::History`].
//!
//! Every variant carries enough data to be undone and redone against the buffer it was
//! recorded on, without a copy of the whole image.

use pixel_engine::{PixelBuffer, PointTransform, Position, SelectedRegion};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operation<T> {
    /// Values written at a set of points.
    Assignment {
        points: Vec<Position>,
        old_values: Vec<T>,
        new_values: Vec<T>,
    },

    /// Selected cells mirrored and/or moved; vacated cells set to `background`.
    Transformation {
        points: Vec<Position>,
        transform: PointTransform,
        background: T,
        /// Values of `points` before the transform.
        selected_pixels: Vec<T>,
        /// Values at in-bounds destinations before the transform.
        overwritten_pixels: Vec<(Position, T)>,
    },
}

impl<T: Clone> Operation<T> {
    /// Records writing `value` at `points`, capturing the current values of `image`.
    pub fn assignment(image: &PixelBuffer<T>, points: Vec<Position>, value: &T) -> Self {
        let old_values = image.values_at(&points);
        let new_values = vec![value.clone(); points.len()];
        Operation::Assignment {
            points,
            old_values,
            new_values,
        }
    }

    /// Records transforming `points` of `image`, capturing everything undo needs.
    pub fn transformation(image: &PixelBuffer<T>, points: Vec<Position>, transform: PointTransform, background: T) -> Self {
        let selected_pixels = image.values_at(&points);
        let overwritten_pixels = points
            .iter()
            .map(|pos| transform.apply(*pos))
            .filter(|destination| image.is_valid(*destination))
            .map(|destination| (destination, image.get(destination).clone()))
            .collect();
        Operation::Transformation {
            points,
            transform,
            background,
            selected_pixels,
            overwritten_pixels,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Operation::Assignment { points, .. } => {
                if points.len() == 1 {
                    "Set pixel".to_string()
                } else {
                    format!("Set {} pixels", points.len())
                }
            }
            Operation::Transformation { transform, .. } => match (transform.flip_horizontal, transform.flip_vertical) {
                (true, true) => "Rotate selection".to_string(),
                (true, false) => "Flip selection horizontal".to_string(),
                (false, true) => "Flip selection vertical".to_string(),
                (false, false) => "Move selection".to_string(),
            },
        }
    }

    pub fn points(&self) -> &[Position] {
        match self {
            Operation::Assignment { points, .. } | Operation::Transformation { points, .. } => points,
        }
    }

    pub fn undo(&self, image: &mut PixelBuffer<T>) {
        match self {
            Operation::Assignment { points, old_values, .. } => {
                // reverse order so the oldest value wins for repeated points
                for (pos, value) in points.iter().zip(old_values).rev() {
                    image.set(*pos, value.clone());
                }
            }
            Operation::Transformation {
                points,
                selected_pixels,
                overwritten_pixels,
                ..
            } => {
                image.paint_values(points, selected_pixels);
                for (pos, value) in overwritten_pixels {
                    image.set(*pos, value.clone());
                }
            }
        }
    }

    pub fn redo(&self, image: &mut PixelBuffer<T>) {
        match self {
            Operation::Assignment { points, new_values, .. } => {
                image.paint_values(points, new_values);
            }
            Operation::Transformation {
                points, transform, background, ..
            } => {
                let region = SelectedRegion::from_points(image.size(), points);
                image.transform_region(&region, transform, background.clone());
            }
        }
    }
}

//! Rasterization of lines and ellipses into grid points.
//!
//! Both generators are pure: the same endpoints always produce the same ordered point list.
//! Points may lie outside any buffer, callers filter with `PixelBuffer::is_valid`.

use std::collections::HashSet;

use crate::Position;

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
pub fn get_line_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::new();

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == p1.x {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == p1.y {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    points
}

/// Generate the outline of the ellipse inscribed in the box spanned by `p0` and `p1`.
///
/// Bresenham ellipse on an integer bounding box: a single error accumulator walks one quadrant
/// and every step is plotted in all four quadrants. Boxes of odd and even extent are both exact,
/// flat boxes get their tips completed after the main loop.
pub fn get_ellipse_points(p0: Position, p1: Position) -> Vec<Position> {
    let mut x0 = p0.x as i64;
    let mut y0 = p0.y as i64;
    let mut x1 = p1.x as i64;
    let mut y1 = p1.y as i64;

    let mut a = (x1 - x0).abs();
    let b = (y1 - y0).abs();
    let mut b1 = b & 1;
    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (b1 + 1) * a * a;
    let mut err = dx + dy + b1 * a * a;

    if x0 > x1 {
        x0 = x1;
        x1 += a;
    }
    if y0 > y1 {
        y0 = y1;
    }
    y0 += (b + 1) / 2;
    y1 = y0 - b1;
    a *= 8 * a;
    b1 = 8 * b * b;

    let mut points = PointCollector::default();
    loop {
        points.push(x1, y0);
        points.push(x0, y0);
        points.push(x0, y1);
        points.push(x1, y1);

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += a;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += b1;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    while y0 - y1 <= b {
        points.push(x0 - 1, y0);
        points.push(x1 + 1, y0);
        y0 += 1;
        points.push(x0 - 1, y1);
        points.push(x1 + 1, y1);
        y1 -= 1;
    }

    points.points
}

/// Keeps the first occurrence of every point.
#[derive(Default)]
struct PointCollector {
    seen: HashSet<Position>,
    points: Vec<Position>,
}

impl PointCollector {
    fn push(&mut self, x: i64, y: i64) {
        let pos = Position::new(x as i32, y as i32);
        if self.seen.insert(pos) {
            self.points.push(pos);
        }
    }
}

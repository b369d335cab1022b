//! # Geometry
//!
//! Axis-aligned rectangles, line segments, and quads with point containment.

use std::fmt;

use crate::math::DVector2;
use crate::math::IVector2;
use crate::Error;
use crate::Result;

// Distance under which a point counts as lying on a quad edge.
const BOUNDARY_EPSILON: f64 = 1e-9;

/// # Rect
///
/// Axis-aligned rectangle in pixel coordinates. A negative width or height flips the rectangle
/// around its origin.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    /// Left edge, or right edge when the width is negative.
    pub x: i32,
    /// Top edge, or bottom edge when the height is negative.
    pub y: i32,
    /// Width of the rectangle.
    pub w: i32,
    /// Height of the rectangle.
    pub h: i32,
}

impl Rect {
    /// Returns a rectangle with the given origin and size.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the origin of the rectangle.
    pub const fn position(self) -> IVector2 {
        IVector2::new(self.x, self.y)
    }

    /// Returns the size of the rectangle.
    pub const fn size(self) -> IVector2 {
        IVector2::new(self.w, self.h)
    }

    /// Returns the same area with a non-negative width and height. Coordinates saturate at the
    /// `i32` limits.
    pub const fn normalized(self) -> Self {
        let (x, w) = if self.w < 0 {
            (self.x.saturating_add(self.w), self.w.saturating_neg())
        } else {
            (self.x, self.w)
        };
        let (y, h) = if self.h < 0 {
            (self.y.saturating_add(self.h), self.h.saturating_neg())
        } else {
            (self.y, self.h)
        };

        Self { x, y, w, h }
    }

    /// Returns true if the two rectangles overlap or touch.
    pub fn collides(self, other: Rect) -> bool {
        collide_rect(self, other)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.x, self.y, self.w, self.h)
    }
}

/// Returns true if the two rectangles overlap. Rectangles sharing an edge collide.
pub fn collide_rect(r1: Rect, r2: Rect) -> bool {
    fn span(start: i32, length: i32) -> (i64, i64) {
        let start = i64::from(start);
        let end = start + i64::from(length);
        (start.min(end), start.max(end))
    }

    let (left1, right1) = span(r1.x, r1.w);
    let (left2, right2) = span(r2.x, r2.w);
    if right1 < left2 || right2 < left1 {
        return false;
    }

    let (top1, bottom1) = span(r1.y, r1.h);
    let (top2, bottom2) = span(r2.y, r2.h);
    if bottom1 < top2 || bottom2 < top1 {
        return false;
    }

    true
}

/// # Line
///
/// Line segment between two points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Line {
    /// Start of the segment.
    pub p1: DVector2,
    /// End of the segment.
    pub p2: DVector2,
}

impl Line {
    /// Returns the segment between the given points.
    pub const fn new(p1: DVector2, p2: DVector2) -> Self {
        Self { p1, p2 }
    }

    /// Returns true if both endpoints share an x coordinate.
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    /// Returns true if `point` lies on the segment.
    pub fn contains_point(&self, point: DVector2) -> bool {
        let along = self.p2.as_dvec2() - self.p1.as_dvec2();
        let offset = point.as_dvec2() - self.p1.as_dvec2();
        let length = along.length();

        if length == 0.0 {
            return offset.length() <= BOUNDARY_EPSILON;
        }

        let t = offset.dot(along) / (length * length);
        let slack = BOUNDARY_EPSILON / length;

        along.perp_dot(offset).abs() / length <= BOUNDARY_EPSILON
            && t >= -slack
            && t <= 1.0 + slack
    }

    fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.is_vertical() {
            return None;
        }

        let slope = (self.p2.y - self.p1.y) / (self.p2.x - self.p1.x);
        Some((slope, self.p1.y - slope * self.p1.x))
    }

    fn x_range(&self) -> (f64, f64) {
        (self.p1.x.min(self.p2.x), self.p1.x.max(self.p2.x))
    }

    fn y_range(&self) -> (f64, f64) {
        (self.p1.y.min(self.p2.y), self.p1.y.max(self.p2.y))
    }
}

fn within((min, max): (f64, f64), value: f64) -> bool {
    value >= min && value <= max
}

fn overlaps(a: (f64, f64), b: (f64, f64)) -> bool {
    a.1 >= b.0 && a.0 <= b.1
}

fn intersects(ray: &Line, line: &Line) -> bool {
    match (ray.slope_intercept(), line.slope_intercept()) {
        (Some((m1, b1)), Some((m, b))) => {
            if m1 == m {
                // Parallel segments only meet when collinear and overlapping.
                return b1 == b && overlaps(ray.x_range(), line.x_range());
            }

            let x = (b - b1) / (m1 - m);
            within(line.x_range(), x) && within(ray.x_range(), x)
        }
        (None, Some((m, b))) => {
            let x = ray.p1.x;
            within(ray.y_range(), m * x + b) && within(line.x_range(), x)
        }
        (Some((m1, b1)), None) => {
            let x = line.p1.x;
            within(line.y_range(), m1 * x + b1) && within(ray.x_range(), x)
        }
        (None, None) => ray.p1.x == line.p1.x && overlaps(ray.y_range(), line.y_range()),
    }
}

/// Returns how many of `lines` the segment `ray` intersects. Collinear overlapping segments count
/// as one intersection.
pub fn ray_cast(ray: Line, lines: &[Line]) -> usize {
    lines.iter().filter(|line| intersects(&ray, line)).count()
}

/// # Quad
///
/// Four-vertex polygon, like a [Rect] that can be rotated and scaled. Consecutive vertices form
/// the boundary and the quad must stay simple for [Quad::is_in] to be meaningful.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quad {
    /// First vertex, top-left for quads built from a rect.
    pub v1: DVector2,
    /// Second vertex, top-right for quads built from a rect.
    pub v2: DVector2,
    /// Third vertex, bottom-right for quads built from a rect.
    pub v3: DVector2,
    /// Fourth vertex, bottom-left for quads built from a rect.
    pub v4: DVector2,
}

impl Quad {
    /// Number of vertices in a quad.
    pub const VERTEX_COUNT: usize = 4;

    /// Returns a quad with the given vertices.
    pub const fn new(v1: DVector2, v2: DVector2, v3: DVector2, v4: DVector2) -> Self {
        Self { v1, v2, v3, v4 }
    }

    /// Returns the quad covering `rect`, wound top-left, top-right, bottom-right, bottom-left.
    pub fn from_rect(rect: Rect) -> Self {
        let left = f64::from(rect.x);
        let top = f64::from(rect.y);
        let right = f64::from(rect.x + rect.w);
        let bottom = f64::from(rect.y + rect.h);

        Self {
            v1: DVector2::new(left, top),
            v2: DVector2::new(right, top),
            v3: DVector2::new(right, bottom),
            v4: DVector2::new(left, bottom),
        }
    }

    /// Returns the vertices in winding order.
    pub fn vertices(&self) -> [DVector2; 4] {
        [self.v1, self.v2, self.v3, self.v4]
    }

    /// Returns the vertex at `index`.
    pub fn vertex(&self, index: usize) -> Result<DVector2> {
        self.vertices()
            .get(index)
            .copied()
            .ok_or(Error::InvalidIndex {
                index,
                len: Self::VERTEX_COUNT,
            })
    }

    /// Returns a mutable reference to the vertex at `index`.
    pub fn vertex_mut(&mut self, index: usize) -> Result<&mut DVector2> {
        match index {
            0 => Ok(&mut self.v1),
            1 => Ok(&mut self.v2),
            2 => Ok(&mut self.v3),
            3 => Ok(&mut self.v4),
            _ => Err(Error::InvalidIndex {
                index,
                len: Self::VERTEX_COUNT,
            }),
        }
    }

    fn vertices_mut(&mut self) -> [&mut DVector2; 4] {
        [&mut self.v1, &mut self.v2, &mut self.v3, &mut self.v4]
    }

    /// Returns the boundary edges, each running from a vertex to the next.
    pub fn edges(&self) -> [Line; 4] {
        [
            Line::new(self.v1, self.v2),
            Line::new(self.v2, self.v3),
            Line::new(self.v3, self.v4),
            Line::new(self.v4, self.v1),
        ]
    }

    /// Returns the average of the centroids of the triangles `v1 v2 v3` and `v1 v3 v4`.
    ///
    /// This is the true centre for parallelograms and only an approximation of the centroid for
    /// other quads.
    pub fn center(&self) -> DVector2 {
        let Self { v1, v2, v3, v4 } = *self;

        DVector2::new(
            ((v1.x + v2.x + v3.x) / 3.0 + (v1.x + v3.x + v4.x) / 3.0) / 2.0,
            ((v1.y + v2.y + v3.y) / 3.0 + (v1.y + v3.y + v4.y) / 3.0) / 2.0,
        )
    }

    /// Returns true if `point` is inside the quad or on its boundary.
    ///
    /// Casts a horizontal ray towards positive infinity and applies the even-odd rule.
    pub fn is_in(&self, point: DVector2) -> bool {
        let edges = self.edges();
        if edges.iter().any(|edge| edge.contains_point(point)) {
            return true;
        }

        // An edge whose upper endpoint lies on the ray is skipped, so a ray through a shared
        // vertex counts once and a ray grazing a corner counts zero or two times.
        let crossed: Vec<Line> = edges
            .into_iter()
            .filter(|edge| edge.p1.y.max(edge.p2.y) != point.y)
            .collect();
        let ray = Line::new(point, DVector2::new(f64::MAX, point.y));

        ray_cast(ray, &crossed) % 2 == 1
    }

    /// Rotates the quad by `degrees` around its [center](Quad::center).
    pub fn rotate(&mut self, degrees: f64) {
        let center = self.center();
        for vertex in self.vertices_mut() {
            *vertex = vertex.rotated(degrees, center);
        }
    }

    /// Moves every vertex by `movement`.
    pub fn translate(&mut self, movement: DVector2) {
        for vertex in self.vertices_mut() {
            *vertex += movement;
        }
    }

    /// Scales the distance of every vertex from `center` by `factor`. Scales around the quad's
    /// own [center](Quad::center) when `center` is `None`.
    pub fn scale(&mut self, factor: f64, center: Option<DVector2>) {
        self.scale_axes(DVector2::new(factor, factor), center);
    }

    /// Scales the distance of every vertex from `center` by a separate factor per axis.
    pub fn scale_axes(&mut self, factors: DVector2, center: Option<DVector2>) {
        let center = center.unwrap_or_else(|| self.center());
        for vertex in self.vertices_mut() {
            *vertex = center + (*vertex - center) * factors;
        }
    }
}

impl From<Rect> for Quad {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

//! Lyon-based vector/polygon rendering system.
//!
//! Provides CPU-side tessellation of filled and stroked shapes using Lyon,
//! producing a flat vertex buffer that the host renders as a triangle list.
//! Every shape takes a [`Paint`]: a solid color, a linear gradient or a radial
//! gradient, evaluated per vertex so gradients survive tessellation.
//!
//! # Usage
//!
//! ```ignore
//! draw.vectors(|v| {
//!     v.fill_rect(Vec2::ZERO, 800.0, 600.0, VectorColor::BLACK);
//!     v.fill_circle(center, 20.0, Paint::radial(center, 20.0, &stops));
//!     v.stroke_dashed(&arc, &[5.0, 5.0], 2.0, VectorColor::YELLOW);
//! });
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Segments used when a gradient disc is built ring by ring.
const DISC_SEGMENTS: usize = 48;

/// Per-vertex data for vector/polygon rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(pos: Vec2, color: VectorColor) -> Self {
        Self { x: pos.x, y: pos.y, r: color.r, g: color.g, b: color.b, a: color.a }
    }
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise interpolation, `t` clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    // Named color constants
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A color stop along a gradient, `offset` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: VectorColor,
}

impl GradientStop {
    pub const fn new(offset: f32, color: VectorColor) -> Self {
        Self { offset, color }
    }
}

/// Sample a sorted stop list at `t`. Outside the stop range the end colors pad.
pub fn sample_stops(stops: &[GradientStop], t: f32) -> VectorColor {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return VectorColor::TRANSPARENT,
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

/// How a shape is colored.
#[derive(Debug, Clone, Copy)]
pub enum Paint<'a> {
    Solid(VectorColor),
    /// Gradient along the segment `from → to`.
    Linear { from: Vec2, to: Vec2, stops: &'a [GradientStop] },
    /// Gradient by distance from `center`, reaching the last stop at `radius`.
    Radial { center: Vec2, radius: f32, stops: &'a [GradientStop] },
}

impl<'a> Paint<'a> {
    pub fn linear(from: Vec2, to: Vec2, stops: &'a [GradientStop]) -> Self {
        Paint::Linear { from, to, stops }
    }

    pub fn radial(center: Vec2, radius: f32, stops: &'a [GradientStop]) -> Self {
        Paint::Radial { center, radius, stops }
    }

    /// Color of this paint at `pos`.
    pub fn at(&self, pos: Vec2) -> VectorColor {
        match *self {
            Paint::Solid(color) => color,
            Paint::Linear { from, to, stops } => {
                let axis = to - from;
                let len_sq = axis.length_squared();
                let t = if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    (pos - from).dot(axis) / len_sq
                };
                sample_stops(stops, t)
            }
            Paint::Radial { center, radius, stops } => {
                let t = if radius <= 0.0 { 1.0 } else { pos.distance(center) / radius };
                sample_stops(stops, t)
            }
        }
    }
}

impl From<VectorColor> for Paint<'_> {
    fn from(color: VectorColor) -> Self {
        Paint::Solid(color)
    }
}

/// A two-circle radial gradient filling its outer circle: the gradient runs from
/// a circle at `focus` with `inner_radius` out to the circle at `center` with `radius`.
/// Offsetting the focus gives lit-from-one-side shading.
#[derive(Debug, Clone, Copy)]
pub struct RadialDisc<'a> {
    pub focus: Vec2,
    pub inner_radius: f32,
    pub center: Vec2,
    pub radius: f32,
    pub stops: &'a [GradientStop],
}

impl<'a> RadialDisc<'a> {
    /// A centered disc whose gradient starts at a point.
    pub fn centered(center: Vec2, radius: f32, stops: &'a [GradientStop]) -> Self {
        Self { focus: center, inner_radius: 0.0, center, radius, stops }
    }

    /// Move the gradient origin, keeping the disc itself in place.
    pub fn with_focus(mut self, focus: Vec2, inner_radius: f32) -> Self {
        self.focus = focus;
        self.inner_radius = inner_radius;
        self
    }
}

/// Split a polyline into dash segments following `pattern` (on, off, on, ...).
/// An empty or non-positive pattern yields the whole line as one dash.
pub fn dash_polyline(points: &[Vec2], pattern: &[f32]) -> Vec<Vec<Vec2>> {
    if points.len() < 2 {
        return Vec::new();
    }
    let period: f32 = pattern.iter().sum();
    if pattern.is_empty() || period <= 0.0 || pattern.iter().any(|d| *d < 0.0) {
        return vec![points.to_vec()];
    }

    let mut dashes = Vec::new();
    let mut current: Vec<Vec2> = vec![points[0]];
    let mut index = 0;
    let mut remaining = pattern[0];
    let mut drawing = true;

    for seg in points.windows(2) {
        let (mut from, to) = (seg[0], seg[1]);
        let mut seg_len = from.distance(to);
        while seg_len > 0.0 {
            if remaining > seg_len {
                remaining -= seg_len;
                if drawing {
                    current.push(to);
                }
                break;
            }
            let split = from + (to - from) * (remaining / seg_len);
            if drawing {
                current.push(split);
                if current.len() >= 2 {
                    dashes.push(std::mem::take(&mut current));
                }
            } else {
                current = vec![split];
            }
            seg_len -= remaining;
            from = split;
            drawing = !drawing;
            index = (index + 1) % pattern.len();
            remaining = pattern[index];
        }
    }
    if drawing && current.len() >= 2 {
        dashes.push(current);
    }
    dashes
}

/// Vertex constructor for lyon fill and stroke tessellation.
struct PaintVertexCtor<'a> {
    paint: Paint<'a>,
}

impl FillVertexConstructor<VectorVertex> for PaintVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let pos = Vec2::new(vertex.position().x, vertex.position().y);
        VectorVertex::at(pos, self.paint.at(pos))
    }
}

impl StrokeVertexConstructor<VectorVertex> for PaintVertexCtor<'_> {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let pos = Vec2::new(vertex.position().x, vertex.position().y);
        VectorVertex::at(pos, self.paint.at(pos))
    }
}

/// State for vector/polygon rendering.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared each frame and populated by drawing commands.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    /// Create a new VectorState with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(capacity * VectorVertex::FLOATS),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// The vertex at `index`, for inspection.
    pub fn vertex(&self, index: usize) -> Option<VectorVertex> {
        let start = index * VectorVertex::FLOATS;
        let chunk = self.buffer.get(start..start + VectorVertex::FLOATS)?;
        Some(bytemuck::cast_slice::<f32, VectorVertex>(chunk)[0])
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn push_triangle(&mut self, corners: [(Vec2, VectorColor); 3]) {
        for (pos, color) in corners {
            self.buffer.extend_from_slice(&[pos.x, pos.y, color.r, color.g, color.b, color.a]);
        }
    }

    fn polygon_path(points: &[Vec2], closed: bool) -> Path {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(closed);
        builder.build()
    }

    fn ellipse_path(center: Vec2, radii: Vec2) -> Path {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x, center.y),
            lyon::math::vector(radii.x, radii.y),
            lyon::math::Angle::radians(0.0),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    /// Tessellate and fill a polygon.
    ///
    /// The polygon is closed automatically. Supports convex and concave shapes.
    pub fn fill_polygon<'p>(&mut self, points: &[Vec2], paint: impl Into<Paint<'p>>) {
        if points.len() < 3 {
            return;
        }
        let path = Self::polygon_path(points, true);
        self.fill_path(&path, paint);
    }

    /// Tessellate and fill a rectangle.
    pub fn fill_rect<'p>(&mut self, pos: Vec2, width: f32, height: f32, paint: impl Into<Paint<'p>>) {
        let points = [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ];
        self.fill_polygon(&points, paint);
    }

    /// Fill a rectangle as a `cells × cells` grid so a gradient that is not
    /// affine over the whole rectangle (radial, multi-stop) still reads smoothly.
    pub fn fill_rect_gradient(&mut self, pos: Vec2, width: f32, height: f32, cells: u32, paint: Paint<'_>) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let cells = cells.max(1);
        let step = Vec2::new(width / cells as f32, height / cells as f32);
        for row in 0..cells {
            for col in 0..cells {
                let p0 = pos + step * Vec2::new(col as f32, row as f32);
                let p1 = p0 + Vec2::new(step.x, 0.0);
                let p2 = p0 + step;
                let p3 = p0 + Vec2::new(0.0, step.y);
                let [c0, c1, c2, c3] = [p0, p1, p2, p3].map(|p| paint.at(p));
                self.push_triangle([(p0, c0), (p1, c1), (p2, c2)]);
                self.push_triangle([(p0, c0), (p2, c2), (p3, c3)]);
            }
        }
    }

    /// Tessellate and fill a circle.
    ///
    /// The circle is approximated using lyon's default tolerance.
    pub fn fill_circle<'p>(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint<'p>>) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.fill_path(&path, paint);
    }

    /// Tessellate and fill an ellipse.
    pub fn fill_ellipse<'p>(&mut self, center: Vec2, radii: Vec2, paint: impl Into<Paint<'p>>) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let path = Self::ellipse_path(center, radii);
        self.fill_path(&path, paint);
    }

    /// Fill a disc with a two-circle radial gradient.
    ///
    /// Built as concentric rings, one per stop, whose centers slide from the
    /// focus to the disc center.
    pub fn fill_radial_disc(&mut self, disc: &RadialDisc<'_>) {
        if disc.radius <= 0.0 || disc.stops.is_empty() {
            return;
        }

        let mut offsets: Vec<f32> = std::iter::once(0.0)
            .chain(disc.stops.iter().map(|s| s.offset.clamp(0.0, 1.0)))
            .chain(std::iter::once(1.0))
            .collect();
        offsets.sort_by(|a, b| a.total_cmp(b));
        offsets.dedup_by(|a, b| (*a - *b).abs() < 1e-4);

        let ring = |t: f32| {
            let center = disc.focus.lerp(disc.center, t);
            let radius = disc.inner_radius + (disc.radius - disc.inner_radius) * t;
            (center, radius, sample_stops(disc.stops, t))
        };
        let rim = |center: Vec2, radius: f32, i: usize| {
            let angle = i as f32 / DISC_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        };

        if disc.inner_radius > 0.0 {
            let (center, radius, color) = ring(0.0);
            for i in 0..DISC_SEGMENTS {
                self.push_triangle([
                    (center, color),
                    (rim(center, radius, i), color),
                    (rim(center, radius, i + 1), color),
                ]);
            }
        }

        for pair in offsets.windows(2) {
            let (c0, r0, col0) = ring(pair[0]);
            let (c1, r1, col1) = ring(pair[1]);
            for i in 0..DISC_SEGMENTS {
                let (a0, b0) = (rim(c0, r0, i), rim(c0, r0, i + 1));
                let (a1, b1) = (rim(c1, r1, i), rim(c1, r1, i + 1));
                if r0 > 0.0 {
                    self.push_triangle([(a0, col0), (a1, col1), (b1, col1)]);
                    self.push_triangle([(a0, col0), (b1, col1), (b0, col0)]);
                } else {
                    self.push_triangle([(c0, col0), (a1, col1), (b1, col1)]);
                }
            }
        }
    }

    /// Tessellate and fill an arbitrary lyon Path.
    pub fn fill_path<'p>(&mut self, path: &Path, paint: impl Into<Paint<'p>>) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, PaintVertexCtor { paint: paint.into() }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline<'p>(&mut self, points: &[Vec2], width: f32, paint: impl Into<Paint<'p>>) {
        if points.len() < 2 {
            return;
        }
        let path = Self::polygon_path(points, false);
        self.stroke_path(&path, width, paint);
    }

    /// Stroke a polyline broken into dashes by `pattern` (on, off, ...).
    pub fn stroke_dashed<'p>(&mut self, points: &[Vec2], pattern: &[f32], width: f32, paint: impl Into<Paint<'p>>) {
        let paint = paint.into();
        for dash in dash_polyline(points, pattern) {
            self.stroke_polyline(&dash, width, paint);
        }
    }

    /// Tessellate a stroked closed polygon.
    pub fn stroke_polygon<'p>(&mut self, points: &[Vec2], width: f32, paint: impl Into<Paint<'p>>) {
        if points.len() < 3 {
            return;
        }
        let path = Self::polygon_path(points, true);
        self.stroke_path(&path, width, paint);
    }

    /// Tessellate a stroked circle.
    pub fn stroke_circle<'p>(&mut self, center: Vec2, radius: f32, width: f32, paint: impl Into<Paint<'p>>) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, paint);
    }

    /// Tessellate a stroked axis-aligned ellipse.
    pub fn stroke_ellipse<'p>(&mut self, center: Vec2, radii: Vec2, width: f32, paint: impl Into<Paint<'p>>) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        let path = Self::ellipse_path(center, radii);
        self.stroke_path(&path, width, paint);
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path<'p>(&mut self, path: &Path, width: f32, paint: impl Into<Paint<'p>>) {
        if width <= 0.0 {
            return;
        }
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, PaintVertexCtor { paint: paint.into() }),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}

//! Face tessellation - turns the dial layout into a GPU triangle list
//!
//! The whole face is rebuilt every frame, in painter's order: dial border,
//! hands, ticks, center dot, numerals. Ticks therefore draw over the hands
//! and the numerals draw over everything.

use dialkit_core::{ClockTime, Color, HandKind, Theme};
use dialkit_math::{DialLayout, Vec2};

use crate::glyph;
use crate::pipeline::Vertex2D;

/// Segments used to approximate the dial border circle
pub const DIAL_SEGMENTS: usize = 128;
/// Segments used to approximate the center dot
pub const CENTER_DOT_SEGMENTS: usize = 32;
/// Drop-shadow color
pub const SHADOW_COLOR: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.35,
};

/// GPU-ready face geometry
///
/// Holds the frame's triangle list in a format ready for upload to the
/// vertex buffer.
pub struct FaceGeometry {
    /// Triangle-list vertices, three per triangle
    pub vertices: Vec<Vertex2D>,
}

impl FaceGeometry {
    /// Create an empty face geometry
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create face geometry with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the geometry is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.vertices.push(Vertex2D::new(a, color));
        self.vertices.push(Vertex2D::new(b, color));
        self.vertices.push(Vertex2D::new(c, color));
    }

    /// Add a stroked line segment as a quad of the given width
    pub fn add_segment(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        let offset = (b - a).normalized().perp() * (width / 2.0);
        self.push_triangle(a - offset, a + offset, b + offset, color);
        self.push_triangle(a - offset, b + offset, b - offset, color);
    }

    /// Add an axis-aligned square centered on a point
    pub fn add_square(&mut self, center: Vec2, side: f32, color: Color) {
        let h = side / 2.0;
        let tl = center + Vec2::new(-h, -h);
        let tr = center + Vec2::new(h, -h);
        let br = center + Vec2::new(h, h);
        let bl = center + Vec2::new(-h, h);
        self.push_triangle(tl, tr, br, color);
        self.push_triangle(tl, br, bl, color);
    }

    /// Add a filled disc as a triangle fan
    pub fn add_disc(&mut self, center: Vec2, radius: f32, segments: usize, color: Color) {
        let step = std::f32::consts::TAU / segments as f32;
        for i in 0..segments {
            let a = center + Vec2::from_angle(i as f32 * step) * radius;
            let b = center + Vec2::from_angle((i + 1) as f32 * step) * radius;
            self.push_triangle(center, a, b, color);
        }
    }

    /// Add a stroked circle as an annulus around the given radius
    pub fn add_ring(&mut self, center: Vec2, radius: f32, width: f32, segments: usize, color: Color) {
        let inner = radius - width / 2.0;
        let outer = radius + width / 2.0;
        let step = std::f32::consts::TAU / segments as f32;
        for i in 0..segments {
            let dir0 = Vec2::from_angle(i as f32 * step);
            let dir1 = Vec2::from_angle((i + 1) as f32 * step);
            let in0 = center + dir0 * inner;
            let out0 = center + dir0 * outer;
            let in1 = center + dir1 * inner;
            let out1 = center + dir1 * outer;
            self.push_triangle(in0, out0, out1, color);
            self.push_triangle(in0, out1, in1, color);
        }
    }

    /// Add a numeral label with its bounding box centered on the anchor
    pub fn add_label(&mut self, label: &str, anchor: Vec2, text_size: f32, color: Color) {
        let size = glyph::measure_label(label, text_size);
        let origin = anchor - size / 2.0;
        let stroke = glyph::stroke_width(text_size);
        for (a, b) in glyph::label_segments(label, text_size) {
            self.add_segment(origin + a, origin + b, stroke, color);
        }
    }
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the complete face for one frame
pub fn build_face(layout: &DialLayout, theme: &Theme, time: &ClockTime) -> FaceGeometry {
    let mut face = FaceGeometry::with_capacity(4096);
    add_dial_border(&mut face, layout, theme);
    add_hands(&mut face, layout, theme, time);
    add_ticks(&mut face, layout, theme);
    add_center_dot(&mut face, layout, theme);
    add_numerals(&mut face, layout, theme);
    face
}

/// Dial border circle, with its drop shadow beneath
fn add_dial_border(face: &mut FaceGeometry, layout: &DialLayout, theme: &Theme) {
    let shadow_center = layout.center + layout.shadow_offset();
    face.add_ring(
        shadow_center,
        layout.dial_radius(),
        layout.border_width(),
        DIAL_SEGMENTS,
        SHADOW_COLOR,
    );
    face.add_ring(
        layout.center,
        layout.dial_radius(),
        layout.border_width(),
        DIAL_SEGMENTS,
        theme.primary,
    );
}

/// The three hands, slowest first, each with its drop shadow
fn add_hands(face: &mut FaceGeometry, layout: &DialLayout, theme: &Theme, time: &ClockTime) {
    for kind in HandKind::ALL {
        let value = kind.dial_value(time);
        let endpoint = layout.hand_endpoint(value, kind.length_scale());
        let width = layout.hand_width(kind.width_scale());

        let offset = layout.shadow_offset();
        face.add_segment(layout.center + offset, endpoint + offset, width, SHADOW_COLOR);
        face.add_segment(layout.center, endpoint, width, theme.primary);
    }
}

/// The 60 tick marks on the tick ring
fn add_ticks(face: &mut FaceGeometry, layout: &DialLayout, theme: &Theme) {
    for i in 0..60 {
        face.add_square(layout.tick_position(i), layout.tick_width(i), theme.tertiary);
    }
}

/// Filled center dot over the hand bases
fn add_center_dot(face: &mut FaceGeometry, layout: &DialLayout, theme: &Theme) {
    let shadow_center = layout.center + layout.shadow_offset();
    face.add_disc(
        shadow_center,
        layout.center_radius(),
        CENTER_DOT_SEGMENTS,
        SHADOW_COLOR,
    );
    face.add_disc(
        layout.center,
        layout.center_radius(),
        CENTER_DOT_SEGMENTS,
        theme.primary,
    );
}

/// Hour numerals 1-12, bounding-box centered on the numeral ring
fn add_numerals(face: &mut FaceGeometry, layout: &DialLayout, theme: &Theme) {
    let text_size = layout.numeral_text_size();
    for numeral in 1..=12 {
        face.add_label(
            &numeral.to_string(),
            layout.numeral_anchor(numeral),
            text_size,
            theme.primary,
        );
    }
}

use gl_wrapper::geometry::{GBError, Geometry, GeometryBuilder, VertexAttribute};
use gl_wrapper::renderer::Color;

#[rustfmt::skip]
pub const POSITIONS: [f32; 9] = [
    -0.5, -0.5, 0.0,
    0.5, -0.5, 0.0,
    0.0, 0.5, 0.0,
];

#[rustfmt::skip]
pub const COLORS: [f32; 12] = [
    1.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 1.0, 1.0,
    0.0, 1.0, 0.0, 1.0,
];

pub const INDICES: [u32; 3] = [0, 1, 2];

// Same red as the first vertex.
pub const CLEAR_COLOR: Color = Color::RED;

/// Positions on attribute 0, colors on attribute 1.
pub fn geometry() -> Result<Geometry, GBError> {
    GeometryBuilder::new()
        .with_stream(VertexAttribute::Vec3, &POSITIONS)
        .with_stream(VertexAttribute::Vec4, &COLORS)
        .with_indices(&INDICES)
        .build()
}

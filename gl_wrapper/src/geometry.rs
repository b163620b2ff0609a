use std::ffi::c_void;
use thiserror::Error;

use crate::buffer::{Buffer, BufferTarget};

/// Builds a vertex array with one tightly packed buffer per attribute.
///
/// Stream `i` feeds vertex attribute `i`.
pub struct GeometryBuilder<'a> {
    streams: Vec<(VertexAttribute, &'a [f32])>,
    indices: Option<&'a [u32]>,
}

impl<'a> GeometryBuilder<'a> {
    pub fn new() -> Self {
        Self {
            streams: Vec::new(),
            indices: None,
        }
    }

    pub fn with_stream(mut self, attr: VertexAttribute, data: &'a [f32]) -> Self {
        self.streams.push((attr, data));
        self
    }

    pub fn with_indices(mut self, indices: &'a [u32]) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Checks the streams against each other and returns the vertex count.
    pub fn vertex_count(&self) -> Result<usize, GBError> {
        let mut vertices = None;

        for (attr, data) in &self.streams {
            if data.len() % attr.size() != 0 {
                return Err(GBError::InvalidDataLength);
            }

            let count = data.len() / attr.size();
            match vertices {
                None => vertices = Some(count),
                Some(expected) if expected != count => {
                    return Err(GBError::MismatchedStreams {
                        expected,
                        found: count,
                    })
                }
                Some(_) => {}
            }
        }

        let vertices = vertices.ok_or(GBError::NoStreams)?;

        if let Some(index) = self
            .indices
            .into_iter()
            .flatten()
            .find(|i| **i as usize >= vertices)
        {
            return Err(GBError::IndexOutOfRange {
                index: *index,
                vertices,
            });
        }

        Ok(vertices)
    }

    pub fn build(self) -> Result<Geometry, GBError> {
        let vertices = self.vertex_count()?;

        let mut vao = 0;
        let mut buffers = Vec::with_capacity(self.streams.len());

        unsafe {
            gl::GenVertexArrays(1, (&mut vao) as *mut u32);
            gl::BindVertexArray(vao);
        }

        for (i, (attr, data)) in self.streams.iter().enumerate() {
            buffers.push(Buffer::new(BufferTarget::Array, *data));

            unsafe {
                gl::VertexAttribPointer(
                    i as u32,
                    attr.size() as i32,
                    gl::FLOAT,
                    gl::FALSE,
                    0,
                    std::ptr::null::<c_void>(),
                );
                gl::EnableVertexAttribArray(i as u32);
            }
        }

        // recorded by the bound vertex array
        let index_buffer = self
            .indices
            .map(|indices| Buffer::new(BufferTarget::ElementArray, indices));

        Buffer::unbind(BufferTarget::Array);
        unsafe {
            gl::BindVertexArray(0);
        }

        let elements = self.indices.map_or(vertices, |i| i.len());

        Ok(Geometry {
            vao,
            buffers,
            index_buffer,
            elements,
        })
    }
}

impl Default for GeometryBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GBError {
    #[error("Invalid data length for given attributes")]
    InvalidDataLength,
    #[error("Geometry needs at least one attribute stream")]
    NoStreams,
    #[error("Attribute stream has {found} vertices, expected {expected}")]
    MismatchedStreams { expected: usize, found: usize },
    #[error("Index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
}

#[derive(Copy, Clone, Debug)]
pub enum VertexAttribute {
    Float,
    Vec2,
    Vec3,
    Vec4,
}

impl VertexAttribute {
    pub fn size(&self) -> usize {
        match self {
            VertexAttribute::Float => 1,
            VertexAttribute::Vec2 => 2,
            VertexAttribute::Vec3 => 3,
            VertexAttribute::Vec4 => 4,
        }
    }
}

pub struct Geometry {
    vao: u32,
    // dropped after the vertex array
    #[allow(dead_code)]
    buffers: Vec<Buffer>,
    index_buffer: Option<Buffer>,
    elements: usize,
}

impl Geometry {
    pub fn vao(&self) -> u32 {
        self.vao
    }

    pub fn elements(&self) -> usize {
        self.elements
    }

    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, (&self.vao) as *const u32);
        }
    }
}

use gl::types::{GLenum, GLuint};
use std::ffi::c_void;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BufferTarget {
    Array,
    ElementArray,
}

impl BufferTarget {
    pub fn gl_enum(&self) -> GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// GPU buffer holding static data. Left bound to its target after creation.
pub struct Buffer {
    id: GLuint,
}

impl Buffer {
    pub fn new<T: Copy>(target: BufferTarget, data: &[T]) -> Self {
        let mut id = 0;

        unsafe {
            gl::GenBuffers(1, (&mut id) as *mut u32);
            gl::BindBuffer(target.gl_enum(), id);

            gl::BufferData(
                target.gl_enum(),
                std::mem::size_of_val(data) as isize,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        Self { id }
    }

    pub fn unbind(target: BufferTarget) {
        unsafe {
            gl::BindBuffer(target.gl_enum(), 0);
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, (&self.id) as *const u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_map_to_gl() {
        assert_eq!(BufferTarget::Array.gl_enum(), gl::ARRAY_BUFFER);
        assert_eq!(BufferTarget::ElementArray.gl_enum(), gl::ELEMENT_ARRAY_BUFFER);
    }
}

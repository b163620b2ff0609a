use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString, NulError};
use thiserror::Error;

const LOG_CAPACITY: usize = 1024;

pub struct ProgramBuilder<'a> {
    vert: &'a str,
    frag: &'a str,
}

impl<'a> ProgramBuilder<'a> {
    pub fn new(vert_src: &'a str, frag_src: &'a str) -> Self {
        Self {
            vert: vert_src,
            frag: frag_src,
        }
    }

    /// Compiles both stages and links them into a program.
    ///
    /// The stage objects are detached and deleted once linking is done,
    /// whether it succeeded or not.
    pub fn build(self) -> Result<Program, PBError> {
        let vert_src = CString::new(self.vert)?;
        let frag_src = CString::new(self.frag)?;

        let vert = compile(gl::VERTEX_SHADER, &vert_src)?;
        let frag = match compile(gl::FRAGMENT_SHADER, &frag_src) {
            Ok(frag) => frag,
            Err(e) => {
                unsafe { gl::DeleteShader(vert) };
                return Err(e);
            }
        };

        let mut success: i32 = 0;

        unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::DetachShader(program, vert);
            gl::DetachShader(program, frag);
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; LOG_CAPACITY];

                gl::GetProgramInfoLog(
                    program,
                    LOG_CAPACITY as i32,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );
                gl::DeleteProgram(program);

                return Err(PBError::Linking(read_log(&buf)));
            }

            Ok(Program { id: program })
        }
    }
}

fn compile(kind: GLenum, src: &CString) -> Result<GLuint, PBError> {
    let mut success: i32 = 0;

    unsafe {
        let shader = gl::CreateShader(kind);

        gl::ShaderSource(
            shader,
            1,
            (&src.as_ptr()) as *const *const c_char,
            std::ptr::null(),
        );

        gl::CompileShader(shader);
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
        if success != 1 {
            let mut buf = [0_u8; LOG_CAPACITY];

            gl::GetShaderInfoLog(
                shader,
                LOG_CAPACITY as i32,
                std::ptr::null_mut(),
                buf.as_mut_ptr() as *mut c_char,
            );
            gl::DeleteShader(shader);

            return Err(PBError::Compilation(read_log(&buf)));
        }

        Ok(shader)
    }
}

/// Driver logs are NUL terminated inside a fixed buffer.
fn read_log(buf: &[u8]) -> String {
    let data = buf.split(|a| *a == 0).next().unwrap_or(buf);

    String::from_utf8_lossy(data).trim_end().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("shader source contains a NUL byte")]
    InvalidSource(#[from] NulError),
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nul_in_source_is_rejected_before_gl() {
        let res = ProgramBuilder::new("void main() {}\0", "void main() {}").build();

        assert!(matches!(res, Err(PBError::InvalidSource(_))));
    }

    #[test]
    fn log_is_cut_at_nul() {
        let mut buf = [0_u8; 32];
        buf[..12].copy_from_slice(b"error: oops\n");

        assert_eq!(read_log(&buf), "error: oops");
    }

    #[test]
    fn full_log_without_nul() {
        assert_eq!(read_log(b"link failed"), "link failed");
    }

    #[test]
    fn link_error_displays_driver_log() {
        let err = PBError::Linking("vertex output not read".to_string());

        assert_eq!(err.to_string(), "vertex output not read");
    }
}

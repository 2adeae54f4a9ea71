use std::ffi::CStr;
use std::ptr::null;

use gl;
use gl::types::*;
use tracing::info;

use crate::error::GlcError;

/// Human-readable name of a raw shader type enum, as used in log output.
pub fn shader_type_name(kind: GLenum) -> &'static str {
    match kind {
        gl::VERTEX_SHADER => "Vertex",
        gl::FRAGMENT_SHADER => "Fragment",
        gl::GEOMETRY_SHADER => "Geometry",
        gl::TESS_CONTROL_SHADER => "TessellationControl",
        gl::TESS_EVALUATION_SHADER => "TessellationEvaluation",
        gl::COMPUTE_SHADER => "Compute",
        _ => "Unknown",
    }
}

/// Turns the raw bytes written by `glGet*InfoLog` into a string. The driver counts the
/// terminating nul in the length it reports, and some pad the log with trailing newlines.
pub fn info_log_to_string(mut buf: Vec<u8>, written: usize) -> String {
    buf.truncate(written.min(buf.len()));
    if let Some(nul) = buf.iter().position(|&b| b == 0) {
        buf.truncate(nul);
    }

    String::from_utf8_lossy(&buf).trim_end().to_owned()
}

/// The shader's info log, or `None` if the driver had nothing to say.
pub fn shader_info_log(id: GLuint) -> Option<String> {
    let mut len: GLint = 0;
    unsafe {
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    if len <= 1 {
        return None;
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetShaderInfoLog(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
    }

    let log = info_log_to_string(buf, written as usize);
    if log.is_empty() { None } else { Some(log) }
}

/// The program's info log, or `None` if the driver had nothing to say.
pub fn program_info_log(id: GLuint) -> Option<String> {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    if len <= 1 {
        return None;
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    unsafe {
        gl::GetProgramInfoLog(id, len, &mut written, buf.as_mut_ptr() as *mut GLchar);
    }

    let log = info_log_to_string(buf, written as usize);
    if log.is_empty() { None } else { Some(log) }
}

/// Compiles a shader of the given kind. Whatever the compiler logs is passed on, whether or not
/// compilation succeeded. On failure the shader object is deleted before returning.
pub fn shader_from_source(source: &CStr, kind: GLenum) -> Result<GLuint, GlcError> {
    let id = unsafe { gl::CreateShader(kind) };
    if id == 0 {
        return Err(GlcError::NullHandle("shader"));
    }

    unsafe {
        gl::ShaderSource(id, 1, &source.as_ptr(), null());
        gl::CompileShader(id);
    }

    let log = shader_info_log(id);
    if let Some(log) = &log {
        info!("{} Shader Log: {}", shader_type_name(kind), log);
    }

    let mut success: GLint = 1;
    unsafe {
        gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
    }

    if success == 0 {
        unsafe {
            gl::DeleteShader(id);
        }

        return Err(GlcError::ShaderCompile {
            kind: shader_type_name(kind),
            log: log.unwrap_or_default(),
        });
    }

    Ok(id)
}

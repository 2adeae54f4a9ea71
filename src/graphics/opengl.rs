//! A small set of safe wrappers around the OpenGL objects the demos use.
//!
//! Each wrapper owns its GL name and deletes it when dropped, so a demo only has to keep its
//! objects alive for as long as it draws with them. All of this assumes a current context with
//! the function pointers loaded.

use std::ffi::{c_void, CString};
use std::fs;
use std::mem::size_of;
use std::path::Path;

use bytemuck::Pod;
use gl;
use gl::types::*;
use geometry::Mat4;
use tracing::{debug, info};

use super::utils::*;
use crate::error::GlcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlShaderType {
    Vertex = gl::VERTEX_SHADER as isize,
    Fragment = gl::FRAGMENT_SHADER as isize,
    Geometry = gl::GEOMETRY_SHADER as isize,
    TessControl = gl::TESS_CONTROL_SHADER as isize,
    TessEvaluation = gl::TESS_EVALUATION_SHADER as isize,
    Compute = gl::COMPUTE_SHADER as isize,
}

impl GlShaderType {
    pub fn raw(self) -> GLenum {
        self as GLenum
    }

    pub fn name(self) -> &'static str {
        shader_type_name(self.raw())
    }
}

/// A compiled shader stage.
pub struct GlShader {
    id: GLuint,
    kind: GlShaderType,
}

impl GlShader {
    pub fn id(&self) -> GLuint { self.id }

    pub fn kind(&self) -> GlShaderType { self.kind }

    pub fn from_source(kind: GlShaderType, source: &str) -> Result<Self, GlcError> {
        let source = CString::new(source)?;
        let id = shader_from_source(&source, kind.raw())?;

        Ok(Self { id, kind })
    }

    pub fn from_file<P: AsRef<Path>>(kind: GlShaderType, path: P) -> Result<Self, GlcError> {
        let path = path.as_ref();
        debug!("loading {} shader from {}", kind.name(), path.display());

        let source = fs::read_to_string(path).map_err(|source| GlcError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_source(kind, &source)
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// A linked and validated shader program.
pub struct GlProgram {
    id: GLuint,
}

impl GlProgram {
    pub fn id(&self) -> GLuint { self.id }

    /// Links the shaders into a program. Fragment output 0 is bound to `fragColor`. The shaders
    /// are detached again afterwards, so they can be dropped as soon as this returns.
    pub fn from_shaders(shaders: &[&GlShader]) -> Result<Self, GlcError> {
        let id = unsafe { gl::CreateProgram() };
        if id == 0 {
            return Err(GlcError::NullHandle("program"));
        }

        // From here on, dropping `program` cleans up after any failure
        let program = Self { id };
        let frag_color = CString::new("fragColor")?;

        unsafe {
            for shader in shaders {
                gl::AttachShader(id, shader.id());
            }

            gl::BindFragDataLocation(id, 0, frag_color.as_ptr());
            gl::LinkProgram(id);
        }

        let status = program.check_status(gl::LINK_STATUS);
        if let Err(log) = status {
            return Err(GlcError::ProgramLink(log));
        }

        unsafe {
            gl::ValidateProgram(id);
        }

        let status = program.check_status(gl::VALIDATE_STATUS);
        if let Err(log) = status {
            return Err(GlcError::ProgramValidate(log));
        }

        unsafe {
            for shader in shaders {
                gl::DetachShader(id, shader.id());
            }
        }

        debug!(program = id, stages = shaders.len(), "linked shader program");

        Ok(program)
    }

    fn check_status(&self, pname: GLenum) -> Result<(), String> {
        let log = program_info_log(self.id);
        if let Some(log) = &log {
            info!("Program Log: {}", log);
        }

        let mut status: GLint = 1;
        unsafe {
            gl::GetProgramiv(self.id, pname, &mut status);
        }

        if status == 0 {
            Err(log.unwrap_or_default())
        } else {
            Ok(())
        }
    }

    pub fn set_used(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    /// Location of an active vertex attribute. Attributes the compiler optimized out aren't found.
    pub fn attrib_location(&self, name: &str) -> Option<GLuint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetAttribLocation(self.id, name.as_ptr()) };

        if location < 0 { None } else { Some(location as GLuint) }
    }

    /// Like `attrib_location`, but a missing attribute is an error.
    pub fn require_attrib(&self, name: &'static str) -> Result<GLuint, GlcError> {
        self.attrib_location(name).ok_or(GlcError::MissingAttribute(name))
    }

    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        let name = CString::new(name).ok()?;
        let location = unsafe { gl::GetUniformLocation(self.id, name.as_ptr()) };

        if location < 0 { None } else { Some(location) }
    }

    /// Sets a float uniform on this program. The program must be in use.
    pub fn set_uniform_f32(&self, location: GLint, value: f32) {
        unsafe {
            gl::Uniform1f(location, value);
        }
    }

    /// Sets a matrix uniform on this program. The program must be in use.
    pub fn set_uniform_mat4(&self, location: GLint, value: &Mat4) {
        let columns = value.to_cols_array();
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr());
        }
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

/// Remembers the vertex attribute layout for a buffer, so drawing only has to bind this.
pub struct GlVertexArray {
    id: GLuint,
}

impl GlVertexArray {
    pub fn id(&self) -> GLuint { self.id }

    pub fn generate() -> Self {
        let mut id = 0;
        unsafe { gl::GenVertexArrays(1, &mut id) };
        Self { id }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }
}

impl Drop for GlVertexArray {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

/// A [vertex buffer object (VBO)](https://en.wikipedia.org/wiki/Vertex_buffer_object) holding
/// static vertex data.
pub struct GlVertexBuffer {
    id: GLuint,
    len: usize,
}

impl GlVertexBuffer {
    pub fn id(&self) -> GLuint { self.id }

    /// Number of vertices uploaded.
    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Uploads `data` into a new buffer. The buffer is left bound to `GL_ARRAY_BUFFER`.
    pub fn init<T: Pod>(data: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);

        let vbo = Self::generate(data.len());
        vbo.bind();
        unsafe {
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }

        vbo
    }

    fn generate(len: usize) -> Self {
        let mut id = 0;
        unsafe { gl::GenBuffers(1, &mut id) };
        Self { id, len }
    }

    pub fn bind(&self) {
        unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, self.id) };
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

/// Describes a float attribute in the bound array buffer. `size` is the number of components,
/// `stride` and `offset` are in bytes.
pub fn set_vertex_attrib(index: GLuint, size: GLint, stride: usize, offset: usize) {
    unsafe {
        gl::EnableVertexAttribArray(index);
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            stride as GLsizei,
            offset as *const c_void,
        );
    }
}

/// Stride of a vertex type, for `set_vertex_attrib`.
pub fn stride_of<T>() -> usize {
    size_of::<T>()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shader_type_enum_matches_gl() {
        assert_eq!(GlShaderType::Vertex.raw(), gl::VERTEX_SHADER);
        assert_eq!(GlShaderType::Geometry.raw(), gl::GEOMETRY_SHADER);
        assert_eq!(GlShaderType::Fragment.name(), "Fragment");
        assert_eq!(GlShaderType::TessEvaluation.name(), "TessellationEvaluation");
    }

    #[test]
    fn strides_follow_the_vertex_layout() {
        assert_eq!(stride_of::<geometry::PositionNormal>(), 24);
        assert_eq!(stride_of::<geometry::MeshVertex>(), 32);
    }
}

//! A cube spinning around the y axis, each face coloured by its normal.

use gl;
use gl::types::*;
use geometry::mesh::CUBE_VERTICES;
use geometry::{Mat4, PositionNormal};

use super::{Demo, Frame, FOV, Z_FAR, Z_NEAR};
use crate::error::GlcError;
use crate::graphics::opengl::*;

const VERTEX_SHADER: &str = "#version 330 core

out vec3 vNormal;

in vec3 position;
in vec3 normal;

uniform mat4 mvp;

void main()
{
    vNormal = normal;
    gl_Position = mvp * vec4(position, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core

out vec4 fragColor;

in vec3 vNormal;

void main()
{
    fragColor = vec4(abs(vNormal), 1.0);
}
";

/// The cube sits two units in front of the camera and turns one radian per second.
pub fn cube_mvp(frame: &Frame) -> Mat4 {
    let projection = Mat4::perspective(FOV, frame.aspect(), Z_NEAR, Z_FAR);
    let view = Mat4::translation(0.0, 0.0, -2.0);
    // Clockwise seen from above, one radian per second
    let model = Mat4::rotation(-frame.time, 0.0, 1.0, 0.0);

    projection * view * model
}

pub struct CubeDemo {
    program: GlProgram,
    vao: GlVertexArray,
    vbo: GlVertexBuffer,
    mvp: Option<GLint>,
}

impl CubeDemo {
    pub fn new() -> Result<Self, GlcError> {
        let program = {
            let vertex = GlShader::from_source(GlShaderType::Vertex, VERTEX_SHADER)?;
            let fragment = GlShader::from_source(GlShaderType::Fragment, FRAGMENT_SHADER)?;
            GlProgram::from_shaders(&[&vertex, &fragment])?
        };

        program.set_used();

        let position = program.require_attrib("position")?;
        let normal = program.require_attrib("normal")?;
        let mvp = program.uniform_location("mvp");

        let vao = GlVertexArray::generate();
        vao.bind();

        let vbo = GlVertexBuffer::init(&CUBE_VERTICES);

        let stride = stride_of::<PositionNormal>();
        set_vertex_attrib(position, 3, stride, PositionNormal::POSITION_OFFSET);
        set_vertex_attrib(normal, 3, stride, PositionNormal::NORMAL_OFFSET);

        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::Enable(gl::CULL_FACE);
        }

        Ok(Self { program, vao, vbo, mvp })
    }
}

impl Demo for CubeDemo {
    fn draw(&mut self, frame: &Frame) {
        self.program.set_used();

        if let Some(mvp) = self.mvp {
            self.program.set_uniform_mat4(mvp, &cube_mvp(frame));
        }

        unsafe {
            gl::Viewport(0, 0, frame.width, frame.height);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.vao.bind();
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, 0, self.vbo.len() as GLsizei);
        }
    }
}

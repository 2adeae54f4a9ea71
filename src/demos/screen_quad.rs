//! A quad covering the whole window, its colour cycling with time.

use gl;
use gl::types::*;
use geometry::mesh::SCREEN_QUAD_VERTICES;
use geometry::PositionTexCoord;

use super::{Demo, Frame};
use crate::error::GlcError;
use crate::graphics::opengl::*;

const VERTEX_SHADER: &str = "#version 330 core

in vec2 position;
in vec2 texCoord;

out vec2 vTexCoord;

void main()
{
    vTexCoord = texCoord;
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_SHADER: &str = "#version 330 core

out vec4 fragColor;

in vec2 vTexCoord;

uniform float time;

void main()
{
    fragColor = vec4(sin(time + vTexCoord.xyx + vec3(0.0, 2.0, 4.0)) * 0.5 + 0.5, 1.0);
}
";

pub struct ScreenQuadDemo {
    program: GlProgram,
    vao: GlVertexArray,
    vbo: GlVertexBuffer,
    time: Option<GLint>,
}

impl ScreenQuadDemo {
    pub fn new() -> Result<Self, GlcError> {
        let program = {
            let vertex = GlShader::from_source(GlShaderType::Vertex, VERTEX_SHADER)?;
            let fragment = GlShader::from_source(GlShaderType::Fragment, FRAGMENT_SHADER)?;
            GlProgram::from_shaders(&[&vertex, &fragment])?
        };

        program.set_used();

        let position = program.require_attrib("position")?;
        let tex_coord = program.require_attrib("texCoord")?;
        let time = program.uniform_location("time");

        let vao = GlVertexArray::generate();
        vao.bind();

        let vbo = GlVertexBuffer::init(&SCREEN_QUAD_VERTICES);

        let stride = stride_of::<PositionTexCoord>();
        set_vertex_attrib(position, 2, stride, PositionTexCoord::POSITION_OFFSET);
        set_vertex_attrib(tex_coord, 2, stride, PositionTexCoord::TEX_COORD_OFFSET);

        Ok(Self { program, vao, vbo, time })
    }
}

impl Demo for ScreenQuadDemo {
    fn draw(&mut self, frame: &Frame) {
        unsafe {
            gl::Viewport(0, 0, frame.width, frame.height);
        }

        self.program.set_used();
        if let Some(time) = self.time {
            self.program.set_uniform_f32(time, frame.time);
        }

        self.vao.bind();
        unsafe {
            gl::DrawArrays(gl::TRIANGLE_FAN, 0, self.vbo.len() as GLsizei);
        }
    }
}

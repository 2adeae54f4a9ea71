//! Draws a mesh, then draws its vertex normals on top of it as short lines.
//!
//! The normals come out of a geometry shader: every vertex goes in as a point and comes out as a
//! line from the vertex along its normal. Those shaders live on disk under the shader directory,
//! while the plain shaded pass is built in.

use gl;
use gl::types::*;
use geometry::{radians, Mat4, MeshVertex};
use tracing::info;

use super::{Demo, Frame, FOV, Z_FAR, Z_NEAR};
use crate::config::DemoConfig;
use crate::error::GlcError;
use crate::graphics::opengl::*;

pub const ATTRIBUTE_POSITION: GLuint = 0;
pub const ATTRIBUTE_NORMAL: GLuint = 1;

lazy_static! {
    static ref DEFAULT_VERTEX_SHADER: String = format!(
        "#version 330 core

layout(location = {position}) in vec3 position;
layout(location = {normal}) in vec3 normal;

out vec3 vNormal;

uniform mat4 mvp;

void main()
{{
    vNormal = normal;
    gl_Position = mvp * vec4(position, 1.0);
}}
",
        position = ATTRIBUTE_POSITION,
        normal = ATTRIBUTE_NORMAL,
    );
}

const DEFAULT_FRAGMENT_SHADER: &str = "#version 330 core

out vec4 fragColor;

in vec3 vNormal;

void main()
{
    fragColor = vec4(abs(vNormal), 1.0);
}
";

/// The camera backs off three units and nods up and down by up to 16 degrees, while the model
/// turns half a radian per second.
pub fn normals_mvp(frame: &Frame) -> Mat4 {
    let projection = Mat4::perspective(FOV, frame.aspect(), Z_NEAR, Z_FAR);

    let mut view = Mat4::identity();
    view.translate(0.0, 0.0, -3.0);
    // Positive tilts lean the top of the model away from the camera
    view.rotate(-radians((frame.time * 0.75).cos() * 16.0), 1.0, 0.0, 0.0);

    // Clockwise seen from above
    let model = Mat4::rotation(-frame.time * 0.5, 0.0, 1.0, 0.0);

    projection * view * model
}

pub struct NormalsDemo {
    shaded: GlProgram,
    visualizer: GlProgram,
    vao: GlVertexArray,
    vbo: GlVertexBuffer,
    shaded_mvp: Option<GLint>,
    visualizer_mvp: Option<GLint>,
}

impl NormalsDemo {
    pub fn new(config: &DemoConfig) -> Result<Self, GlcError> {
        let shaded = {
            let vertex = GlShader::from_source(GlShaderType::Vertex, &DEFAULT_VERTEX_SHADER)?;
            let fragment = GlShader::from_source(GlShaderType::Fragment, DEFAULT_FRAGMENT_SHADER)?;
            GlProgram::from_shaders(&[&vertex, &fragment])?
        };

        let visualizer = {
            let dir = &config.shader_dir;
            let vertex = GlShader::from_file(GlShaderType::Vertex, dir.join("visualize_normals.vert"))?;
            let fragment = GlShader::from_file(GlShaderType::Fragment, dir.join("visualize_normals.frag"))?;
            let geom = GlShader::from_file(GlShaderType::Geometry, dir.join("visualize_normals.geom"))?;
            GlProgram::from_shaders(&[&vertex, &fragment, &geom])?
        };

        let shaded_mvp = shaded.uniform_location("mvp");
        let visualizer_mvp = visualizer.uniform_location("mvp");

        let mesh = geometry::obj::load(&config.model)?;
        info!(
            "loaded {} ({} vertices, {} triangles)",
            config.model.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        let vao = GlVertexArray::generate();
        vao.bind();

        let vbo = GlVertexBuffer::init(&mesh.vertices);

        let stride = stride_of::<MeshVertex>();
        set_vertex_attrib(ATTRIBUTE_POSITION, 3, stride, MeshVertex::POSITION_OFFSET);
        set_vertex_attrib(ATTRIBUTE_NORMAL, 3, stride, MeshVertex::NORMAL_OFFSET);

        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::Enable(gl::CULL_FACE);
        }

        visualizer.set_used();
        if let Some(length) = visualizer.uniform_location("normalLength") {
            visualizer.set_uniform_f32(length, config.normal_length);
        }

        Ok(Self { shaded, visualizer, vao, vbo, shaded_mvp, visualizer_mvp })
    }
}

impl Demo for NormalsDemo {
    fn draw(&mut self, frame: &Frame) {
        let mvp = normals_mvp(frame);
        let count = self.vbo.len() as GLsizei;

        unsafe {
            gl::Viewport(0, 0, frame.width, frame.height);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.vao.bind();

        self.shaded.set_used();
        if let Some(location) = self.shaded_mvp {
            self.shaded.set_uniform_mat4(location, &mvp);
        }
        unsafe {
            gl::DrawArrays(gl::TRIANGLES, 0, count);
        }

        self.visualizer.set_used();
        if let Some(location) = self.visualizer_mvp {
            self.visualizer.set_uniform_mat4(location, &mvp);
        }
        unsafe {
            gl::DrawArrays(gl::POINTS, 0, count);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_shader_uses_the_fixed_locations() {
        assert!(DEFAULT_VERTEX_SHADER.contains("layout(location = 0) in vec3 position;"));
        assert!(DEFAULT_VERTEX_SHADER.contains("layout(location = 1) in vec3 normal;"));
        assert!(DEFAULT_VERTEX_SHADER.contains("void main()\n{\n"));
    }

    #[test]
    fn bundled_visualizer_shaders_match_the_fixed_locations() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/visualize_normals.vert");
        let source = std::fs::read_to_string(path).unwrap();

        assert!(source.contains(&format!("layout(location = {}) in vec3 position;", ATTRIBUTE_POSITION)));
        assert!(source.contains(&format!("layout(location = {}) in vec3 normal;", ATTRIBUTE_NORMAL)));
    }

    #[test]
    fn camera_nods_sixteen_degrees_at_start() {
        // cos(0) is 1, so at time zero the view is tilted the full 16 degrees about x
        let frame = Frame { width: 640, height: 480, time: 0.0 };

        let mut view = Mat4::translation(0.0, 0.0, -3.0);
        view.rotate(-radians(16.0), 1.0, 0.0, 0.0);
        let expected = Mat4::perspective(FOV, frame.aspect(), Z_NEAR, Z_FAR) * view;

        assert!(normals_mvp(&frame).abs_diff_eq(&expected, 1e-6));
    }

    #[test]
    fn camera_looks_down_onto_the_model_at_start() {
        let frame = Frame { width: 640, height: 480, time: 0.0 };
        let m = normals_mvp(&frame);

        // The top of the model leans away, the bottom towards the camera
        let top = m.transform([0.0, 1.0, 0.0, 1.0]);
        let bottom = m.transform([0.0, -1.0, 0.0, 1.0]);
        assert!(top[3] > bottom[3]);
    }

    #[test]
    fn model_spins_clockwise_seen_from_above() {
        // Half a radian per second, so a quarter turn takes pi seconds
        let frame = Frame { width: 640, height: 480, time: std::f32::consts::PI };
        let m = normals_mvp(&frame);

        // +x has come round to face the camera, so it's nearer than -x
        let right = m.transform([1.0, 0.0, 0.0, 1.0]);
        let left = m.transform([-1.0, 0.0, 0.0, 1.0]);
        assert!(right[3] < left[3]);
    }

    #[test]
    fn unit_mesh_stays_in_front_of_the_camera() {
        for &time in &[0.0, 1.0, 3.7, 10.0] {
            let frame = Frame { width: 640, height: 480, time };
            let m = normals_mvp(&frame);

            for p in &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, -1.0]] {
                let c = m.transform([p[0], p[1], p[2], 1.0]);
                // In front of the near plane, behind the far one
                assert!(c[3] > Z_NEAR && c[2] / c[3] < 1.0);
            }
        }
    }
}

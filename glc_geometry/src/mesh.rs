//! Vertex layouts and the static vertex data baked into the demos.
//!
//! Every vertex type is `#[repr(C)]` and `Pod`, so a slice of them can be handed to OpenGL as raw
//! bytes. The `*_OFFSET` constants are byte offsets into the struct, for `glVertexAttribPointer`.

use std::mem::size_of;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A position with a normal vector, used by the cube.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PositionNormal {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl PositionNormal {
    pub const POSITION_OFFSET: usize = 0;
    pub const NORMAL_OFFSET: usize = size_of::<[f32; 3]>();
}

/// A 2D position with a texture coordinate, used by the screen quad.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PositionTexCoord {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl PositionTexCoord {
    pub const POSITION_OFFSET: usize = 0;
    pub const TEX_COORD_OFFSET: usize = size_of::<[f32; 2]>();
}

/// A triangulated mesh vertex as produced by the OBJ loader.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl MeshVertex {
    pub const POSITION_OFFSET: usize = 0;
    pub const NORMAL_OFFSET: usize = size_of::<[f32; 3]>();
    pub const TEX_COORD_OFFSET: usize = 2 * size_of::<[f32; 3]>();
}

const fn pn(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> PositionNormal {
    PositionNormal { position: [x, y, z], normal: [nx, ny, nz] }
}

const fn pt(x: f32, y: f32, u: f32, v: f32) -> PositionTexCoord {
    PositionTexCoord { position: [x, y], tex_coord: [u, v] }
}

/// A unit cube centred on the origin: six faces, two counter-clockwise triangles each.
pub const CUBE_VERTICES: [PositionNormal; 36] = [
    // Front
    pn(-0.5,  0.5, 0.5, 0.0, 0.0, 1.0), // Top Left
    pn(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0), // Bottom Left
    pn( 0.5,  0.5, 0.5, 0.0, 0.0, 1.0), // Top Right

    pn( 0.5,  0.5, 0.5, 0.0, 0.0, 1.0), // Top Right
    pn(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0), // Bottom Left
    pn( 0.5, -0.5, 0.5, 0.0, 0.0, 1.0), // Bottom Right

    // Back
    pn( 0.5,  0.5, -0.5, 0.0, 0.0, -1.0),
    pn( 0.5, -0.5, -0.5, 0.0, 0.0, -1.0),
    pn(-0.5,  0.5, -0.5, 0.0, 0.0, -1.0),

    pn(-0.5,  0.5, -0.5, 0.0, 0.0, -1.0),
    pn( 0.5, -0.5, -0.5, 0.0, 0.0, -1.0),
    pn(-0.5, -0.5, -0.5, 0.0, 0.0, -1.0),

    // Top
    pn(-0.5, 0.5, -0.5, 0.0, 1.0, 0.0),
    pn(-0.5, 0.5,  0.5, 0.0, 1.0, 0.0),
    pn( 0.5, 0.5, -0.5, 0.0, 1.0, 0.0),

    pn( 0.5, 0.5, -0.5, 0.0, 1.0, 0.0),
    pn(-0.5, 0.5,  0.5, 0.0, 1.0, 0.0),
    pn( 0.5, 0.5,  0.5, 0.0, 1.0, 0.0),

    // Bottom
    pn(-0.5, -0.5,  0.5, 0.0, -1.0, 0.0),
    pn(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0),
    pn( 0.5, -0.5,  0.5, 0.0, -1.0, 0.0),

    pn( 0.5, -0.5,  0.5, 0.0, -1.0, 0.0),
    pn(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0),
    pn( 0.5, -0.5, -0.5, 0.0, -1.0, 0.0),

    // Right
    pn(0.5,  0.5,  0.5, 1.0, 0.0, 0.0),
    pn(0.5, -0.5,  0.5, 1.0, 0.0, 0.0),
    pn(0.5,  0.5, -0.5, 1.0, 0.0, 0.0),

    pn(0.5,  0.5, -0.5, 1.0, 0.0, 0.0),
    pn(0.5, -0.5,  0.5, 1.0, 0.0, 0.0),
    pn(0.5, -0.5, -0.5, 1.0, 0.0, 0.0),

    // Left
    pn(-0.5,  0.5, -0.5, -1.0, 0.0, 0.0),
    pn(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0),
    pn(-0.5,  0.5,  0.5, -1.0, 0.0, 0.0),

    pn(-0.5,  0.5,  0.5, -1.0, 0.0, 0.0),
    pn(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0),
    pn(-0.5, -0.5,  0.5, -1.0, 0.0, 0.0),
];

/// Covers the whole of normalized device space. Draw it as a triangle fan.
pub const SCREEN_QUAD_VERTICES: [PositionTexCoord; 4] = [
    pt(-1.0,  1.0, 0.0, 1.0), // Top Left
    pt(-1.0, -1.0, 0.0, 0.0), // Bottom Left
    pt( 1.0, -1.0, 1.0, 0.0), // Bottom Right
    pt( 1.0,  1.0, 1.0, 1.0), // Top Right
];

/// The unit normal of a counter-clockwise triangle, or zero for a degenerate one.
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let a = Vec3::from(a);
    (Vec3::from(b) - a).cross(Vec3::from(c) - a).normalize_or_zero().to_array()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn vertex_layouts_are_tightly_packed() {
        assert_eq!(size_of::<PositionNormal>(), 6 * size_of::<f32>());
        assert_eq!(size_of::<PositionTexCoord>(), 4 * size_of::<f32>());
        assert_eq!(size_of::<MeshVertex>(), 8 * size_of::<f32>());
        assert_eq!(MeshVertex::TEX_COORD_OFFSET, 6 * size_of::<f32>());
    }

    #[test]
    fn cube_triangles_wind_towards_their_normals() {
        for tri in CUBE_VERTICES.chunks(3) {
            let n = face_normal(tri[0].position, tri[1].position, tri[2].position);
            for v in tri {
                assert_eq!(v.normal, n);
            }
        }
    }

    #[test]
    fn cube_fits_in_a_unit_box() {
        for v in CUBE_VERTICES.iter() {
            assert!(v.position.iter().all(|c| c.abs() == 0.5));
        }
    }

    #[test]
    fn cube_has_six_faces_of_six_vertices() {
        let mut normals: Vec<[f32; 3]> = CUBE_VERTICES.iter().map(|v| v.normal).collect();
        normals.dedup();
        assert_eq!(normals.len(), 6);
    }

    #[test]
    fn screen_quad_spans_clip_space() {
        let xs: Vec<f32> = SCREEN_QUAD_VERTICES.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = SCREEN_QUAD_VERTICES.iter().map(|v| v.position[1]).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
        assert!(ys.contains(&-1.0) && ys.contains(&1.0));

        for v in SCREEN_QUAD_VERTICES.iter() {
            // Texture coordinates follow position: (-1, -1) is (0, 0), (1, 1) is (1, 1)
            assert_eq!(v.tex_coord[0], (v.position[0] + 1.0) / 2.0);
            assert_eq!(v.tex_coord[1], (v.position[1] + 1.0) / 2.0);
        }
    }

    #[test]
    fn face_normal_follows_winding() {
        let n = face_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 1.0]);

        let n = face_normal([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn degenerate_triangles_have_a_zero_normal() {
        let n = face_normal([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]);
        assert_eq!(n, [0.0, 0.0, 0.0]);
    }
}

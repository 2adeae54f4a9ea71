//! Loading of Wavefront OBJ meshes.
//!
//! Loading happens in two steps. [`ObjMesh::parse`] reads the attribute lists and the polygons
//! that index into them, exactly as they appear in the file. [`ObjMesh::triangulate`] then flattens
//! that into a plain triangle list, which is what gets uploaded to a vertex buffer.
//!
//! Only geometry is read: `v`, `vt`, `vn` and `f`. Anything else (objects, groups, smoothing,
//! materials) is skipped.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::mesh::{face_normal, MeshVertex};

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected a number, found `{found}`")]
    BadNumber { line: usize, found: String },

    #[error("line {line}: `{keyword}` needs {expected} components")]
    MissingComponents { line: usize, keyword: &'static str, expected: usize },

    #[error("line {line}: bad face corner `{found}`")]
    BadCorner { line: usize, found: String },

    #[error("line {line}: a face needs at least 3 corners, found {found}")]
    DegenerateFace { line: usize, found: usize },

    #[error("line {line}: {kind} index {index} is out of range")]
    IndexOutOfRange { line: usize, kind: &'static str, index: i64 },
}

/// One corner of a face, holding zero-based indices into the mesh's attribute lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub position: usize,
    pub tex_coord: Option<usize>,
    pub normal: Option<usize>,
}

/// A mesh as written in the file, polygons and all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjMesh {
    pub positions: Vec<[f32; 3]>,
    pub tex_coords: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub faces: Vec<Vec<Corner>>,
}

/// A flat list of triangles, three vertices each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<MeshVertex>,
}

impl TriangleMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

/// Reads and triangulates the OBJ file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh, ObjError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(ObjMesh::parse(&source)?.triangulate())
}

fn parse_components<T: FromStr, const N: usize>(
    line: usize,
    keyword: &'static str,
    args: &[&str],
    required: usize,
) -> Result<[T; N], ObjError>
where
    T: Copy + Default,
{
    if args.len() < required {
        return Err(ObjError::MissingComponents { line, keyword, expected: required });
    }

    let mut out = [T::default(); N];
    for (o, arg) in out.iter_mut().zip(args.iter()) {
        *o = arg.parse().map_err(|_| ObjError::BadNumber {
            line,
            found: arg.to_string(),
        })?;
    }

    Ok(out)
}

/// Turns a one-based (or negative, counting back from the end) OBJ index into a zero-based one.
fn resolve_index(
    line: usize,
    kind: &'static str,
    raw: &str,
    len: usize,
) -> Result<usize, ObjError> {
    let index: i64 = raw.parse().map_err(|_| ObjError::BadNumber {
        line,
        found: raw.to_string(),
    })?;

    let resolved = if index > 0 {
        index - 1
    } else {
        len as i64 + index
    };

    if index == 0 || resolved < 0 || resolved >= len as i64 {
        return Err(ObjError::IndexOutOfRange { line, kind, index });
    }

    Ok(resolved as usize)
}

impl ObjMesh {
    pub fn parse(source: &str) -> Result<Self, ObjError> {
        let mut mesh = ObjMesh::default();

        for (n, raw_line) in source.lines().enumerate() {
            let line = n + 1;

            // Strip comments
            let content = match raw_line.find('#') {
                Some(i) => &raw_line[..i],
                None => raw_line,
            };

            let mut words = content.split_whitespace();
            let keyword = match words.next() {
                Some(k) => k,
                None => continue,
            };
            let args: Vec<&str> = words.collect();

            match keyword {
                "v" => mesh.positions.push(parse_components(line, "v", &args, 3)?),
                "vn" => mesh.normals.push(parse_components(line, "vn", &args, 3)?),
                // The v coordinate is optional for 1D textures
                "vt" => mesh.tex_coords.push(parse_components(line, "vt", &args, 1)?),
                "f" => {
                    let face = mesh.parse_face(line, &args)?;
                    mesh.faces.push(face);
                }
                _ => {}
            }
        }

        Ok(mesh)
    }

    fn parse_face(&self, line: usize, args: &[&str]) -> Result<Vec<Corner>, ObjError> {
        if args.len() < 3 {
            return Err(ObjError::DegenerateFace { line, found: args.len() });
        }

        args.iter().map(|arg| self.parse_corner(line, arg)).collect()
    }

    /// Parses `v`, `v/vt`, `v//vn` or `v/vt/vn`.
    fn parse_corner(&self, line: usize, corner: &str) -> Result<Corner, ObjError> {
        let parts: Vec<&str> = corner.split('/').collect();

        if parts.is_empty() || parts.len() > 3 || parts[0].is_empty() {
            return Err(ObjError::BadCorner { line, found: corner.to_string() });
        }

        let position = resolve_index(line, "position", parts[0], self.positions.len())?;

        let tex_coord = match parts.get(1) {
            Some(s) if !s.is_empty() => {
                Some(resolve_index(line, "texture coordinate", s, self.tex_coords.len())?)
            }
            _ => None,
        };

        let normal = match parts.get(2) {
            Some(s) if !s.is_empty() => {
                Some(resolve_index(line, "normal", s, self.normals.len())?)
            }
            Some(_) => return Err(ObjError::BadCorner { line, found: corner.to_string() }),
            None => None,
        };

        Ok(Corner { position, tex_coord, normal })
    }

    fn vertex(&self, corner: &Corner, fallback_normal: [f32; 3]) -> MeshVertex {
        MeshVertex {
            position: self.positions[corner.position],
            normal: corner.normal.map_or(fallback_normal, |i| self.normals[i]),
            tex_coord: corner.tex_coord.map_or([0.0, 0.0], |i| self.tex_coords[i]),
        }
    }

    /// Fans every polygon out from its first corner into triangles. Corners without a normal get
    /// the normal of the triangle they end up in.
    pub fn triangulate(&self) -> TriangleMesh {
        let triangle_count: usize = self.faces.iter().map(|f| f.len().saturating_sub(2)).sum();
        let mut vertices = Vec::with_capacity(triangle_count * 3);

        for face in self.faces.iter().filter(|f| f.len() >= 3) {
            let first = &face[0];

            for pair in face[1..].windows(2) {
                let corners = [first, &pair[0], &pair[1]];
                let normal = face_normal(
                    self.positions[corners[0].position],
                    self.positions[corners[1].position],
                    self.positions[corners[2].position],
                );

                vertices.extend(corners.iter().map(|c| self.vertex(c, normal)));
            }
        }

        TriangleMesh { vertices }
    }
}

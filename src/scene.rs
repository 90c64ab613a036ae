//! Host application boundary
//!
//! The codec exchanges flat vertex/triangle lists with a 3D host (an editor
//! or converter). The host's convention is right-handed with +z up; COL is
//! y-up, so points are permuted on the way through, and an export scale can
//! be applied. The scale is not stored in the file — imports assume 1.

use glam::Vec3;

use crate::error::{Error, Result};
use crate::formats::col::{ColModel, Triangle, Vertex};

/// One triangle of a host mesh: vertex indices into the mesh's own position
/// list plus the collision classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFace {
    pub indices: [usize; 3],
    pub col_type: u16,
    pub terrain_type: u8,
    pub unknown: u8,
    pub col_parameter: Option<u16>,
}

/// One triangulated mesh as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneMesh {
    pub positions: Vec<Vec3>,
    pub faces: Vec<SceneFace>,
}

/// A host that can hand out its scene as triangulated meshes.
pub trait MeshSource {
    fn triangulated_meshes(&mut self) -> Result<Vec<SceneMesh>>;
}

/// A host that can build a mesh from decoded collision geometry. Pure sink:
/// the library never reads anything back. Hosts may skip degenerate or
/// duplicate faces rather than abort the import.
pub trait MeshSink {
    fn build_mesh(&mut self, positions: &[Vec3], faces: &[SceneFace]) -> Result<()>;
}

/// Map a host-space point (z up) into COL space (y up), applying the export
/// scale.
pub fn host_to_col(point: Vec3, scale: f32) -> Vertex {
    Vertex {
        x: point.x * scale,
        y: point.z * scale,
        z: -point.y * scale,
    }
}

/// Map a COL-space vertex back into host space. Exact inverse of
/// [`host_to_col`] at scale 1.
pub fn col_to_host(vertex: &Vertex) -> Vec3 {
    Vec3::new(vertex.x, -vertex.z, vertex.y)
}

/// Flatten host meshes into one collision model.
///
/// Every mesh starts its vertex indices at 0, so each mesh's faces are
/// shifted by the number of vertices emitted before it. Fails with
/// [`Error::TooManyVertices`] once the flat list outgrows the u16 triangle
/// indices, and with [`Error::InvalidFaceIndex`] if a face points outside its
/// own mesh.
pub fn flatten_scene(meshes: &[SceneMesh], scale: f32) -> Result<ColModel> {
    let mut model = ColModel::default();

    for mesh in meshes {
        let index_offset = model.vertices.len();
        for position in &mesh.positions {
            model.vertices.push(host_to_col(*position, scale));
        }

        for face in &mesh.faces {
            let mut vertex_indices = [0u16; 3];
            for (slot, &index) in vertex_indices.iter_mut().zip(&face.indices) {
                if index >= mesh.positions.len() {
                    return Err(Error::InvalidFaceIndex {
                        index,
                        vertex_count: mesh.positions.len(),
                    });
                }
                *slot =
                    u16::try_from(index_offset + index).map_err(|_| Error::TooManyVertices {
                        count: model.vertices.len(),
                    })?;
            }
            model.triangles.push(Triangle {
                vertex_indices,
                col_type: face.col_type,
                terrain_type: face.terrain_type,
                unknown: face.unknown,
                col_parameter: face.col_parameter,
            });
        }
    }

    Ok(model)
}

/// Expand a collision model into host-space positions and faces, the inverse
/// of [`flatten_scene`] at scale 1.
pub fn model_to_scene(model: &ColModel) -> (Vec<Vec3>, Vec<SceneFace>) {
    let positions = model.vertices.iter().map(col_to_host).collect();
    let faces = model
        .triangles
        .iter()
        .map(|triangle| SceneFace {
            indices: [
                usize::from(triangle.vertex_indices[0]),
                usize::from(triangle.vertex_indices[1]),
                usize::from(triangle.vertex_indices[2]),
            ],
            col_type: triangle.col_type,
            terrain_type: triangle.terrain_type,
            unknown: triangle.unknown,
            col_parameter: triangle.col_parameter,
        })
        .collect();
    (positions, faces)
}

/// Pull the host's scene and flatten it for export.
pub fn export_scene<S: MeshSource>(source: &mut S, scale: f32) -> Result<ColModel> {
    let meshes = source.triangulated_meshes()?;
    flatten_scene(&meshes, scale)
}

/// Push a decoded model into the host.
pub fn import_model<S: MeshSink>(sink: &mut S, model: &ColModel) -> Result<()> {
    let (positions, faces) = model_to_scene(model);
    sink.build_mesh(&positions, &faces)
}

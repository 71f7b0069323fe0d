//! Interleaved byte buffers for handing region geometry to a renderer.

use super::geometry::Geometry;

/// Interleaved position + normal + uv vertex (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PresentationVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl PresentationVertex {
    /// Size of one vertex in bytes.
    pub const STRIDE: usize = std::mem::size_of::<Self>();
}

/// Vertex and index bytes ready for upload.
///
/// Indices are always `u32`; non-indexed geometry gets a sequential index
/// buffer so every buffer pair draws the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationBuffers {
    pub vertex_bytes: Vec<u8>,
    pub index_bytes: Vec<u8>,
}

impl PresentationBuffers {
    /// Number of vertices in the vertex buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertex_bytes.len() / PresentationVertex::STRIDE
    }

    /// Number of indices in the index buffer.
    pub fn index_count(&self) -> usize {
        self.index_bytes.len() / std::mem::size_of::<u32>()
    }
}

impl Geometry {
    /// Flatten into interleaved presentation buffers.
    ///
    /// Missing UVs are written as zero, missing normals are computed.
    pub fn to_presentation_buffers(&self) -> PresentationBuffers {
        let computed;
        let normals = match self.normals() {
            Some(normals) => normals,
            None => {
                computed = self.compute_vertex_normals();
                &computed
            }
        };

        let vertices: Vec<PresentationVertex> = self
            .positions()
            .iter()
            .enumerate()
            .map(|(i, &position)| PresentationVertex {
                position,
                normal: normals[i],
                uv: self.uvs().map_or([0.0, 0.0], |uvs| uvs[i]),
            })
            .collect();
        let indices: Vec<u32> = self.triangles().flatten().collect();

        PresentationBuffers {
            vertex_bytes: bytemuck::cast_slice(&vertices).to_vec(),
            index_bytes: bytemuck::cast_slice(&indices).to_vec(),
        }
    }
}

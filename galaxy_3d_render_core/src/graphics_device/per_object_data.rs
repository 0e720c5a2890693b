/// Per-object constant data handed to the device before each draw.
///
/// Raw bytes for the vertex and pixel stage constant blocks. The render
/// core never interprets them: a batch publishes its block through
/// `GraphicsDevice::set_per_object_data` and the device uploads it when the
/// batch commits.

use bytemuck::Pod;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerObjectData {
    vertex: Vec<u8>,
    pixel: Vec<u8>,
}

impl PerObjectData {
    pub fn new(vertex: Vec<u8>, pixel: Vec<u8>) -> Self {
        Self { vertex, pixel }
    }

    /// Build both blocks from plain-old-data values (matrices, colours...).
    ///
    /// # Example
    ///
    /// ```
    /// use galaxy_3d_render_core::galaxy3d::device::PerObjectData;
    /// use galaxy_3d_render_core::glam::{Mat4, Vec4};
    ///
    /// let data = PerObjectData::from_pod(&Mat4::IDENTITY, &Vec4::ONE);
    /// assert_eq!(data.vertex_bytes().len(), 64);
    /// assert_eq!(data.pixel_bytes().len(), 16);
    /// ```
    pub fn from_pod<V: Pod, P: Pod>(vertex: &V, pixel: &P) -> Self {
        Self {
            vertex: bytemuck::bytes_of(vertex).to_vec(),
            pixel: bytemuck::bytes_of(pixel).to_vec(),
        }
    }

    /// Vertex block only; pixel block left empty.
    pub fn vertex_only<V: Pod>(vertex: &V) -> Self {
        Self {
            vertex: bytemuck::bytes_of(vertex).to_vec(),
            pixel: Vec::new(),
        }
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        &self.vertex
    }

    pub fn pixel_bytes(&self) -> &[u8] {
        &self.pixel
    }

    /// Reinterpret the vertex block as `T`. `None` if sizes differ.
    pub fn read_vertex<T: Pod>(&self) -> Option<T> {
        bytemuck::try_pod_read_unaligned(&self.vertex).ok()
    }

    /// Reinterpret the pixel block as `T`. `None` if sizes differ.
    pub fn read_pixel<T: Pod>(&self) -> Option<T> {
        bytemuck::try_pod_read_unaligned(&self.pixel).ok()
    }
}

#[cfg(test)]
#[path = "per_object_data_tests.rs"]
mod tests;

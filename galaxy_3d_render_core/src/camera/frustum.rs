/// Frustum - six clipping planes plus the view data needed for
/// screen-size estimates.
///
/// Each plane is a Vec4 (A, B, C, D) with Ax + By + Cz + D = 0 in world
/// space. (A, B, C) is unit length after `initialize` and points toward the
/// visible volume.
///
/// Planes come from the rows of the view-projection matrix. glam stores
/// matrices column-major, so row `i` is
/// `(x_axis[i], y_axis[i], z_axis[i], w_axis[i])`. The near plane is `row2`
/// alone, which matches glam's [0, 1] clip depth.
///
/// A Frustum is long-lived and re-initialized each frame. Nothing is cached
/// between calls and all intermediates are locals of `initialize`, so two
/// frustums can be initialized on different threads.

use glam::{Mat4, Vec3, Vec4};

/// Frustum plane indices (fixed order).
///
/// Each name is the side of the volume its plane bounds in y-up clip
/// space. Index 3 (`row3 - row1`) is the top plane and index 4
/// (`row3 + row1`) the bottom plane, whatever other sources call them.
pub const PLANE_NEAR: usize = 0;
/// row3 + row0
pub const PLANE_LEFT: usize = 1;
/// row3 - row0
pub const PLANE_RIGHT: usize = 2;
/// row3 - row1 (y <= w)
pub const PLANE_TOP: usize = 3;
/// row3 + row1 (y >= -w)
pub const PLANE_BOTTOM: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Below this, a radius is negligible and a depth is clamped.
pub const PIXEL_SIZE_EPSILON: f32 = 1e-5;

/// Six clip planes and the camera position/direction they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    planes: [Vec4; 6],
    view_position: Vec3,
    view_direction: Vec3,
    half_width_projection: f32,
}

impl Frustum {
    /// Uninitialized frustum. Queries are meaningless until `initialize`.
    pub fn new() -> Self {
        Self {
            planes: [Vec4::ZERO; 6],
            view_position: Vec3::ZERO,
            view_direction: Vec3::ZERO,
            half_width_projection: 1.0,
        }
    }

    /// Build and initialize in one step.
    pub fn from_camera(view: &Mat4, projection: &Mat4, viewport_size: f32) -> Self {
        let mut frustum = Self::new();
        frustum.initialize(view, projection, viewport_size, None, None);
        frustum
    }

    /// Recompute planes and view data from camera matrices.
    ///
    /// # Arguments
    ///
    /// * `view` - World to camera
    /// * `projection` - Camera to clip
    /// * `viewport_size` - Viewport width in pixels
    /// * `view_inverse` - Precomputed `view.inverse()`, trusted as given
    /// * `view_projection` - Precomputed `projection * view`, trusted as given
    ///
    /// A singular view matrix or a plane with a zero-length normal yields
    /// non-finite planes; no error is raised.
    pub fn initialize(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        viewport_size: f32,
        view_inverse: Option<&Mat4>,
        view_projection: Option<&Mat4>,
    ) {
        let view_inverse = view_inverse.copied().unwrap_or_else(|| view.inverse());
        self.view_position = view_inverse.w_axis.truncate();
        self.view_direction = view_inverse.z_axis.truncate();
        self.half_width_projection = projection.x_axis.x * viewport_size * 0.5;

        let vp = view_projection.copied().unwrap_or_else(|| *projection * *view);
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        self.planes[PLANE_NEAR] = row2;
        self.planes[PLANE_LEFT] = row3 + row0;
        self.planes[PLANE_RIGHT] = row3 - row0;
        self.planes[PLANE_TOP] = row3 - row1;
        self.planes[PLANE_BOTTOM] = row3 + row1;
        self.planes[PLANE_FAR] = row3 - row2;

        // Normalize by the spatial normal only, D included
        for (index, plane) in self.planes.iter_mut().enumerate() {
            let normal_len = plane.truncate().length();
            if normal_len == 0.0 {
                crate::engine_warn!("galaxy3d::Frustum",
                    "Plane {} has a zero-length normal, view-projection is degenerate", index);
            }
            *plane /= normal_len;
        }
    }

    /// Conservative sphere test.
    ///
    /// Returns `false` as soon as one plane has the whole sphere on its
    /// outer side. May return `true` for spheres only excluded by two planes
    /// jointly (near frustum corners). Never returns `false` for a sphere
    /// that touches the frustum.
    pub fn is_sphere_visible(&self, center: Vec3, radius: f32) -> bool {
        for plane in &self.planes {
            if plane.truncate().dot(center) + plane.w < -radius {
                return false;
            }
        }
        true
    }

    /// Conservative AABB test ("positive vertex" per plane).
    pub fn is_aabb_visible(&self, min: Vec3, max: Vec3) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();
            let p_vertex = Vec3::select(normal.cmpge(Vec3::ZERO), max, min);
            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }
        true
    }

    /// Approximate on-screen diameter, in pixels, of a sphere.
    ///
    /// Cheap heuristic for LOD selection and small-object culling, not an
    /// exact projection. Depth is measured along the view direction and
    /// clamped to `PIXEL_SIZE_EPSILON` so objects at or behind the camera
    /// stay finite. Radii below `PIXEL_SIZE_EPSILON` give 0.
    pub fn pixel_size_across(&self, center: Vec3, radius: f32) -> f32 {
        let depth = self
            .view_direction
            .dot(self.view_position - center)
            .max(PIXEL_SIZE_EPSILON);

        if radius < PIXEL_SIZE_EPSILON {
            return 0.0;
        }

        (radius / depth) * self.half_width_projection * 2.0
    }

    // ===== GETTERS =====

    /// All six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    /// Camera position in world space.
    pub fn view_position(&self) -> Vec3 {
        self.view_position
    }

    /// Camera z basis in world space, as extracted (not normalized).
    pub fn view_direction(&self) -> Vec3 {
        self.view_direction
    }

    pub fn half_width_projection(&self) -> f32 {
        self.half_width_projection
    }
}

impl Default for Frustum {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

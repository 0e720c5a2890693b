//! Camera module - view frustum for visibility and screen-size queries.
//!
//! The frustum is a tool owned and driven by the caller: it is fed the
//! camera's view/projection matrices once per frame and queried during
//! scene traversal.

mod frustum;

pub use frustum::{
    Frustum, PIXEL_SIZE_EPSILON,
    PLANE_NEAR, PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM, PLANE_FAR,
};

//! Pointer input mapping.
//!
//! Windowing is external, so pointer events arrive as plain button + cursor
//! pairs. The one piece of geometry this core owns is turning a cursor
//! position into a point on the walkable ground plane by unprojecting
//! through the scene camera.

use glam::{Vec2, Vec3};

use crate::scene::Camera;

/// Host-agnostic pointer button identity, in web `MouseEvent.button` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
}

impl PointerButton {
    /// Only primary and secondary clicks issue ground commands; the
    /// auxiliary (wheel) button is reserved for camera control.
    #[must_use]
    pub fn registers_ground_click(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }
}

/// Casts a ray from `cursor` (physical pixels, origin top-left) through the
/// camera and intersects it with the horizontal plane at `ground_height`.
///
/// Returns `None` when the ray runs parallel to the plane or the hit lies
/// behind the camera; clicks above the horizon do not register.
#[must_use]
pub fn pick_ground_point(
    camera: &Camera,
    cursor: Vec2,
    viewport: Vec2,
    ground_height: f32,
) -> Option<Vec3> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }

    let ndc = Vec2::new(
        2.0 * cursor.x / viewport.x - 1.0,
        1.0 - 2.0 * cursor.y / viewport.y,
    );

    // Unproject the cursor at the near and far depth bounds (0..1 range,
    // matching the camera's perspective_rh projection)
    let inverse = camera.view_projection_matrix().inverse();
    let near = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
    let far = inverse.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

    let direction = (far - near).normalize_or_zero();
    if direction.y.abs() < 1e-6 {
        return None;
    }

    let t = (ground_height - near.y) / direction.y;
    if t <= 0.0 {
        return None;
    }

    Some(near + direction * t)
}

use glam::{Affine3A, Mat3, Mat4, Quat, Vec3};

/// Transform component.
///
/// Wraps a node's position, rotation, and scale (TRS) together with matrix
/// caching and dirty checking. The scene is flat, one transform per
/// character with no hierarchy, so the local matrix doubles as the render
/// transform an external renderer reads.
#[derive(Debug, Clone)]
pub struct Transform {
    // === Public properties ===
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    // === Matrix cache (internal) ===
    matrix: Affine3A,

    // === Dirty-check shadow state ===
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        let mut transform = Self::new();
        transform.position = position;
        transform
    }

    // ========================================================================
    // Core logic: shadow-state update
    // ========================================================================

    /// Recomputes the cached matrix if any TRS property changed since the
    /// last call. Returns whether a recompute happened.
    pub fn update_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation,
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    // ========================================================================
    // Getters & helpers
    // ========================================================================

    /// The cached transform matrix (`Affine3A`). Call [`Self::update_matrix`]
    /// first if TRS properties were mutated this frame.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &Affine3A {
        &self.matrix
    }

    /// The cached transform matrix as a `Mat4`, for renderer upload.
    #[inline]
    #[must_use]
    pub fn matrix_as_mat4(&self) -> Mat4 {
        Mat4::from(self.matrix)
    }

    /// Orients the transform so its view direction faces `target`.
    ///
    /// `target` and `up` are expressed in the same space as `position`.
    /// Degenerate cases (target on top of the position, or the view
    /// direction parallel to `up`) leave the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = target - self.position;
        if forward.length_squared() < 1e-8 {
            return;
        }
        let forward = forward.normalize();

        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&rot_mat);
    }

    /// Forces a matrix recompute on the next [`Self::update_matrix`].
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

use glam::Vec3;

/// Directional light parameters.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    /// Direction the light travels, normalized at construction.
    pub direction: Vec3,
}

/// High-level abstraction: light component in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    /// Uniform fill term applied regardless of surface orientation.
    Ambient,
    Directional(DirectionalLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32, direction: Vec3) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional(DirectionalLight {
                direction: direction.normalize_or_zero(),
            }),
        }
    }
}

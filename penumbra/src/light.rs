use glam::{Mat4, Vec3};

use crate::gpu;

/// Light driving the screen-space shadows pass; one per controller, supplied
/// each frame by the scene collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Directional { direction: Vec3 },
    Point { position: Vec3 },
}

impl Light {
    /// Serializes the light into view space for the current frame's camera.
    pub fn serialize(&self, view: Mat4) -> gpu::Light {
        match *self {
            Self::Directional { direction } => {
                gpu::Light::directional(direction, view)
            }
            Self::Point { position } => gpu::Light::point(position, view),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn serialization_follows_kind() {
        let view = Mat4::look_at_rh(
            vec3(0.0, 0.0, 5.0),
            Vec3::ZERO,
            vec3(0.0, 1.0, 0.0),
        );

        let directional = Light::Directional {
            direction: vec3(0.0, -1.0, 0.0),
        };

        let point = Light::Point {
            position: vec3(0.0, 3.0, 0.0),
        };

        assert!(directional.serialize(view).is_directional());
        assert!(point.serialize(view).is_point());
    }
}

use glam::{Mat4, UVec2, Vec3};

use crate::gpu;

/// Camera state the effects pipeline needs each frame; supplied by the
/// scene/camera collaborator, this crate never mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    pub origin: Vec3,
    pub viewport: Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub size: UVec2,
    pub format: wgpu::TextureFormat,
}

impl Camera {
    pub fn serialize(&self) -> gpu::Camera {
        gpu::Camera::new(
            self.view,
            self.projection,
            self.origin.extend(1.0),
            self.viewport.size,
        )
    }

    /// Output resolution or format changed; every viewport-sized resource has
    /// to be reallocated and rebound.
    pub fn is_invalidated_by(&self, next: &Self) -> bool {
        self.viewport != next.viewport
    }

    /// View matrix changed; accumulated temporal history is stale.
    pub fn is_moved_by(&self, next: &Self) -> bool {
        self.view != next.view
    }

    pub fn describe(&self) -> String {
        format!(
            "{}x{}, {:?}",
            self.viewport.size.x, self.viewport.size.y, self.viewport.format,
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, vec3};

    use super::*;

    fn camera(size: UVec2, view: Mat4) -> Camera {
        Camera {
            view,
            projection: Mat4::IDENTITY,
            origin: vec3(0.0, 1.0, 0.0),
            viewport: Viewport {
                size,
                format: wgpu::TextureFormat::Rgba16Float,
            },
        }
    }

    #[test]
    fn invalidation() {
        let target = camera(uvec2(1280, 720), Mat4::IDENTITY);

        assert!(!target.is_invalidated_by(&target));
        assert!(target
            .is_invalidated_by(&camera(uvec2(1920, 1080), Mat4::IDENTITY)));

        // Moving the camera must not force a resource rebuild
        let moved =
            camera(uvec2(1280, 720), Mat4::from_translation(vec3(1.0, 0.0, 0.0)));

        assert!(!target.is_invalidated_by(&moved));
        assert!(target.is_moved_by(&moved));
        assert!(!target.is_moved_by(&target));
    }
}

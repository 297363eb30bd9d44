use bytemuck::{Pod, Zeroable};
use glam::{Mat4, UVec2, Vec4, Vec4Swizzles};

/// Per-frame camera block, shared by every pass.
///
/// `screen` packs `(width, height, 1/width, 1/height)` so shaders can go
/// between pixel coordinates and UVs without extra uniforms.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    pub origin: Vec4,
    pub screen: Vec4,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4, origin: Vec4, size: UVec2) -> Self {
        Self {
            view,
            projection,
            origin,
            screen: Vec4::new(
                size.x as f32,
                size.y as f32,
                1.0 / (size.x as f32),
                1.0 / (size.y as f32),
            ),
        }
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen.xy().as_uvec2()
    }
}

#[cfg(test)]
mod tests {
    use glam::{uvec2, vec4, Vec3};

    use super::*;

    #[test]
    fn screen_vector() {
        let target = Camera::new(
            Mat4::IDENTITY,
            Mat4::IDENTITY,
            Vec3::ZERO.extend(1.0),
            uvec2(1280, 720),
        );

        assert_eq!(uvec2(1280, 720), target.screen_size());
        assert_eq!(
            vec4(1280.0, 720.0, 1.0 / 1280.0, 1.0 / 720.0),
            target.screen,
        );
    }
}

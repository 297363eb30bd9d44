use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

/// View-space light descriptor for the screen-space shadows pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Light {
    /// x - view-space vector x
    /// y - view-space vector y
    /// z - view-space vector z
    /// w - light kind: 0 - directional, 1 - point
    pub d0: Vec4,
}

impl Light {
    pub const KIND_DIRECTIONAL: f32 = 0.0;
    pub const KIND_POINT: f32 = 1.0;

    /// Builds the block for a directional light.
    ///
    /// The direction is rotated into view space and negated so the shader
    /// marches *toward* the light.
    pub fn directional(direction: Vec3, view: Mat4) -> Self {
        let vector = -view.transform_vector3(direction);

        Self {
            d0: vector.extend(Self::KIND_DIRECTIONAL),
        }
    }

    /// Builds the block for a point light at an absolute world position.
    pub fn point(position: Vec3, view: Mat4) -> Self {
        let vector = view.transform_point3(position);

        Self {
            d0: vector.extend(Self::KIND_POINT),
        }
    }

    pub fn vector(&self) -> Vec3 {
        self.d0.xyz()
    }

    pub fn is_directional(&self) -> bool {
        self.d0.w == Self::KIND_DIRECTIONAL
    }

    pub fn is_point(&self) -> bool {
        !self.is_directional()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    fn view() -> Mat4 {
        Mat4::look_at_rh(
            vec3(0.0, 2.0, 5.0),
            vec3(0.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn directional_transforms_and_negates() {
        let target = Light::directional(vec3(0.0, -1.0, 0.0), view());
        let expected = -view().transform_vector3(vec3(0.0, -1.0, 0.0));

        assert!(target.is_directional());
        assert_relative_eq!(expected.x, target.vector().x);
        assert_relative_eq!(expected.y, target.vector().y);
        assert_relative_eq!(expected.z, target.vector().z);

        // Rotation only - translation must not leak into the direction
        assert_relative_eq!(1.0, target.vector().length(), epsilon = 1.0e-6);
    }

    #[test]
    fn point_transforms_coordinates() {
        let target = Light::point(vec3(0.0, 2.0, 5.0), view());

        assert!(target.is_point());

        // The camera's own position lands at the view-space origin
        assert_relative_eq!(0.0, target.vector().x, epsilon = 1.0e-6);
        assert_relative_eq!(0.0, target.vector().y, epsilon = 1.0e-6);
        assert_relative_eq!(0.0, target.vector().z, epsilon = 1.0e-6);
    }

    #[test]
    fn kind_flag_switches_computation() {
        let pos = vec3(1.0, 2.0, 3.0);
        let directional = Light::directional(pos, view());
        let point = Light::point(pos, view());

        assert!(directional.is_directional());
        assert!(point.is_point());
        assert_ne!(directional.vector(), point.vector());
    }
}

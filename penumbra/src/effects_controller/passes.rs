use crate::{Camera, EffectsBuffers, Engine, GeometryInputs};

macro_rules! passes {
    ([ $( $name:ident => $class:ident, )* ]) => {
        $( mod $name; )*
        $( pub use self::$name::*; )*

        #[derive(Debug)]
        pub struct EffectsPasses {
            $( pub $name: $class, )*
        }

        impl EffectsPasses {
            pub fn new() -> Self {
                Self {
                    $( $name: $class::new(), )*
                }
            }

            /// (Re)applies every pass's bindings; pipelines are built on the
            /// first call and reused afterwards.
            pub fn rebind(
                &mut self,
                engine: &Engine,
                device: &wgpu::Device,
                camera: &Camera,
                buffers: &EffectsBuffers,
                geometry: &GeometryInputs,
            ) {
                $( self.$name.rebind(engine, device, camera, buffers, geometry); )*
            }
        }

        impl Default for EffectsPasses {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

passes!([
    ambient_occlusion => AmbientOcclusionPass,
    directional_occlusion => DirectionalOcclusionPass,
    global_illumination => GlobalIlluminationPass,
    bilateral_blur => BilateralBlurPass,
    shadows => ShadowsPass,
    composition => CompositionPass,
]);

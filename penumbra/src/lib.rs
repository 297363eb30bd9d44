//! Penumbra - screen-space effects compositor on top of wgpu.
//!
//! Derives ambient occlusion, directional occlusion / global illumination,
//! bilateral denoising and screen-space shadows from an externally produced
//! geometry buffer plus the previous frame's color, and composites them onto
//! the final image; see [`Engine`] and [`EffectsController`] for the entry
//! points.

mod buffers;
mod camera;
mod effects_controller;
mod gbuffer;
mod light;
mod noise;
mod params;
mod shaders;
mod toggles;
mod utils;

use log::info;

pub use penumbra_gpu as gpu;

pub use self::buffers::*;
pub use self::camera::*;
pub use self::effects_controller::*;
pub use self::gbuffer::*;
pub use self::light::*;
pub use self::noise::*;
pub use self::params::*;
pub use self::shaders::*;
pub use self::toggles::*;

/// Shared, viewport-independent state: compiled shaders and the noise
/// texture.
///
/// One engine can serve any number of [`EffectsController`]s; the device it
/// runs on has to be created with [`Engine::REQUIRED_FEATURES`] and
/// [`Engine::required_limits()`].
#[derive(Debug)]
pub struct Engine {
    pub(crate) shaders: Shaders,
    pub(crate) noise: NoiseTexture,
}

impl Engine {
    pub const REQUIRED_FEATURES: wgpu::Features =
        wgpu::Features::PUSH_CONSTANTS;

    pub fn required_limits() -> wgpu::Limits {
        wgpu::Limits {
            max_push_constant_size: std::mem::size_of::<
                gpu::CompositionPassParams,
            >() as u32,
            ..Default::default()
        }
    }

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        info!("Initializing");

        Self {
            shaders: Shaders::new(device),
            noise: NoiseTexture::procedural(device, queue),
        }
    }

    /// Like [`Self::new()`], but with a pre-baked noise image (PNG) instead
    /// of the procedural default.
    pub fn with_noise(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        png: &[u8],
    ) -> Result<Self, image::ImageError> {
        Ok(Self {
            shaders: Shaders::new(device),
            noise: NoiseTexture::from_png(device, queue, png)?,
        })
    }

    pub fn noise(&self) -> &NoiseTexture {
        &self.noise
    }

    pub fn create_controller(
        &self,
        device: &wgpu::Device,
        camera: Camera,
    ) -> EffectsController {
        EffectsController::new(self, device, camera)
    }
}

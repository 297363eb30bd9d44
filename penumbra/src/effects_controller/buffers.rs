use glam::Vec2;
use log::debug;

use crate::{
    gpu, Camera, DoubleBuffered, EffectParams, MappedUniformBuffer, Texture,
};

/// GPU resources owned by one controller: the per-pass parameter buffers and
/// the viewport-sized output textures.
///
/// Reallocated wholesale when the viewport changes; parameter values survive
/// that because they're rebuilt from [`EffectParams`], the host-side source
/// of truth.
#[derive(Debug)]
pub struct EffectsBuffers {
    pub camera: MappedUniformBuffer<gpu::Camera>,
    pub ao_params: MappedUniformBuffer<gpu::OcclusionPassParams>,
    pub do_params: MappedUniformBuffer<gpu::OcclusionPassParams>,
    pub gi_params: MappedUniformBuffer<gpu::GlobalIlluminationPassParams>,
    pub sss_params: MappedUniformBuffer<gpu::ShadowsPassParams>,

    /// Occlusion-family accumulation target; double-buffered so each frame
    /// can read the previous frame's result while overwriting its own half.
    pub indirect: DoubleBuffered<Texture>,

    /// Horizontal blur output; the vertical pass reads exactly this.
    pub blur_scratch: Texture,

    /// Final blurred occlusion, consumed by the composition pass.
    pub blurred: Texture,

    /// Screen-space shadows output.
    pub shadows: Texture,
}

impl EffectsBuffers {
    pub fn new(
        device: &wgpu::Device,
        camera: &Camera,
        params: &EffectParams,
        history_weight: f32,
        noise_tiling: Vec2,
    ) -> Self {
        debug!("Initializing effects buffers");

        let size = camera.viewport.size;

        let camera_uniform = MappedUniformBuffer::new(
            device,
            "penumbra_camera",
            camera.serialize(),
        );

        let ao_params = MappedUniformBuffer::new(
            device,
            "penumbra_ao_params",
            params.ao_block(history_weight, noise_tiling),
        );

        let do_params = MappedUniformBuffer::new(
            device,
            "penumbra_do_params",
            params.do_block(history_weight, noise_tiling),
        );

        let gi_params = MappedUniformBuffer::new(
            device,
            "penumbra_gi_params",
            params.gi_block(history_weight, noise_tiling),
        );

        let sss_params = MappedUniformBuffer::new(
            device,
            "penumbra_sss_params",
            params.sss_block(),
        );

        let indirect = DoubleBuffered::<Texture>::new(
            device,
            Texture::builder("penumbra_indirect")
                .with_size(size)
                .with_usage(wgpu::TextureUsages::STORAGE_BINDING)
                .with_address_mode(wgpu::AddressMode::MirrorRepeat)
                .with_filter(wgpu::FilterMode::Linear),
        );

        let blur_scratch = Texture::builder("penumbra_blur_scratch")
            .with_size(size)
            .with_usage(wgpu::TextureUsages::STORAGE_BINDING)
            .with_address_mode(wgpu::AddressMode::MirrorRepeat)
            .with_filter(wgpu::FilterMode::Linear)
            .build(device);

        let blurred = Texture::builder("penumbra_blurred")
            .with_size(size)
            .with_usage(wgpu::TextureUsages::STORAGE_BINDING)
            .build(device);

        let shadows = Texture::builder("penumbra_shadows")
            .with_size(size)
            .with_usage(wgpu::TextureUsages::STORAGE_BINDING)
            .build(device);

        Self {
            camera: camera_uniform,
            ao_params,
            do_params,
            gi_params,
            sss_params,
            indirect,
            blur_scratch,
            blurred,
            shadows,
        }
    }
}

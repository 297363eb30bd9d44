use glam::{uvec2, UVec2, Vec2};
use rand::Rng;

use crate::{Bindable, Texture};

/// Size of the default, procedurally generated noise texture.
pub const NOISE_SIZE: u32 = 64;

/// Tiled noise texture the occlusion passes use for dithered sampling.
///
/// White noise drawn at startup is good enough for the default; a
/// pre-baked blue-noise image can be supplied instead through
/// [`Self::from_png()`], in which case its actual dimensions drive the
/// tiling uploaded to the shaders.
#[derive(Debug)]
pub struct NoiseTexture {
    texture: Texture,
    size: UVec2,
}

impl NoiseTexture {
    pub fn procedural(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let size = uvec2(NOISE_SIZE, NOISE_SIZE);
        let mut data = vec![0; (4 * size.x * size.y) as usize];

        rand::thread_rng().fill(&mut data[..]);

        Self::from_data(device, queue, size, &data)
    }

    pub fn from_png(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
    ) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let size = uvec2(image.width(), image.height());

        Ok(Self::from_data(device, queue, size, image.as_raw()))
    }

    fn from_data(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        size: UVec2,
        data: &[u8],
    ) -> Self {
        assert_eq!(data.len(), (4 * size.x * size.y) as usize);

        let texture = Texture::builder("penumbra_noise")
            .with_size(size)
            .with_format(wgpu::TextureFormat::Rgba8Unorm)
            .with_usage(wgpu::TextureUsages::COPY_DST)
            .with_address_mode(wgpu::AddressMode::Repeat)
            .build(device);

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: texture.tex(),
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * size.x),
                rows_per_image: Some(size.y),
            },
            wgpu::Extent3d {
                width: size.x,
                height: size.y,
                depth_or_array_layers: 1,
            },
        );

        Self { texture, size }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Tiling factor uploaded into the occlusion parameter blocks.
    pub fn tiling(&self) -> Vec2 {
        self.size.as_vec2()
    }

    pub fn bind_sampled(&self) -> impl Bindable + '_ {
        self.texture.bind_sampled()
    }
}

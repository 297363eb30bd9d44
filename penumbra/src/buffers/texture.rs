use glam::UVec2;

use super::Bindable;

/// Texture living on the GPU, together with its view and sampler.
#[derive(Debug)]
pub struct Texture {
    tex: wgpu::Texture,
    tex_view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    size: UVec2,
    format: wgpu::TextureFormat,
    filter: wgpu::FilterMode,
}

impl Texture {
    pub fn builder(label: impl ToString) -> TextureBuilder {
        TextureBuilder {
            label: label.to_string(),
            size: UVec2::ONE,
            format: wgpu::TextureFormat::Rgba16Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING,
            address_mode: wgpu::AddressMode::ClampToEdge,
            filter: wgpu::FilterMode::Nearest,
        }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn tex(&self) -> &wgpu::Texture {
        &self.tex
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.tex_view
    }

    /// Binds the texture for `textureLoad()` access.
    pub fn bind_readable(&self) -> impl Bindable + '_ {
        TextureBinder {
            parent: self,
            mode: TextureBinderMode::Readable,
        }
    }

    /// Binds the texture together with its sampler, for `textureSample*()`
    /// access.
    pub fn bind_sampled(&self) -> impl Bindable + '_ {
        TextureBinder {
            parent: self,
            mode: TextureBinderMode::Sampled,
        }
    }

    /// Binds the texture as a write-only storage texture.
    pub fn bind_writable(&self) -> impl Bindable + '_ {
        TextureBinder {
            parent: self,
            mode: TextureBinderMode::Writable,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextureBuilder {
    label: String,
    size: UVec2,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,
    address_mode: wgpu::AddressMode,
    filter: wgpu::FilterMode,
}

impl TextureBuilder {
    pub fn with_size(mut self, size: UVec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_usage(mut self, usage: wgpu::TextureUsages) -> Self {
        self.usage |= usage;
        self
    }

    pub fn with_address_mode(mut self, address_mode: wgpu::AddressMode) -> Self {
        self.address_mode = address_mode;
        self
    }

    pub fn with_filter(mut self, filter: wgpu::FilterMode) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_label_suffix(mut self, suffix: &str) -> Self {
        self.label.push_str(suffix);
        self
    }

    pub fn build(self, device: &wgpu::Device) -> Texture {
        let label = &self.label;

        log::debug!("Allocating texture `{label}`; size={:?}", self.size);

        assert!(self.size.x > 0);
        assert!(self.size.y > 0);

        let tex = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(&format!("{label}_tex")),
            size: wgpu::Extent3d {
                width: self.size.x,
                height: self.size.y,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: self.usage,
            view_formats: &[],
        });

        let tex_view = tex.create_view(&Default::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{label}_sampler")),
            address_mode_u: self.address_mode,
            address_mode_v: self.address_mode,
            address_mode_w: self.address_mode,
            mag_filter: self.filter,
            min_filter: self.filter,
            ..Default::default()
        });

        Texture {
            tex,
            tex_view,
            sampler,
            size: self.size,
            format: self.format,
            filter: self.filter,
        }
    }
}

#[derive(Clone, Copy)]
enum TextureBinderMode {
    Readable,
    Sampled,
    Writable,
}

pub struct TextureBinder<'a> {
    parent: &'a Texture,
    mode: TextureBinderMode,
}

impl Bindable for TextureBinder<'_> {
    fn bind(
        &self,
        binding: u32,
    ) -> Vec<(wgpu::BindGroupLayoutEntry, wgpu::BindingResource)> {
        let filterable = matches!(self.parent.filter, wgpu::FilterMode::Linear);

        match self.mode {
            TextureBinderMode::Readable => {
                let layout = wgpu::BindGroupLayoutEntry {
                    binding,
                    visibility: wgpu::ShaderStages::FRAGMENT
                        | wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float {
                            filterable: false,
                        },
                    },
                    count: None,
                };

                let resource =
                    wgpu::BindingResource::TextureView(&self.parent.tex_view);

                vec![(layout, resource)]
            }

            TextureBinderMode::Sampled => {
                let tex_layout = wgpu::BindGroupLayoutEntry {
                    binding,
                    visibility: wgpu::ShaderStages::FRAGMENT
                        | wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float {
                            filterable,
                        },
                    },
                    count: None,
                };

                let sampler_layout = wgpu::BindGroupLayoutEntry {
                    binding: binding + 1,
                    visibility: wgpu::ShaderStages::FRAGMENT
                        | wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Sampler(if filterable {
                        wgpu::SamplerBindingType::Filtering
                    } else {
                        wgpu::SamplerBindingType::NonFiltering
                    }),
                    count: None,
                };

                let tex_resource =
                    wgpu::BindingResource::TextureView(&self.parent.tex_view);

                let sampler_resource =
                    wgpu::BindingResource::Sampler(&self.parent.sampler);

                vec![
                    (tex_layout, tex_resource),
                    (sampler_layout, sampler_resource),
                ]
            }

            TextureBinderMode::Writable => {
                let layout = wgpu::BindGroupLayoutEntry {
                    binding,
                    visibility: wgpu::ShaderStages::FRAGMENT
                        | wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::StorageTexture {
                        access: wgpu::StorageTextureAccess::WriteOnly,
                        format: self.parent.format,
                        view_dimension: wgpu::TextureViewDimension::D2,
                    },
                    count: None,
                };

                let resource =
                    wgpu::BindingResource::TextureView(&self.parent.tex_view);

                vec![(layout, resource)]
            }
        }
    }
}

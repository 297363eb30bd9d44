use crate::Bindable;

/// Texture views borrowed from the upstream geometry-buffer producer, plus
/// the current backbuffer color; all read-only for this crate.
///
/// The views are cheap handle clones, but they go stale whenever the producer
/// reallocates its targets - after any resize the collaborator must re-query
/// them and call `EffectsController::bind_geometry()` again.
#[derive(Debug)]
pub struct GeometryInputs {
    pub position: wgpu::TextureView,
    pub normal: wgpu::TextureView,
    pub depth: wgpu::TextureView,
    pub velocity: wgpu::TextureView,
    pub color: wgpu::TextureView,
}

/// External views are always bound for `textureLoad()` access; this keeps the
/// binding layout independent from whatever float format the producer picked.
impl Bindable for wgpu::TextureView {
    fn bind(
        &self,
        binding: u32,
    ) -> Vec<(wgpu::BindGroupLayoutEntry, wgpu::BindingResource)> {
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

        let resource = wgpu::BindingResource::TextureView(self);

        vec![(layout, resource)]
    }
}

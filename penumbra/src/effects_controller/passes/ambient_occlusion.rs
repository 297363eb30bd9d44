use crate::{
    Camera, ComputePass, EffectsBuffers, EffectsController, Engine,
    GeometryInputs,
};

/// Standalone ambient-occlusion pass; runs when AO is the only active member
/// of the occlusion family.
#[derive(Debug)]
pub struct AmbientOcclusionPass {
    pass: ComputePass,
}

impl AmbientOcclusionPass {
    pub fn new() -> Self {
        Self {
            pass: ComputePass::new("ambient_occlusion"),
        }
    }

    pub fn rebind(
        &mut self,
        engine: &Engine,
        device: &wgpu::Device,
        _: &Camera,
        buffers: &EffectsBuffers,
        geometry: &GeometryInputs,
    ) {
        self.pass.rebind(
            device,
            &engine.shaders.ambient_occlusion,
            &[
                &buffers.indirect.curr().bind_writable(),
                &geometry.position,
                &geometry.normal,
                &geometry.velocity,
                &engine.noise.bind_sampled(),
                &buffers.indirect.past().bind_readable(),
                &buffers.camera,
                &buffers.ao_params,
            ],
        );
    }

    pub fn run(
        &self,
        effects: &EffectsController,
        encoder: &mut wgpu::CommandEncoder,
    ) {
        self.pass.run(
            encoder,
            effects.is_alternate(),
            effects.camera.viewport.size,
        );
    }
}

impl Default for AmbientOcclusionPass {
    fn default() -> Self {
        Self::new()
    }
}

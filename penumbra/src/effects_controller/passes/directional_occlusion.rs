use crate::{
    Camera, ComputePass, EffectsBuffers, EffectsController, Engine,
    GeometryInputs,
};

/// Standalone directional-occlusion pass; gathers one-bounce color alongside
/// the occlusion term, so it additionally reads the backbuffer.
#[derive(Debug)]
pub struct DirectionalOcclusionPass {
    pass: ComputePass,
}

impl DirectionalOcclusionPass {
    pub fn new() -> Self {
        Self {
            pass: ComputePass::new("directional_occlusion"),
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
            &engine.shaders.directional_occlusion,
            &[
                &buffers.indirect.curr().bind_writable(),
                &geometry.color,
                &geometry.position,
                &geometry.normal,
                &geometry.velocity,
                &engine.noise.bind_sampled(),
                &buffers.indirect.past().bind_readable(),
                &buffers.camera,
                &buffers.do_params,
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

impl Default for DirectionalOcclusionPass {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{
    Camera, ComputePass, EffectsBuffers, EffectsController, Engine,
    GeometryInputs,
};

/// Fused AO+DO pass; dispatched when both halves of the occlusion family are
/// enabled, producing the combined result in a single sweep over the screen.
#[derive(Debug)]
pub struct GlobalIlluminationPass {
    pass: ComputePass,
}

impl GlobalIlluminationPass {
    pub fn new() -> Self {
        Self {
            pass: ComputePass::new("global_illumination"),
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
            &engine.shaders.global_illumination,
            &[
                &buffers.indirect.curr().bind_writable(),
                &geometry.color,
                &geometry.position,
                &geometry.normal,
                &geometry.velocity,
                &engine.noise.bind_sampled(),
                &buffers.indirect.past().bind_readable(),
                &buffers.camera,
                &buffers.gi_params,
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

impl Default for GlobalIlluminationPass {
    fn default() -> Self {
        Self::new()
    }
}

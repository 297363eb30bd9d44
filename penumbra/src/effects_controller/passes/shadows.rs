use crate::{
    Camera, ComputePass, EffectsBuffers, EffectsController, Engine,
    GeometryInputs,
};

/// Screen-space shadows; marches the position buffer toward the light in
/// view space. Independent from the occlusion family - it dispatches
/// whenever its own toggle is on.
#[derive(Debug)]
pub struct ShadowsPass {
    pass: ComputePass,
}

impl ShadowsPass {
    pub fn new() -> Self {
        Self {
            pass: ComputePass::new("shadows"),
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
            &engine.shaders.shadows,
            &[
                &buffers.shadows.bind_writable(),
                &geometry.position,
                &buffers.camera,
                &buffers.sss_params,
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

impl Default for ShadowsPass {
    fn default() -> Self {
        Self::new()
    }
}

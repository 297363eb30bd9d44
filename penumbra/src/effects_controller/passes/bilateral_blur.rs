use crate::{
    Camera, ComputePass, EffectsBuffers, EffectsController, Engine,
    GeometryInputs,
};

/// Depth-aware separable blur over the occlusion output.
///
/// Two dependent sub-passes with a fixed order: horizontal reads the raw
/// occlusion result and writes the scratch texture, vertical reads that
/// scratch and writes the final blurred texture. Routing them through two
/// distinct textures is what guarantees the vertical kernel sees exactly the
/// horizontal kernel's completed output.
#[derive(Debug)]
pub struct BilateralBlurPass {
    horizontal: ComputePass,
    vertical: ComputePass,
}

impl BilateralBlurPass {
    pub fn new() -> Self {
        Self {
            horizontal: ComputePass::new("blur_horizontal"),
            vertical: ComputePass::new("blur_vertical"),
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
        self.horizontal.rebind(
            device,
            &engine.shaders.blur_horizontal,
            &[
                &buffers.blur_scratch.bind_writable(),
                &buffers.indirect.curr().bind_sampled(),
                &geometry.depth,
            ],
        );

        self.vertical.rebind(
            device,
            &engine.shaders.blur_vertical,
            &[
                &buffers.blurred.bind_writable(),
                &buffers.blur_scratch.bind_sampled(),
                &geometry.depth,
            ],
        );
    }

    pub fn run(
        &self,
        effects: &EffectsController,
        encoder: &mut wgpu::CommandEncoder,
    ) {
        let alternate = effects.is_alternate();
        let size = effects.camera.viewport.size;

        self.horizontal.run(encoder, alternate, size);
        self.vertical.run(encoder, alternate, size);
    }
}

impl Default for BilateralBlurPass {
    fn default() -> Self {
        Self::new()
    }
}

use std::mem;
use std::ops::Range;

use log::debug;

use crate::{
    gpu, BindGroup, Camera, DoubleBufferedBindable, EffectsBuffers,
    EffectsController, Engine, GeometryInputs,
};

/// Final composition: a fullscreen triangle that merges the occlusion result
/// (raw or blurred) and the shadow term onto the backbuffer color.
///
/// The shader branches on per-effect flags passed as push constants, so
/// toggling effects never swaps pipelines; bindings are refreshed each time
/// upstream resources change, same as the compute passes.
#[derive(Debug)]
pub struct CompositionPass {
    state: Option<CompositionPassState>,
}

#[derive(Debug)]
struct CompositionPassState {
    bind_group: BindGroup,
    pipeline: wgpu::RenderPipeline,
    format: wgpu::TextureFormat,
}

impl CompositionPass {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn rebind(
        &mut self,
        engine: &Engine,
        device: &wgpu::Device,
        camera: &Camera,
        buffers: &EffectsBuffers,
        geometry: &GeometryInputs,
    ) {
        let indirect = buffers.indirect.curr();
        let indirect = indirect.bind_readable();
        let blurred = buffers.blurred.bind_readable();
        let shadows = buffers.shadows.bind_readable();

        let items: [&dyn DoubleBufferedBindable; 4] =
            [&geometry.color, &indirect, &blurred, &shadows];

        if let Some(state) = &mut self.state {
            if state.format == camera.viewport.format {
                state.bind_group.rebind(device, &items);
                return;
            }

            // Output format changed; the pipeline has to be rebuilt
            self.state = None;
        }

        debug!("Initializing pass: composition");

        let mut bind_group = BindGroup::builder("composition_bg0");

        for item in items {
            bind_group = bind_group.add(item);
        }

        let bind_group = bind_group.build(device);

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("penumbra_composition_pipeline_layout"),
                bind_group_layouts: &[bind_group.layout()],
                push_constant_ranges: &[wgpu::PushConstantRange {
                    stages: wgpu::ShaderStages::FRAGMENT,
                    range: Range {
                        start: 0,
                        end: mem::size_of::<gpu::CompositionPassParams>()
                            as u32,
                    },
                }],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("penumbra_composition_pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &engine.shaders.composition,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[],
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &engine.shaders.composition,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: camera.viewport.format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                multiview: None,
                cache: None,
            });

        self.state = Some(CompositionPassState {
            bind_group,
            pipeline,
            format: camera.viewport.format,
        });
    }

    pub fn run(
        &self,
        effects: &EffectsController,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let Some(state) = &self.state else {
            debug!("Pass not ready, dropping dispatch: composition");
            return;
        };

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("penumbra_composition"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        let params = effects.toggles.composition_params();

        pass.set_pipeline(&state.pipeline);
        pass.set_bind_group(0, state.bind_group.get(effects.is_alternate()), &[]);
        pass.set_push_constants(
            wgpu::ShaderStages::FRAGMENT,
            0,
            bytemuck::bytes_of(&params),
        );
        pass.draw(0..3, 0..1);
    }
}

impl Default for CompositionPass {
    fn default() -> Self {
        Self::new()
    }
}

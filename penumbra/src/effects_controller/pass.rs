use glam::UVec2;
use log::debug;

use crate::gpu::workgroup_count;
use crate::{BindGroup, DoubleBufferedBindable};

/// Single compute pass with a fixed binding table.
///
/// The pass is just a shell until the first [`Self::rebind()`] supplies its
/// resources; that call builds the bind group layout and the pipeline, and
/// every later call only re-applies resources against them. Running an
/// unbound pass drops that frame's dispatch - at most once, no retry queue -
/// which is how dispatch-before-ready stays non-fatal.
#[derive(Debug)]
pub struct ComputePass {
    label: String,
    state: Option<ComputePassState>,
}

#[derive(Debug)]
struct ComputePassState {
    bind_group: BindGroup,
    pipeline: wgpu::ComputePipeline,
}

impl ComputePass {
    pub fn new(label: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            state: None,
        }
    }

    pub fn rebind(
        &mut self,
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        items: &[&dyn DoubleBufferedBindable],
    ) {
        if let Some(state) = &mut self.state {
            state.bind_group.rebind(device, items);
            return;
        }

        debug!("Initializing pass: {}", self.label);

        let mut bind_group = BindGroup::builder(format!("{}_bg0", self.label));

        for item in items {
            bind_group = bind_group.add(*item);
        }

        let bind_group = bind_group.build(device);

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("penumbra_{}_pipeline_layout", self.label)),
                bind_group_layouts: &[bind_group.layout()],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                label: Some(&format!("penumbra_{}_pipeline", self.label)),
                layout: Some(&pipeline_layout),
                module: shader,
                entry_point: Some("main"),
                compilation_options: wgpu::PipelineCompilationOptions {
                    zero_initialize_workgroup_memory: false,
                    ..Default::default()
                },
                cache: None,
            });

        self.state = Some(ComputePassState {
            bind_group,
            pipeline,
        });
    }

    pub fn run(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        alternate: bool,
        size: UVec2,
    ) {
        let Some(state) = &self.state else {
            debug!("Pass not ready, dropping dispatch: {}", self.label);
            return;
        };

        let label = format!("penumbra_{}_pass", self.label);

        let mut pass =
            encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some(&label),
                timestamp_writes: None,
            });

        let size = workgroup_count(size);

        pass.set_pipeline(&state.pipeline);
        pass.set_bind_group(0, state.bind_group.get(alternate), &[]);
        pass.dispatch_workgroups(size.x, size.y, 1);
    }
}

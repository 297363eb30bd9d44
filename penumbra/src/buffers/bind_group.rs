use super::DoubleBufferedBindable;

/// Bind group in two versions, one per frame parity, so that passes reading
/// last frame's output automatically see the other half of each
/// double-buffered resource.
///
/// The layout is declared once, when the group is first built; later calls to
/// [`Self::rebind()`] re-apply resources against that same layout object,
/// which is what keeps pipelines valid across reallocation.
#[derive(Debug)]
pub struct BindGroup {
    label: String,
    layouts: Vec<wgpu::BindGroupLayoutEntry>,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group_a: wgpu::BindGroup,
    bind_group_b: wgpu::BindGroup,
}

impl BindGroup {
    pub fn builder<'ctx>(label: impl ToString) -> BindGroupBuilder<'ctx> {
        BindGroupBuilder {
            label: label.to_string(),
            layouts: Default::default(),
            resources: Default::default(),
        }
    }

    pub fn get(&self, alternate: bool) -> &wgpu::BindGroup {
        if alternate {
            &self.bind_group_b
        } else {
            &self.bind_group_a
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Re-applies resources without re-declaring the layout; called after the
    /// textures this group points at have been reallocated.
    pub fn rebind(
        &mut self,
        device: &wgpu::Device,
        items: &[&dyn DoubleBufferedBindable],
    ) {
        let (layouts, resources) = collect(items);

        assert_eq!(
            self.layouts, layouts,
            "bind group `{}` declared a different layout during rebind",
            self.label,
        );

        let (bind_group_a, bind_group_b) = build_bind_groups(
            device,
            &self.label,
            &self.bind_group_layout,
            resources,
        );

        self.bind_group_a = bind_group_a;
        self.bind_group_b = bind_group_b;
    }
}

pub struct BindGroupBuilder<'a> {
    label: String,
    layouts: Vec<wgpu::BindGroupLayoutEntry>,
    resources: Vec<[wgpu::BindingResource<'a>; 2]>,
}

impl<'a> BindGroupBuilder<'a> {
    pub fn add(mut self, item: &'a dyn DoubleBufferedBindable) -> Self {
        for (layout, resources) in item.bind(self.resources.len() as u32) {
            self.layouts.push(layout);
            self.resources.push(resources);
        }

        self
    }

    pub fn build(self, device: &wgpu::Device) -> BindGroup {
        let label = format!("penumbra_{}", self.label);

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(&format!("{label}_layout")),
                entries: &self.layouts,
            });

        let (bind_group_a, bind_group_b) = build_bind_groups(
            device,
            &label,
            &bind_group_layout,
            self.resources,
        );

        BindGroup {
            label,
            layouts: self.layouts,
            bind_group_layout,
            bind_group_a,
            bind_group_b,
        }
    }
}

fn collect<'a>(
    items: &[&'a dyn DoubleBufferedBindable],
) -> (
    Vec<wgpu::BindGroupLayoutEntry>,
    Vec<[wgpu::BindingResource<'a>; 2]>,
) {
    let mut layouts = Vec::new();
    let mut resources = Vec::new();

    for item in items {
        for (layout, resource) in item.bind(resources.len() as u32) {
            layouts.push(layout);
            resources.push(resource);
        }
    }

    (layouts, resources)
}

fn build_bind_groups(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    resources: Vec<[wgpu::BindingResource; 2]>,
) -> (wgpu::BindGroup, wgpu::BindGroup) {
    let (resources_a, resources_b): (Vec<_>, Vec<_>) = resources
        .into_iter()
        .enumerate()
        .map(|(binding, resources)| {
            let [resource_a, resource_b] =
                resources.map(|resource| wgpu::BindGroupEntry {
                    binding: binding as _,
                    resource,
                });

            (resource_a, resource_b)
        })
        .unzip();

    let bind_group_a = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &resources_a,
    });

    let bind_group_b = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &resources_b,
    });

    (bind_group_a, bind_group_b)
}

/// Compiled shader modules, shared by every controller created from the same
/// engine.
#[derive(Debug)]
pub struct Shaders {
    pub ambient_occlusion: wgpu::ShaderModule,
    pub blur_horizontal: wgpu::ShaderModule,
    pub blur_vertical: wgpu::ShaderModule,
    pub composition: wgpu::ShaderModule,
    pub directional_occlusion: wgpu::ShaderModule,
    pub global_illumination: wgpu::ShaderModule,
    pub shadows: wgpu::ShaderModule,
}

impl Shaders {
    pub fn new(device: &wgpu::Device) -> Self {
        let ambient_occlusion = device.create_shader_module(
            wgpu::include_wgsl!("shaders/ambient_occlusion.wgsl"),
        );

        let blur_horizontal = device.create_shader_module(
            wgpu::include_wgsl!("shaders/blur_horizontal.wgsl"),
        );

        let blur_vertical = device.create_shader_module(
            wgpu::include_wgsl!("shaders/blur_vertical.wgsl"),
        );

        let composition = device.create_shader_module(
            wgpu::include_wgsl!("shaders/composition.wgsl"),
        );

        let directional_occlusion = device.create_shader_module(
            wgpu::include_wgsl!("shaders/directional_occlusion.wgsl"),
        );

        let global_illumination = device.create_shader_module(
            wgpu::include_wgsl!("shaders/global_illumination.wgsl"),
        );

        let shadows = device
            .create_shader_module(wgpu::include_wgsl!("shaders/shadows.wgsl"));

        Self {
            ambient_occlusion,
            blur_horizontal,
            blur_vertical,
            composition,
            directional_occlusion,
            global_illumination,
            shadows,
        }
    }
}

mod buffers;
mod pass;
mod passes;

use log::{debug, info};

use crate::utils::draw_jitter;
use crate::{
    gpu, Camera, EffectParams, Engine, GeometryInputs, Light, OcclusionMode,
    Preset, Toggles,
};

pub use self::buffers::*;
pub use self::pass::*;
pub use self::passes::*;

#[cfg(feature = "metrics")]
use crate::utils::FrameMetrics;

/// Per-viewport orchestrator of the screen-space effects pipeline.
///
/// Owns all GPU state the effects need - parameter buffers, output textures,
/// passes - and drives one frame through the fixed dispatch order:
/// occlusion family, blur, shadows, composition. The caller runs
/// [`Self::update()`], [`Self::flush()`] and [`Self::render()`] once per
/// frame, in that order, from the render loop's callback.
#[derive(Debug)]
pub struct EffectsController {
    camera: Camera,
    toggles: Toggles,
    params: EffectParams,
    history: gpu::HistoryBlend,
    buffers: EffectsBuffers,
    passes: EffectsPasses,
    geometry: Option<GeometryInputs>,
    frame: gpu::Frame,
    noise_tiling: glam::Vec2,
    #[cfg(feature = "metrics")]
    metrics: FrameMetrics,
}

impl EffectsController {
    pub(crate) fn new(
        engine: &Engine,
        device: &wgpu::Device,
        camera: Camera,
    ) -> Self {
        info!("Creating effects controller ({})", camera.describe());

        let params = EffectParams::default();
        let history = gpu::HistoryBlend::default();
        let noise_tiling = engine.noise.tiling();

        let buffers = EffectsBuffers::new(
            device,
            &camera,
            &params,
            history.weight(),
            noise_tiling,
        );

        Self {
            camera,
            toggles: Toggles::default(),
            params,
            history,
            buffers,
            passes: EffectsPasses::new(),
            geometry: None,
            frame: gpu::Frame::default(),
            noise_tiling,
            #[cfg(feature = "metrics")]
            metrics: FrameMetrics::new(),
        }
    }

    /// Wires the upstream texture handles into every pass.
    ///
    /// Must be called once after creation and again after every resize, with
    /// freshly re-queried views - the producer reallocates its targets and
    /// pipelines bind by resource identity, not by name. Until that happens,
    /// [`Self::render()`] skips the frame.
    pub fn bind_geometry(
        &mut self,
        engine: &Engine,
        device: &wgpu::Device,
        geometry: GeometryInputs,
    ) {
        debug!("Binding geometry inputs");

        self.passes.rebind(
            engine,
            device,
            &self.camera,
            &self.buffers,
            &geometry,
        );

        self.geometry = Some(geometry);
    }

    /// Ingests this frame's camera and light.
    ///
    /// A viewport change reallocates every output texture and invalidates the
    /// geometry bindings; a view-matrix change only resets the temporal
    /// history to its moving weight.
    pub fn update(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        camera: Camera,
        light: Option<&Light>,
    ) {
        if self.camera.is_invalidated_by(&camera) {
            debug!("Rebuilding buffers ({})", camera.describe());

            self.camera = camera;

            self.buffers = EffectsBuffers::new(
                device,
                &self.camera,
                &self.params,
                self.history.weight(),
                self.noise_tiling,
            );

            // Upstream reallocates its G-buffer as well; stale views must not
            // be dispatched against
            self.geometry = None;
        } else {
            let moved = self.camera.is_moved_by(&camera);

            self.camera = camera;

            if moved {
                let weight = self.history.moving_weight();
                self.set_history_weight(queue, weight, false);
            }
        }

        *self.buffers.camera = self.camera.serialize();

        if let Some(light) = light {
            self.buffers.sss_params.light =
                light.serialize(self.camera.view);
        }
    }

    /// Commits this frame's uniforms and advances per-frame state; called
    /// after [`Self::update()`], before encoding.
    pub fn flush(&mut self, queue: &wgpu::Queue) {
        self.frame = self.frame.next();

        if let Some(mode) = self.toggles.occlusion_mode() {
            let weight = self.history.advance();

            self.buffers.ao_params.history_weight = weight;
            self.buffers.do_params.history_weight = weight;
            self.buffers.gi_params.history_weight = weight;

            let [jitter_a, jitter_b] = draw_jitter(
                &mut rand::thread_rng(),
                self.camera.viewport.size,
            );

            match mode {
                OcclusionMode::Fused => {
                    self.buffers.gi_params.jitter_a = jitter_a;
                    self.buffers.gi_params.jitter_b = jitter_b;
                }
                OcclusionMode::AmbientOnly => {
                    self.buffers.ao_params.jitter_a = jitter_a;
                    self.buffers.ao_params.jitter_b = jitter_b;
                }
                OcclusionMode::DirectionalOnly => {
                    self.buffers.do_params.jitter_a = jitter_a;
                    self.buffers.do_params.jitter_b = jitter_b;
                }
            }
        }

        self.buffers.camera.flush(queue);
        self.buffers.ao_params.flush(queue);
        self.buffers.do_params.flush(queue);
        self.buffers.gi_params.flush(queue);
        self.buffers.sss_params.flush(queue);

        #[cfg(feature = "metrics")]
        self.metrics.frame();
    }

    /// Encodes this frame's passes in their fixed dependency order.
    ///
    /// With the master toggle off nothing at all is encoded; with geometry
    /// inputs missing the whole frame is skipped and self-heals once
    /// [`Self::bind_geometry()`] runs.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        if !self.toggles.master {
            return;
        }

        if self.geometry.is_none() {
            debug!("Geometry inputs not bound, skipping frame");
            return;
        }

        match self.toggles.occlusion_mode() {
            Some(OcclusionMode::Fused) => {
                self.passes.global_illumination.run(self, encoder);
            }
            Some(OcclusionMode::AmbientOnly) => {
                self.passes.ambient_occlusion.run(self, encoder);
            }
            Some(OcclusionMode::DirectionalOnly) => {
                self.passes.directional_occlusion.run(self, encoder);
            }
            None => (),
        }

        if self.toggles.blur_active() {
            self.passes.bilateral_blur.run(self, encoder);
        }

        if self.toggles.shadows_active() {
            self.passes.shadows.run(self, encoder);
        }

        self.passes.composition.run(self, encoder, view);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn is_attached(&self) -> bool {
        self.toggles.master
    }

    pub fn is_ready(&self) -> bool {
        self.geometry.is_some()
    }

    pub(crate) fn is_alternate(&self) -> bool {
        self.frame.is_alternate()
    }

    // ---

    pub fn iterations(&self) -> u32 {
        self.params.iterations.get() as u32
    }

    pub fn history_weight(&self) -> f32 {
        self.history.weight()
    }

    pub fn ao_intensity(&self) -> f32 {
        self.params.ao_intensity.get()
    }

    pub fn ao_radius(&self) -> f32 {
        self.params.ao_radius.get()
    }

    pub fn do_intensity(&self) -> f32 {
        self.params.do_intensity.get()
    }

    pub fn do_radius(&self) -> f32 {
        self.params.do_radius.get()
    }

    pub fn sss_intensity(&self) -> f32 {
        self.params.sss_intensity.get()
    }

    pub fn sss_shadow_length(&self) -> f32 {
        self.params.sss_shadow_length.get()
    }

    pub fn sss_shadow_bias(&self) -> f32 {
        self.params.sss_shadow_bias.get()
    }

    pub fn sss_step_size(&self) -> f32 {
        self.params.sss_step_size.get()
    }

    // ---

    pub fn set_iterations(
        &mut self,
        queue: &wgpu::Queue,
        value: u32,
        check_threshold: bool,
    ) {
        if !self.params.iterations.set(value as f32, check_threshold) {
            return;
        }

        let value = self.params.iterations.get() as u32;

        self.buffers.ao_params.iterations = value;
        self.buffers.ao_params.flush(queue);
        self.buffers.do_params.iterations = value;
        self.buffers.do_params.flush(queue);
        self.buffers.gi_params.iterations = value;
        self.buffers.gi_params.flush(queue);
    }

    /// Sets the temporal blend weight directly.
    ///
    /// Mirrored into all three occlusion-family buffers, each committed on
    /// its own - the commits aren't transactional, but they all happen here,
    /// on the orchestrator thread, before any of this frame's dispatches.
    pub fn set_history_weight(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        const THRESHOLD: f32 = 0.05;

        if check_threshold && (value - self.history.weight()).abs() < THRESHOLD
        {
            return;
        }

        self.history.set(value);

        let weight = self.history.weight();

        self.buffers.ao_params.history_weight = weight;
        self.buffers.ao_params.flush(queue);
        self.buffers.do_params.history_weight = weight;
        self.buffers.do_params.flush(queue);
        self.buffers.gi_params.history_weight = weight;
        self.buffers.gi_params.flush(queue);
    }

    pub fn set_ao_intensity(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.ao_intensity.set(value, check_threshold) {
            return;
        }

        let value = self.params.ao_intensity.get();

        self.buffers.ao_params.intensity = value;
        self.buffers.ao_params.flush(queue);
        self.buffers.gi_params.ao_intensity = value;
        self.buffers.gi_params.flush(queue);

        self.invalidate_history(queue);
    }

    pub fn set_ao_radius(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.ao_radius.set(value, check_threshold) {
            return;
        }

        let value = self.params.ao_radius.get();

        self.buffers.ao_params.radius = value;
        self.buffers.ao_params.flush(queue);
        self.buffers.gi_params.ao_radius = value;
        self.buffers.gi_params.flush(queue);

        self.invalidate_history(queue);
    }

    pub fn set_do_intensity(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.do_intensity.set(value, check_threshold) {
            return;
        }

        let value = self.params.do_intensity.get();

        self.buffers.do_params.intensity = value;
        self.buffers.do_params.flush(queue);
        self.buffers.gi_params.do_intensity = value;
        self.buffers.gi_params.flush(queue);

        self.invalidate_history(queue);
    }

    pub fn set_do_radius(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.do_radius.set(value, check_threshold) {
            return;
        }

        let value = self.params.do_radius.get();

        self.buffers.do_params.radius = value;
        self.buffers.do_params.flush(queue);
        self.buffers.gi_params.do_radius = value;
        self.buffers.gi_params.flush(queue);

        self.invalidate_history(queue);
    }

    pub fn set_sss_intensity(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.sss_intensity.set(value, check_threshold) {
            return;
        }

        self.buffers.sss_params.intensity = self.params.sss_intensity.get();
        self.buffers.sss_params.flush(queue);
    }

    pub fn set_sss_shadow_length(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.sss_shadow_length.set(value, check_threshold) {
            return;
        }

        self.buffers.sss_params.shadow_length =
            self.params.sss_shadow_length.get();
        self.buffers.sss_params.flush(queue);
    }

    pub fn set_sss_shadow_bias(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.sss_shadow_bias.set(value, check_threshold) {
            return;
        }

        self.buffers.sss_params.shadow_bias =
            self.params.sss_shadow_bias.get();
        self.buffers.sss_params.flush(queue);
    }

    pub fn set_sss_step_size(
        &mut self,
        queue: &wgpu::Queue,
        value: f32,
        check_threshold: bool,
    ) {
        if !self.params.sss_step_size.set(value, check_threshold) {
            return;
        }

        self.buffers.sss_params.step_size = self.params.sss_step_size.get();
        self.buffers.sss_params.flush(queue);
    }

    /// Applies a whole preset at once, bypassing thresholds.
    pub fn apply_preset(&mut self, queue: &wgpu::Queue, preset: &Preset) {
        self.set_ao_intensity(queue, preset.ao_intensity, false);
        self.set_ao_radius(queue, preset.ao_radius, false);
        self.set_do_intensity(queue, preset.do_intensity, false);
        self.set_do_radius(queue, preset.do_radius, false);
        self.set_sss_intensity(queue, preset.sss_intensity, false);
        self.set_sss_shadow_length(queue, preset.sss_shadow_length, false);
        self.set_sss_shadow_bias(queue, preset.sss_shadow_bias, false);
        self.set_sss_step_size(queue, preset.sss_step_size, false);
    }

    // ---

    pub fn toggle_master(&mut self, queue: &wgpu::Queue) {
        self.invalidate_history(queue);
        self.toggles.master = !self.toggles.master;

        info!("Compute effects enabled: {}", self.toggles.master);
    }

    pub fn toggle_ambient_occlusion(&mut self, queue: &wgpu::Queue) {
        self.invalidate_history(queue);

        if !self.toggles.master {
            return;
        }

        self.toggles.ambient_occlusion = !self.toggles.ambient_occlusion;
    }

    pub fn toggle_directional_occlusion(&mut self, queue: &wgpu::Queue) {
        self.invalidate_history(queue);

        if !self.toggles.master {
            return;
        }

        self.toggles.directional_occlusion =
            !self.toggles.directional_occlusion;
    }

    pub fn toggle_shadows(&mut self) {
        if !self.toggles.master {
            return;
        }

        self.toggles.shadows = !self.toggles.shadows;
    }

    pub fn toggle_blur(&mut self, queue: &wgpu::Queue) {
        self.invalidate_history(queue);

        if !self.toggles.master {
            return;
        }

        self.toggles.blur = !self.toggles.blur;
    }

    /// Geometry-affecting settings invalidate accumulated history; blending
    /// it into the new setting would smear two different effects together.
    fn invalidate_history(&mut self, queue: &wgpu::Queue) {
        let weight = self.history.moving_weight();

        self.set_history_weight(queue, weight, false);
    }
}

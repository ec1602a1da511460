use crate::constants::*;
use crate::core::palette::srgb_to_linear;
use crate::core::{Camera, Gallery};
use web_sys as web;

mod helpers;
mod pictures;
mod post;
mod scene;
mod targets;

use pictures::PictureSlot;
use post::{PostBindGroups, PostResources};
use scene::{LightPacked, SceneResources, SceneUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Scene pass (tunnel + pictures) into HDR
    scene: SceneResources,
    pictures: Vec<PictureSlot>,
    // Post-processing resources
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
    light_overflow_logged: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, slide_count: usize) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = helpers::linear_sampler(&device, "linear_sampler");
        let post = post::create_post_resources(&device, format);
        let post_groups = post::create_bind_groups(&device, &post, &linear_sampler, &targets);

        let scene = scene::create_scene_resources(&device, &TUNNEL);
        let pictures = (0..slide_count)
            .map(|_| PictureSlot::new(&device, &queue, &scene.picture_bgl, &linear_sampler))
            .collect();
        log::info!("[gpu] ready {}x{} format={:?} slides={}", width, height, format, slide_count);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            pictures,
            targets,
            linear_sampler,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            time_accum: 0.0,
            light_overflow_logged: false,
        })
    }

    /// Swap in the decoded image for slide `index`.
    pub fn upload_picture(&mut self, index: usize, width: u32, height: u32, rgba: &[u8]) {
        let Some(slot) = self.pictures.get_mut(index) else {
            log::warn!("[gpu] no picture slot {}", index);
            return;
        };
        slot.upload(
            &self.device,
            &self.queue,
            &self.scene.picture_bgl,
            &self.linear_sampler,
            width,
            height,
            rgba,
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::create_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets,
            );
        }
    }

    pub fn render(
        &mut self,
        dt_sec: f32,
        camera: &Camera,
        gallery: &Gallery,
    ) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_scene_uniforms(camera, gallery);
        for (slot, slide) in self.pictures.iter().zip(gallery.slides()) {
            slot.write(&self.queue, slide);
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: tunnel and pictures → HDR
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.scene.bind_group, &[]);
            rpass.set_pipeline(&self.scene.tunnel_pipeline);
            self.scene.tunnel.draw(&mut rpass);

            rpass.set_pipeline(&self.scene.picture_pipeline);
            for slot in &self.pictures {
                rpass.set_bind_group(1, &slot.bind_group, &[]);
                self.scene.quad.draw(&mut rpass);
            }
        }

        let (bw, bh) = targets::bloom_size(self.width, self.height);
        let res = [bw as f32, bh as f32];
        let write = |buffer: &wgpu::Buffer, dir: [f32; 2]| {
            post::write_post_uniforms(
                &self.queue,
                buffer,
                res,
                self.time_accum,
                dir,
                BLOOM_STRENGTH,
                BLOOM_THRESHOLD,
            );
        };
        write(&self.post.hdr_uniforms, [0.0, 0.0]);
        write(&self.post.blur_h_uniforms, [1.0, 0.0]);
        write(&self.post.blur_v_uniforms, [0.0, 1.0]);

        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.from_hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.from_hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_scene_uniforms(&mut self, camera: &Camera, gallery: &Gallery) {
        if gallery.len() > MAX_SPOTLIGHTS && !self.light_overflow_logged {
            log::warn!(
                "[gpu] {} slides exceed {} spotlights; lighting the nearest",
                gallery.len(),
                MAX_SPOTLIGHTS
            );
            self.light_overflow_logged = true;
        }
        let mut lights = [LightPacked::default(); MAX_SPOTLIGHTS];
        let mut count = 0usize;
        let lit = gallery.lighting_order(MAX_SPOTLIGHTS);
        for (packed, slide) in lights
            .iter_mut()
            .zip(lit.iter().filter_map(|&i| gallery.slides().get(i)))
        {
            let (position, target) = slide.spotlight_world();
            let aim = (target - position).normalize_or_zero();
            let direction = if aim == glam::Vec3::ZERO {
                glam::Vec3::NEG_Y
            } else {
                aim
            };
            let light = &slide.spotlight;
            let outer = light.angle;
            let inner = outer * (1.0 - light.penumbra.clamp(0.0, 1.0));
            *packed = LightPacked {
                position_decay: [position.x, position.y, position.z, light.decay],
                direction_cone: [direction.x, direction.y, direction.z, outer.cos()],
                color_intensity: [
                    srgb_to_linear(light.color[0]),
                    srgb_to_linear(light.color[1]),
                    srgb_to_linear(light.color[2]),
                    light.intensity * LIGHT_UNIT_SCALE,
                ],
                penumbra: [inner.cos(), 0.0, 0.0, 0.0],
            };
            count += 1;
        }
        let u = SceneUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: [AMBIENT_COLOR[0], AMBIENT_COLOR[1], AMBIENT_COLOR[2], AMBIENT_INTENSITY],
            counts: [count as u32, 0, 0, 0],
            lights,
        };
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

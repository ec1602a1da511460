use super::helpers;
use crate::core::{AssetState, Slide};
use wgpu;

pub(crate) const PICTURE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PictureUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
}

/// GPU resources for one slide's picture quad.
pub(crate) struct PictureSlot {
    texture: wgpu::Texture,
    uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl PictureSlot {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) -> Self {
        // 1x1 white until the image arrives
        let texture = create_picture_texture(device, queue, 1, 1, &[255, 255, 255, 255]);
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("picture_uniforms"),
            size: std::mem::size_of::<PictureUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = create_bind_group(device, layout, sampler, &uniform_buffer, &texture);
        Self {
            texture,
            uniform_buffer,
            bind_group,
        }
    }

    /// Replace the placeholder texture with decoded RGBA8 pixels.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) {
        if width == 0 || height == 0 || rgba.len() < (width * height * 4) as usize {
            log::warn!("[gpu] ignoring picture upload of {}x{} with {} bytes", width, height, rgba.len());
            return;
        }
        let texture = create_picture_texture(device, queue, width, height, rgba);
        self.bind_group = create_bind_group(device, layout, sampler, &self.uniform_buffer, &texture);
        self.texture.destroy();
        self.texture = texture;
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, slide: &Slide) {
        let textured = matches!(slide.picture.asset, AssetState::Ready { .. });
        let tint = slide.picture.tint;
        let u = PictureUniforms {
            model: slide.picture_world().to_cols_array_2d(),
            tint: [tint[0], tint[1], tint[2], if textured { 1.0 } else { 0.0 }],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

fn create_picture_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> wgpu::Texture {
    let (texture, _) = helpers::create_color_texture(
        device,
        "picture_tex",
        width,
        height,
        PICTURE_FORMAT,
        wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    );
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    texture
}

fn create_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    uniform_buffer: &wgpu::Buffer,
    texture: &wgpu::Texture,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("picture_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

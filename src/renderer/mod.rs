pub mod context;
pub mod nine_slice;
pub mod primitives;
pub mod texture;

use std::rc::Rc;
use std::sync::Arc;

use anyhow::bail;
use cosmic_text::{Attrs, Color, FontSystem, Metrics, Shaping, SwashCache};
use glam::{Vec2, Vec4, vec2};
use wgpu::util::DeviceExt;
use winit::window::Window;

pub use context::GpuContext;
pub use nine_slice::{NineSlice, PanelSkin};
pub use texture::Texture;

use crate::layout::Rect;
use crate::style::tokens::Typography;
use primitives::{RectInstance, SpriteInstance};

/// One batch of same-pipeline instances. Batches are replayed in the order
/// they were recorded, so painter's order survives the instancing.
enum DrawCmd {
    Rects(Vec<RectInstance>),
    Sprites {
        texture: Rc<Texture>,
        instances: Vec<SpriteInstance>,
    },
}

pub struct Renderer {
    ctx: GpuContext,
    screen_buf: wgpu::Buffer,
    screen_bind: wgpu::BindGroup,
    rect_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    sprite_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    cmds: Vec<DrawCmd>,

    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let ctx = GpuContext::new(window).await?;

        let font_system = FontSystem::new();
        if font_system.db().len() == 0 {
            bail!("no usable font faces found on this system");
        }
        let swash_cache = SwashCache::new();

        let screen_buf = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("screen uniform"),
                contents: bytemuck::cast_slice(&[
                    ctx.width() as f32,
                    ctx.height() as f32,
                    0.0,
                    0.0,
                ]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let screen_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("screen layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let screen_bind = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("screen bind"),
            layout: &screen_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buf.as_entire_binding(),
            }],
        });

        let sprite_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("sprite layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });
        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sprite sampler"),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let rect_pipeline = make_pipeline(
            &ctx.device,
            include_str!("shaders/rect.wgsl"),
            "rect.wgsl",
            &[&screen_layout],
            RectInstance::layout(),
            ctx.format(),
        );
        let sprite_pipeline = make_pipeline(
            &ctx.device,
            include_str!("shaders/sprite.wgsl"),
            "sprite.wgsl",
            &[&screen_layout, &sprite_layout],
            SpriteInstance::layout(),
            ctx.format(),
        );

        Ok(Self {
            ctx,
            screen_buf,
            screen_bind,
            rect_pipeline,
            sprite_pipeline,
            sprite_layout,
            sampler,
            cmds: Vec::new(),
            font_system,
            swash_cache,
        })
    }

    pub fn surface_size(&self) -> Vec2 {
        vec2(self.ctx.width() as f32, self.ctx.height() as f32)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
        let data = [self.ctx.width() as f32, self.ctx.height() as f32, 0.0, 0.0];
        self.ctx
            .queue
            .write_buffer(&self.screen_buf, 0, bytemuck::cast_slice(&data));
    }

    pub fn create_texture(&self, pixels: &image::RgbaImage) -> Rc<Texture> {
        Rc::new(Texture::from_rgba(
            &self.ctx.device,
            &self.ctx.queue,
            &self.sprite_layout,
            &self.sampler,
            pixels,
        ))
    }

    pub fn begin_frame(&mut self) {
        self.cmds.clear();
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Vec4) {
        let inst = RectInstance {
            pos: rect.origin.to_array(),
            size: rect.size.to_array(),
            color: color.to_array(),
        };
        match self.cmds.last_mut() {
            Some(DrawCmd::Rects(list)) => list.push(inst),
            _ => self.cmds.push(DrawCmd::Rects(vec![inst])),
        }
    }

    /// Draw the `src` pixel region of `texture` into `dst`.
    pub fn draw_sprite(&mut self, texture: &Rc<Texture>, src: Rect, dst: Rect, tint: Vec4) {
        let tex_size = texture.size();
        let inst = SpriteInstance {
            pos: dst.origin.to_array(),
            size: dst.size.to_array(),
            uv_pos: (src.origin / tex_size).to_array(),
            uv_size: (src.size / tex_size).to_array(),
            tint: tint.to_array(),
        };
        match self.cmds.last_mut() {
            Some(DrawCmd::Sprites { texture: t, instances }) if Rc::ptr_eq(t, texture) => {
                instances.push(inst);
            }
            _ => self.cmds.push(DrawCmd::Sprites {
                texture: texture.clone(),
                instances: vec![inst],
            }),
        }
    }

    /// Shape and blit a single line of text with its top-left at `pos`.
    /// Glyph coverage comes back from swash as small boxes which we draw
    /// through the rect pipeline.
    pub fn draw_text(&mut self, text: &str, pos: Vec2, color: Vec4, size: f32) {
        let fg = Color::rgba(
            (color.x * 255.0) as u8,
            (color.y * 255.0) as u8,
            (color.z * 255.0) as u8,
            (color.w * 255.0) as u8,
        );

        let mut boxes: Vec<RectInstance> = Vec::new();
        {
            let metrics = Metrics::new(size, size * Typography::LEADING);
            let mut line = cosmic_text::Buffer::new(&mut self.font_system, metrics);
            let mut line = line.borrow_with(&mut self.font_system);
            line.set_text(text, &Attrs::new(), Shaping::Advanced);
            line.shape_until_scroll(true);

            line.draw(&mut self.swash_cache, fg, |x, y, w, h, rgba| {
                boxes.push(RectInstance {
                    pos: (pos + vec2(x as f32, y as f32)).to_array(),
                    size: [w as f32, h as f32],
                    color: [
                        rgba.r() as f32 / 255.0,
                        rgba.g() as f32 / 255.0,
                        rgba.b() as f32 / 255.0,
                        rgba.a() as f32 / 255.0,
                    ],
                });
            });
        }

        if boxes.is_empty() {
            return;
        }
        match self.cmds.last_mut() {
            Some(DrawCmd::Rects(list)) => list.extend(boxes),
            _ => self.cmds.push(DrawCmd::Rects(boxes)),
        }
    }

    /// Direct access for widgets that shape text themselves (caret math,
    /// click-to-cursor hit testing).
    pub fn font_and_swash(&mut self) -> (&mut FontSystem, &mut SwashCache) {
        (&mut self.font_system, &mut self.swash_cache)
    }

    pub fn end_frame(&mut self) -> anyhow::Result<()> {
        let output = match self.ctx.acquire() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.ctx.reconfigure();
                return Ok(());
            }
            Err(err) => bail!("failed to acquire frame: {err}"),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let buffers: Vec<wgpu::Buffer> = self
            .cmds
            .iter()
            .map(|cmd| {
                let contents: &[u8] = match cmd {
                    DrawCmd::Rects(list) => bytemuck::cast_slice(list),
                    DrawCmd::Sprites { instances, .. } => bytemuck::cast_slice(instances),
                };
                self.ctx
                    .device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("instances"),
                        contents,
                        usage: wgpu::BufferUsages::VERTEX,
                    })
            })
            .collect();

        let mut enc = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });
        {
            let mut pass = enc.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("frame pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.1,
                            g: 0.1,
                            b: 0.1,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_bind_group(0, &self.screen_bind, &[]);
            for (cmd, buf) in self.cmds.iter().zip(&buffers) {
                match cmd {
                    DrawCmd::Rects(list) => {
                        if list.is_empty() {
                            continue;
                        }
                        pass.set_pipeline(&self.rect_pipeline);
                        pass.set_vertex_buffer(0, buf.slice(..));
                        pass.draw(0..6, 0..list.len() as u32);
                    }
                    DrawCmd::Sprites { texture, instances } => {
                        pass.set_pipeline(&self.sprite_pipeline);
                        pass.set_bind_group(1, texture.bind_group(), &[]);
                        pass.set_vertex_buffer(0, buf.slice(..));
                        pass.draw(0..6, 0..instances.len() as u32);
                    }
                }
            }
        }
        self.ctx.queue.submit(std::iter::once(enc.finish()));
        output.present();
        Ok(())
    }
}

fn make_pipeline(
    device: &wgpu::Device,
    src: &'static str,
    label: &'static str,
    bind_layouts: &[&wgpu::BindGroupLayout],
    v_layout: wgpu::VertexBufferLayout<'static>,
    surface_fmt: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(src.into()),
    });

    let pipe_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: bind_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipe_layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: "vs_main",
            buffers: &[v_layout],
        },
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_fmt,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use race_core::render::DrawList;
use resources::{FrameBuffers, ScreenUniform};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub pipeline: RenderPipeline,
    pub screen_bind_group: BindGroup,
    pub buffers: FrameBuffers,
}

impl Renderer {
    /// `screen_width` x `screen_height` is the logical pixel space the
    /// draw list is expressed in; it is stretched over the canvas.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        screen_width: u32,
        screen_height: u32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let buffers = resources::create_buffers(
            &ctx.device,
            ScreenUniform::new(screen_width, screen_height),
        );

        let screen_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Screen Bind Group"),
            layout: &pipes.screen_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.screen.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            screen_bind_group,
            buffers,
        })
    }

    /// Canvas backing size changed
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, list: &DrawList) -> Result<(), String> {
        draw::draw_frame(self, list)
    }
}

use super::resources::ensure_capacity;
use super::Renderer;
use crate::mesh::tessellate;
use race_core::render::DrawList;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, list: &DrawList) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one renders to the fresh surface
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let vertices = tessellate(list);
    ensure_capacity(&renderer.device, &mut renderer.buffers, vertices.len());
    if !vertices.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.vertices, 0, bytemuck::cast_slice(&vertices));
    }

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Wire Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if !vertices.is_empty() {
            pass.set_pipeline(&renderer.pipeline);
            pass.set_bind_group(0, &renderer.screen_bind_group, &[]);
            pass.set_vertex_buffer(0, renderer.buffers.vertices.slice(..));
            pass.draw(0..vertices.len() as u32, 0..1);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

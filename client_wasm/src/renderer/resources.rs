use crate::mesh::Vertex;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Logical screen size (matches shader `Screen`)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenUniform {
    pub size: [f32; 2],
    _padding: [f32; 2],
}

impl ScreenUniform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

pub struct FrameBuffers {
    pub screen: Buffer,
    pub vertices: Buffer,
    /// Vertex capacity of `vertices`
    pub capacity: usize,
}

const INITIAL_VERTEX_CAPACITY: usize = 4096;

pub fn create_buffers(device: &Device, screen: ScreenUniform) -> FrameBuffers {
    let screen = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Screen Buffer"),
        contents: bytemuck::cast_slice(&[screen]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    FrameBuffers {
        screen,
        vertices: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
        capacity: INITIAL_VERTEX_CAPACITY,
    }
}

/// Grow the vertex buffer so it holds at least `count` vertices
pub fn ensure_capacity(device: &Device, buffers: &mut FrameBuffers, count: usize) {
    if count <= buffers.capacity {
        return;
    }
    let capacity = count.next_power_of_two();
    log::debug!("Growing vertex buffer {} -> {}", buffers.capacity, capacity);
    buffers.vertices = create_vertex_buffer(device, capacity);
    buffers.capacity = capacity;
}

fn create_vertex_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Wire Vertex Buffer"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

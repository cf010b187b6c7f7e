use cgmath::Vector2;
use physics::{Body, Registry};
use std::mem;

const INITIAL_CIRCLE_CAPACITY: usize = 64;

#[repr(C)]
#[derive(Copy, Clone)]
struct Uniforms {
    window_size: Vector2<f32>,
    _padding: [u32; 2],
}
unsafe impl bytemuck::Pod for Uniforms {}
unsafe impl bytemuck::Zeroable for Uniforms {}

/// Per-instance vertex data: one filled circle in window pixels.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
struct Circle {
    center: [f32; 2],
    radius: f32,
}
unsafe impl bytemuck::Pod for Circle {}
unsafe impl bytemuck::Zeroable for Circle {}
impl From<&Body> for Circle {
    fn from(body: &Body) -> Self {
        Circle {
            center: [body.pos.x as f32, body.pos.y as f32],
            radius: body.radius as f32,
        }
    }
}
impl Circle {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Circle>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub struct Parameters {
    pub texture_format: wgpu::TextureFormat,
    pub present_mode: wgpu::PresentMode,
}

pub struct Graphics {
    parameters: Parameters,
    queue: wgpu::Queue,
    device: wgpu::Device,
    surface: wgpu::Surface,
    circle_buffer: wgpu::Buffer,
    circle_capacity: usize,
    uniforms_buffer: wgpu::Buffer,
    uniforms: Uniforms,
    uniforms_are_new: bool,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    window_size: (u32, u32),
}
impl Graphics {
    pub fn initialize(
        parameters: Parameters,
        surface: wgpu::Surface,
        device_and_queue: (wgpu::Device, wgpu::Queue),
        size: (u32, u32),
    ) -> Self {
        let (device, queue) = device_and_queue;

        let uniforms = Uniforms {
            window_size: Vector2::new(size.0 as f32, size.1 as f32),
            _padding: [0; 2],
        };
        configure_surface(&parameters, &device, &surface, size);

        let circle_buffer = make_circle_buffer(&device, INITIAL_CIRCLE_CAPACITY);
        let uniforms_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniforms buffer"),
            size: mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = make_bind_group_layout(&device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms_buffer.as_entire_binding(),
            }],
        });
        let pipeline = make_pipeline(&parameters, &device, &bind_group_layout);

        Self {
            parameters,
            queue,
            device,
            surface,
            circle_buffer,
            circle_capacity: INITIAL_CIRCLE_CAPACITY,
            uniforms_buffer,
            uniforms,
            uniforms_are_new: true,
            bind_group,
            pipeline,
            window_size: size,
        }
    }
    pub fn resize(&mut self, (w, h): (u32, u32)) {
        if w == 0 || h == 0 {
            // Minimized; the surface cannot be configured with a zero extent.
            return;
        }
        self.window_size = (w, h);
        self.uniforms.window_size = Vector2::new(w as f32, h as f32);
        self.uniforms_are_new = true;
        configure_surface(
            &self.parameters,
            &self.device,
            &self.surface,
            self.window_size,
        );
    }
    /// Draws every body of `registry` as a filled circle, in registry order.
    pub fn render(&mut self, registry: &Registry) -> Result<(), wgpu::SurfaceError> {
        // Copy state to GPU
        let circles: Vec<Circle> = registry.iter().map(Circle::from).collect();
        if circles.len() > self.circle_capacity {
            self.circle_capacity = circles.len().next_power_of_two();
            log::debug!("Growing circle buffer to {}", self.circle_capacity);
            self.circle_buffer = make_circle_buffer(&self.device, self.circle_capacity);
        }
        if !circles.is_empty() {
            self.queue
                .write_buffer(&self.circle_buffer, 0, bytemuck::cast_slice(&circles));
        }
        if self.uniforms_are_new {
            self.queue.write_buffer(
                &self.uniforms_buffer,
                0,
                bytemuck::cast_slice(&[self.uniforms]),
            );
            self.uniforms_are_new = false;
        }

        // Render
        let surface_texture = self.surface.get_current_texture().or_else(|error| {
            log::debug!("retrying `wgpu::Surface::get_current_texture` once after: {error:?}");
            configure_surface(
                &self.parameters,
                &self.device,
                &self.surface,
                self.window_size,
            );
            self.surface.get_current_texture()
        })?;
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Command encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: true,
                    },
                })],
                depth_stencil_attachment: None,
            });
            if !circles.is_empty() {
                render_pass.set_pipeline(&self.pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.circle_buffer.slice(..));
                render_pass.draw(0..4, 0..circles.len() as u32);
            }
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}

fn configure_surface(
    parameters: &Parameters,
    device: &wgpu::Device,
    surface: &wgpu::Surface,
    (width, height): (u32, u32),
) {
    surface.configure(
        device,
        &wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: parameters.texture_format,
            width,
            height,
            present_mode: parameters.present_mode,
            alpha_mode: wgpu::CompositeAlphaMode::Opaque,
        },
    );
}

fn make_circle_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Circle buffer"),
        size: (capacity * mem::size_of::<Circle>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn make_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Uniforms layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None, // Only applicable to sampled textures
        }],
    })
}

fn make_pipeline(
    parameters: &Parameters,
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Pipeline layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    let module = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Render pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: "vs_main",
            buffers: &[Circle::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: "fs_main",
            targets: &[Some(wgpu::ColorTargetState {
                format: parameters.texture_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        // Each instance is a quad of 4 points built in the vertex shader
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    #[test]
    fn circles_follow_registry_order() {
        let registry: Registry = [
            Body::new(Vector2::new(10.0, 20.0), Vector2::zero(), 5.0),
            Body::new(Vector2::new(30.0, 40.0), Vector2::zero(), 12.5),
        ]
        .into_iter()
        .collect();
        let circles: Vec<Circle> = registry.iter().map(Circle::from).collect();
        assert_eq!(
            circles,
            vec![
                Circle {
                    center: [10.0, 20.0],
                    radius: 5.0
                },
                Circle {
                    center: [30.0, 40.0],
                    radius: 12.5
                },
            ]
        );
    }

    #[test]
    fn circle_layout_matches_the_shader_inputs() {
        assert_eq!(mem::size_of::<Circle>(), 12);
        assert_eq!(Circle::ATTRIBUTES[1].offset, 8);
        assert_eq!(mem::size_of::<Uniforms>(), 16);
    }
}

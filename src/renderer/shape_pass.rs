use std::mem::size_of;

use bytemuck::{bytes_of, cast_slice, Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::{entity::Scene, geometry::ShapeForm};

use super::render_target::DEPTH_TEXTURE_FORMAT;

#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
struct ShapeUniforms {
    mvp_mat: Mat4,
    model_mat: Mat4,
}

#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
struct LightUniforms {
    point_position: Vec4,
    point_color: Vec4,
    ambient_color: Vec4,
}

impl LightUniforms {
    fn new(scene: &Scene) -> Self {
        Self {
            point_position: (scene.lights.point_position, 1.0).into(),
            point_color: (scene.lights.point_color, 1.0).into(),
            ambient_color: (scene.lights.ambient_color, 1.0).into(),
        }
    }
}

struct FormBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
}

impl FormBuffers {
    fn new(device: &wgpu::Device, form: ShapeForm) -> Self {
        let vertices = form.vertices();
        let indices: Vec<u16> = form.edges().into_iter().flatten().collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Vertex Buffer"),
            contents: cast_slice(vertices.as_slice()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Index Buffer"),
            contents: cast_slice(indices.as_slice()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            num_indices: indices.len() as _,
        }
    }
}

pub struct ShapeRenderer {
    shape_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    render_pipeline: wgpu::RenderPipeline,
    form_buffers: [FormBuffers; 3],
    forms: Vec<ShapeForm>,
}

impl ShapeRenderer {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat, scene: &Scene) -> Self {
        let shape_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Shape Matrix Buffer"),
            size: (size_of::<ShapeUniforms>() * scene.shapes.len()) as _,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // One material and one light rig for all shapes, fixed at startup.
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Light Buffer"),
            contents: bytes_of(&LightUniforms::new(scene)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: None,
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(size_of::<ShapeUniforms>() as _),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(size_of::<LightUniforms>() as _),
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: None,
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: shape_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: light_buffer.as_entire_binding(),
                },
            ],
        });

        let shader_module = device.create_shader_module(&wgpu::include_wgsl!("shape.wgsl"));

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: None,
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shape Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: size_of::<Vec3>() as _,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: "fs_main",
                targets: &[wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                }],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_TEXTURE_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let form_buffers = [
            FormBuffers::new(device, ShapeForm::Tetrahedron),
            FormBuffers::new(device, ShapeForm::Octahedron),
            FormBuffers::new(device, ShapeForm::Icosahedron),
        ];

        Self {
            shape_buffer,
            bind_group,
            render_pipeline,
            form_buffers,
            forms: scene.shapes.iter().map(|shape| shape.form).collect(),
        }
    }

    pub fn update(&self, queue: &wgpu::Queue, scene: &Scene) {
        let vp_mat = scene.camera.projection_matrix() * scene.camera.view_matrix();

        let uniforms: Vec<ShapeUniforms> = scene
            .shapes
            .iter()
            .map(|shape| {
                let model_mat = shape.model_matrix();
                ShapeUniforms {
                    mvp_mat: vp_mat * model_mat,
                    model_mat,
                }
            })
            .collect();

        queue.write_buffer(&self.shape_buffer, 0, cast_slice(uniforms.as_slice()));
    }

    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);

        for (i, form) in self.forms.iter().enumerate() {
            let buffers = &self.form_buffers[*form as usize];
            render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
            render_pass.set_index_buffer(buffers.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            render_pass.draw_indexed(0..buffers.num_indices, 0, (i as u32)..(i as u32 + 1));
        }
    }
}

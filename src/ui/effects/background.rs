//! Drawer backdrop shader
//!
//! Renders the drawer's radial gradient with WGPU: a green core near the
//! user header washing out to translucent white at the panel's far edge,
//! with gradient noise dithering to keep banding out of the falloff.

use bytemuck::{Pod, Zeroable};
use iced::wgpu;
use iced::widget::shader::{self, Viewport};
use iced::{Rectangle, mouse};

/// Uniform data passed to the backdrop shader
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct BackdropUniforms {
    /// Viewport resolution (width, height)
    pub resolution: [f32; 2],
    /// Gradient center in logical pixels, top-left origin
    pub center: [f32; 2],
    /// Gradient radius in logical pixels
    pub radius: f32,
    /// Overall opacity
    pub opacity: f32,
    /// Alignment padding before the vec4 colors
    pub _pad: [f32; 2],
    /// Core color (RGB + alpha)
    pub color_inner: [f32; 4],
    /// Midpoint color (RGB + alpha)
    pub color_mid: [f32; 4],
    /// Edge color (RGB + alpha)
    pub color_outer: [f32; 4],
}

impl Default for BackdropUniforms {
    fn default() -> Self {
        Self {
            resolution: [280.0, 720.0],
            center: [145.0, 100.0],
            radius: 650.0,
            opacity: 1.0,
            _pad: [0.0, 0.0],
            color_inner: [0.18, 0.62, 0.36, 1.0],
            color_mid: [1.0, 1.0, 1.0, 0.6],
            color_outer: [1.0, 1.0, 1.0, 0.4],
        }
    }
}

/// WGSL shader source for the radial gradient
const BACKDROP_SHADER: &str = r#"
struct Uniforms {
    resolution: vec2f,
    center: vec2f,
    radius: f32,
    opacity: f32,
    _pad: vec2f,
    color_inner: vec4f,
    color_mid: vec4f,
    color_outer: vec4f,
}

@group(0) @binding(0) var<uniform> uniforms: Uniforms;

struct VertexOut {
    @builtin(position) position: vec4f,
    @location(0) uv: vec2f,
}

// Vertex shader: generates a fullscreen triangle
@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOut {
    let uv = vec2f(
        f32((vertex_index << 1) & 2),
        f32(vertex_index & 2)
    );
    let position = vec4f(uv * 2.0 - 1.0, 0.0, 1.0);
    return VertexOut(position, uv);
}

const INV_255: f32 = 1.0 / 255.0;
const HALF_INV_255: f32 = 0.5 / 255.0;
const GRADIENT_NOISE_A: f32 = 52.9829189;
const GRADIENT_NOISE_B: vec2f = vec2f(0.06711056, 0.00583715);

// Gradient noise for dithering (Jorge Jimenez's presentation)
// http://www.iryoku.com/next-generation-post-processing-in-call-of-duty-advanced-warfare
fn gradient_noise(uv: vec2f) -> f32 {
    return fract(GRADIENT_NOISE_A * fract(dot(uv, GRADIENT_NOISE_B)));
}

// Cubic Hermite easing for the radial falloff
fn hermite(t: f32) -> f32 {
    return t * t * (3.0 - 2.0 * t);
}

// Two-segment gradient: inner -> mid over [0, 0.5], mid -> outer over [0.5, 1]
fn radial_color(t: f32) -> vec4f {
    let eased = hermite(clamp(t, 0.0, 1.0));
    let lower = mix(uniforms.color_inner, uniforms.color_mid, eased * 2.0);
    let upper = mix(uniforms.color_mid, uniforms.color_outer, eased * 2.0 - 1.0);
    return select(lower, upper, eased > 0.5);
}

@fragment
fn fs_main(in: VertexOut) -> @location(0) vec4f {
    // uv has a bottom-left origin while center is given top-left
    let pixel = vec2f(in.uv.x, 1.0 - in.uv.y) * uniforms.resolution;
    let t = distance(pixel, uniforms.center) / uniforms.radius;

    var color = radial_color(t);

    // Dithering keeps the wide falloff free of banding
    let dither = INV_255 * gradient_noise(in.position.xy) - HALF_INV_255;
    color += vec4f(dither, dither, dither, 0.0);

    return vec4f(color.rgb, color.a * uniforms.opacity);
}
"#;

/// WGPU pipeline for the backdrop shader - implements iced's Pipeline trait
pub struct DrawerBackdropPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniforms: BackdropUniforms,
}

impl shader::Pipeline for DrawerBackdropPipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Backdrop Shader"),
            source: wgpu::ShaderSource::Wgsl(std::borrow::Cow::Borrowed(BACKDROP_SHADER)),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Backdrop Uniform Buffer"),
            size: std::mem::size_of::<BackdropUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Backdrop Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Backdrop Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Backdrop Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Backdrop Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            uniforms: BackdropUniforms::default(),
        }
    }
}

impl DrawerBackdropPipeline {
    fn update(&mut self, queue: &wgpu::Queue, uniforms: BackdropUniforms) {
        self.uniforms = uniforms;
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.uniforms));
    }
}

/// Shader primitive for backdrop rendering
#[derive(Debug, Clone)]
pub struct BackdropPrimitive {
    uniforms: BackdropUniforms,
}

impl BackdropPrimitive {
    pub fn new(uniforms: BackdropUniforms) -> Self {
        Self { uniforms }
    }
}

impl shader::Primitive for BackdropPrimitive {
    type Pipeline = DrawerBackdropPipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        _viewport: &Viewport,
    ) {
        let mut uniforms = self.uniforms;
        uniforms.resolution = [bounds.width, bounds.height];
        pipeline.update(queue, uniforms);
    }

    fn draw(&self, pipeline: &Self::Pipeline, render_pass: &mut wgpu::RenderPass<'_>) -> bool {
        render_pass.set_pipeline(&pipeline.pipeline);
        render_pass.set_bind_group(0, &pipeline.bind_group, &[]);
        render_pass.draw(0..3, 0..1);
        true
    }
}

/// State for backdrop shader interaction
#[derive(Debug, Default)]
pub struct BackdropState;

/// Radial gradient backdrop program
#[derive(Debug, Clone)]
pub struct RadialGradientProgram {
    uniforms: BackdropUniforms,
}

impl RadialGradientProgram {
    pub fn new() -> Self {
        Self {
            uniforms: BackdropUniforms::default(),
        }
    }

    pub fn with_colors(mut self, inner: [f32; 4], mid: [f32; 4], outer: [f32; 4]) -> Self {
        self.uniforms.color_inner = inner;
        self.uniforms.color_mid = mid;
        self.uniforms.color_outer = outer;
        self
    }

    pub fn with_center(mut self, center: [f32; 2]) -> Self {
        self.uniforms.center = center;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.uniforms.radius = radius.max(1.0);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.uniforms.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

impl Default for RadialGradientProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> shader::Program<Message> for RadialGradientProgram {
    type State = BackdropState;
    type Primitive = BackdropPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        _bounds: Rectangle,
    ) -> Self::Primitive {
        BackdropPrimitive::new(self.uniforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniforms_match_wgsl_layout() {
        // Three vec4 colors at offset 32 after the scalar block and padding
        assert_eq!(std::mem::size_of::<BackdropUniforms>(), 80);
    }

    #[test]
    fn builder_clamps_inputs() {
        let program = RadialGradientProgram::new()
            .with_opacity(1.7)
            .with_radius(-3.0);
        assert_eq!(program.uniforms.opacity, 1.0);
        assert_eq!(program.uniforms.radius, 1.0);
    }
}

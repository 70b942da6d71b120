use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation, WebGlVertexArrayObject};
use crate::math::{Mat4, Vec3};
use crate::particles::FLOATS_PER_PARTICLE;
use super::webgl::WebGLContext;
use super::shaders::{POINT_FRAGMENT_SHADER, POINT_VERTEX_SHADER};

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

struct PointUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    point_scale: Option<WebGlUniformLocation>,
    opacity: Option<WebGlUniformLocation>,
}

/// Draws one fixed-capacity particle field as point sprites
pub struct PointPipeline {
    ctx: WebGLContext,
    program: WebGlProgram,
    uniforms: PointUniforms,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    /// Capacity in floats
    capacity: usize,
    width: i32,
    height: i32,
    fov_degrees: f32,
    /// `None` clears to transparent
    background: Option<Vec3>,
}

impl PointPipeline {
    pub fn new(
        gl: WebGl2RenderingContext,
        max_points: usize,
        fov_degrees: f32,
        background: Option<Vec3>,
    ) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);
        let program = ctx.link_program(POINT_VERTEX_SHADER, POINT_FRAGMENT_SHADER)?;

        let uniforms = PointUniforms {
            model: ctx.uniform(&program, "u_model"),
            view: ctx.uniform(&program, "u_view"),
            projection: ctx.uniform(&program, "u_projection"),
            point_scale: ctx.uniform(&program, "u_point_scale"),
            opacity: ctx.uniform(&program, "u_opacity"),
        };

        let capacity = max_points * FLOATS_PER_PARTICLE;
        let buffer = ctx.dynamic_buffer(capacity)?;
        let vao = ctx.create_vao()?;
        Self::bind_layout(&ctx.gl, &vao, &buffer);

        Ok(Self {
            ctx,
            program,
            uniforms,
            vao,
            buffer,
            capacity,
            width: 1,
            height: 1,
            fov_degrees,
            background,
        })
    }

    fn bind_layout(gl: &WebGl2RenderingContext, vao: &WebGlVertexArrayObject, buffer: &WebGlBuffer) {
        let stride = (FLOATS_PER_PARTICLE * 4) as i32;
        // (location, components, byte offset)
        let attributes = [(0, 3, 0), (1, 1, 12), (2, 1, 16), (3, 3, 20)];

        gl.bind_vertex_array(Some(vao));
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(buffer));
        for (location, size, offset) in attributes {
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_with_i32(location, size, WebGl2RenderingContext::FLOAT, false, stride, offset);
        }
        gl.bind_vertex_array(None);
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.ctx.viewport(self.width, self.height);
    }

    pub fn projection(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height as f32;
        Mat4::perspective(self.fov_degrees.to_radians(), aspect, NEAR, FAR)
    }

    /// Clear and draw a frame of particle data
    ///
    /// Data past the allocated capacity is ignored.
    pub fn draw(&self, data: &[f32], model: &Mat4, view: &Mat4, opacity: f32) {
        let gl = &self.ctx.gl;

        match self.background {
            Some(c) => self.ctx.clear(c.x, c.y, c.z, 1.0),
            None => self.ctx.clear(0.0, 0.0, 0.0, 0.0),
        }

        let len = data.len().min(self.capacity);
        let len = len - len % FLOATS_PER_PARTICLE;
        if len == 0 || opacity <= 0.0 {
            return;
        }
        self.ctx.write_buffer(&self.buffer, &data[..len]);

        gl.use_program(Some(&self.program));
        self.ctx.additive_points();

        self.ctx.uniform_matrix4fv(self.uniforms.model.as_ref(), &model.to_array());
        self.ctx.uniform_matrix4fv(self.uniforms.view.as_ref(), &view.to_array());
        self.ctx.uniform_matrix4fv(self.uniforms.projection.as_ref(), &self.projection().to_array());
        self.ctx.uniform_1f(self.uniforms.point_scale.as_ref(), self.height as f32 * 0.5);
        self.ctx.uniform_1f(self.uniforms.opacity.as_ref(), opacity.min(1.0));

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(WebGl2RenderingContext::POINTS, 0, (len / FLOATS_PER_PARTICLE) as i32);
        gl.bind_vertex_array(None);
    }
}

// SPDX-License-Identifier: MIT

use crate::error::RenderError;
use crate::gl::Gl;
use crate::renderer::Renderer;
use glam::Vec2;
use std::mem::size_of;
use web_sys::WebGlBuffer;

/// Components per position attribute (x, y).
const POSITION_FLOATS: i32 = 2;

/// A GPU buffer holding 2D clip-space positions, uploaded once with `STATIC_DRAW` and immutable
/// afterwards.
pub struct PositionBuffer {
    buffer: WebGlBuffer,
    length: u32,
}

impl PositionBuffer {
    /// Creates the buffer and performs its single upload.
    pub fn new(renderer: &Renderer, positions: &[Vec2]) -> Result<Self, RenderError> {
        let gl = &renderer.gl;
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| RenderError::Runtime("create_buffer returned null".into()))?;

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));

        // SAFETY: the view doesn't outlive positions and no allocation happens before
        // buffer_data copies it to the GPU.
        unsafe {
            let view = js_sys::Float32Array::view(bytemuck::cast_slice(positions));
            gl.buffer_data_with_array_buffer_view(Gl::ARRAY_BUFFER, &view, Gl::STATIC_DRAW);
        }

        // Unbind (not required in release mode).
        #[cfg(debug_assertions)]
        gl.bind_buffer(Gl::ARRAY_BUFFER, None);

        Ok(Self {
            buffer,
            length: positions.len() as u32,
        })
    }

    /// The number of positions uploaded.
    pub fn len(&self) -> u32 {
        self.length
    }

    /// Returns true if no positions were uploaded.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Binds the buffer to a resolved attribute location for drawing: 2 × f32 per vertex, not
    /// normalized, tightly packed, starting at offset 0.
    #[must_use]
    pub fn bind<'a>(&'a self, renderer: &'a Renderer, location: u32) -> PositionBufferBinding<'a> {
        PositionBufferBinding::new(&renderer.gl, self, location)
    }
}

/// A bound [`PositionBuffer`] that can issue its draw call.
pub struct PositionBufferBinding<'a> {
    gl: &'a Gl,
    length: i32,
}

impl<'a> PositionBufferBinding<'a> {
    fn new(gl: &'a Gl, buffer: &PositionBuffer, location: u32) -> Self {
        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer.buffer));
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(
            location,
            POSITION_FLOATS,
            Gl::FLOAT,
            false,
            size_of::<Vec2>() as i32,
            0,
        );
        Self {
            gl,
            length: buffer.length as i32,
        }
    }

    /// Draws the whole buffer as non-indexed triangles.
    pub fn draw(&self) {
        self.gl.draw_arrays(Gl::TRIANGLES, 0, self.length);
    }
}

impl<'a> Drop for PositionBufferBinding<'a> {
    fn drop(&mut self) {
        // Unbind (not required in release mode).
        #[cfg(debug_assertions)]
        self.gl.bind_buffer(Gl::ARRAY_BUFFER, None);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use std::mem::size_of;

    #[test]
    fn positions_are_tightly_packed() {
        // The vertex_attrib_pointer stride below depends on Vec2 being two packed f32s,
        // which glam's scalar-math feature guarantees.
        assert_eq!(size_of::<Vec2>(), 2 * size_of::<f32>());
    }
}

// SPDX-License-Identifier: MIT

use crate::error::RenderError;
use crate::gl::{Gl, GL_NAME};
use glam::{uvec2, UVec2};
use std::cell::Cell;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// The background every surface is cleared to, RGBA 0.0-1.0.
pub const BACKGROUND_COLOR: [f32; 4] = [0.08, 0.08, 0.08, 1.0];

/// A WebGL2 context bound to one canvas. Owns every GPU resource created through it; released
/// implicitly at page teardown.
pub struct Renderer {
    /// HTML Canvas.
    canvas: HtmlCanvasElement,
    cached_canvas_size: Cell<Option<UVec2>>,
    /// WebGL2 context.
    pub(crate) gl: Gl,
}

impl Renderer {
    /// Acquires a WebGL2 context for the canvas element with the given id and clears its color
    /// and depth buffers to [`BACKGROUND_COLOR`].
    pub fn new(canvas_id: &str) -> Result<Self, RenderError> {
        let canvas = js_hooks::canvas(canvas_id)
            .ok_or_else(|| RenderError::SurfaceNotFound(canvas_id.to_owned()))?;

        // See: https://developer.mozilla.org/en-US/docs/Web/API/HTMLCanvasElement/getContext
        let gl = canvas
            .get_context(GL_NAME)
            .map_err(|e| RenderError::from_js(&e))?
            .ok_or(RenderError::ContextUnsupported)?
            .dyn_into::<Gl>()
            .map_err(|_| RenderError::ContextUnsupported)?;

        let [r, g, b, a] = BACKGROUND_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        Ok(Self {
            canvas,
            cached_canvas_size: Cell::new(None),
            gl,
        })
    }

    /// Size of the canvas backing store in pixels.
    pub fn canvas_size(&self) -> UVec2 {
        let cached_size = self.cached_canvas_size.get();
        if let Some(size) = cached_size {
            size
        } else {
            let size = uvec2(self.canvas.width(), self.canvas.height());
            self.cached_canvas_size.set(Some(size));
            size
        }
    }

    /// Resizes the canvas backing store to its CSS layout size so one buffer pixel maps to one
    /// display pixel.
    pub fn fit_to_display(&self) {
        self.canvas.set_width(self.canvas.client_width().max(0) as u32);
        self.canvas.set_height(self.canvas.client_height().max(0) as u32);
        self.cached_canvas_size.set(None);
    }

    /// Clears the color and depth buffers to [`BACKGROUND_COLOR`].
    pub fn clear(&self) {
        self.gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    /// Tells the rasterizer which pixels of the canvas to cover.
    pub fn set_viewport(&self, viewport: UVec2) {
        let size = viewport.as_ivec2();
        self.gl.viewport(0, 0, size.x, size.y);
    }

    /// Reads back one RGBA pixel from the framebuffer. `x` and `y` are window coordinates with
    /// the origin at the bottom left. Must be called in the same task as the draw since the
    /// drawing buffer isn't preserved across frames.
    pub fn read_pixel(&self, x: u32, y: u32) -> Result<[u8; 4], RenderError> {
        let mut pixel = [0u8; 4];
        self.gl
            .read_pixels_with_opt_u8_array(
                x as i32,
                y as i32,
                1,
                1,
                Gl::RGBA,
                Gl::UNSIGNED_BYTE,
                Some(&mut pixel),
            )
            .map_err(|e| RenderError::from_js(&e))?;
        Ok(pixel)
    }
}

// SPDX-License-Identifier: MIT

#![warn(missing_docs)]
#![crate_name = "renderer"]

//! # Renderer
//!
//! [`renderer`][`crate`] is a minimal, explicit rasterization pipeline over
//! [WebGL2](https://rustwasm.github.io/wasm-bindgen/api/web_sys/struct.WebGl2RenderingContext.html):
//! vertex buffer upload, shader stage compilation, program link, attribute resolution, and a
//! single non-indexed triangle draw. Every setup step is a hard precondition for the next and
//! every failure is surfaced as a typed [`RenderError`] instead of a silent crash.

// Gl primitives should not escape this crate.
mod gl;

mod buffer;
mod error;
mod renderer;
mod shader;

pub use buffer::*;
pub use error::*;
pub use renderer::*;
pub use shader::*;

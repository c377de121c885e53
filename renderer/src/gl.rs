// SPDX-License-Identifier: MIT

//! Aliases WebGl2RenderingContext to Gl so the rest of the crate reads the same as it would
//! against any GL-shaped api. Only WebGL2 is supported.

pub(crate) type Gl = web_sys::WebGl2RenderingContext;

/// Name of context for the get_context call.
pub(crate) const GL_NAME: &str = "webgl2";

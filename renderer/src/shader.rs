// SPDX-License-Identifier: MIT

use crate::error::RenderError;
use crate::gl::Gl;
use crate::renderer::Renderer;
use std::fmt;
use web_sys::{WebGlProgram, WebGlShader};

/// The two programmable stages of the pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StageKind {
    /// Outputs clip-space positions.
    Vertex,
    /// Outputs a color for the pixel being rasterized.
    Fragment,
}

impl StageKind {
    const fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => Gl::VERTEX_SHADER,
            Self::Fragment => Gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        })
    }
}

/// A linked glsl shader program. Both stages compiled and the link succeeded, so it can be
/// bound for drawing.
pub struct Shader {
    program: WebGlProgram,
}

impl Shader {
    /// Compiles both stages from source and links them. Fails with the verbatim compiler or
    /// linker diagnostic.
    pub fn new(renderer: &Renderer, vertex: &str, fragment: &str) -> Result<Self, RenderError> {
        let gl = &renderer.gl;
        let vert_shader = compile_stage(gl, StageKind::Vertex, vertex)?;
        let frag_shader = compile_stage(gl, StageKind::Fragment, fragment)?;
        let program = link_program(gl, &vert_shader, &frag_shader)?;
        Ok(Self { program })
    }

    /// Resolves a named per-vertex input to its location in the linked program.
    pub fn attribute(
        &self,
        renderer: &Renderer,
        name: &'static str,
    ) -> Result<u32, RenderError> {
        let location = renderer.gl.get_attrib_location(&self.program, name);
        if location < 0 {
            Err(RenderError::AttributeNotFound(name))
        } else {
            Ok(location as u32)
        }
    }

    /// Binds the shader for handling subsequent draw calls.
    #[must_use]
    pub fn bind<'a>(&'a self, renderer: &'a Renderer) -> ShaderBinding<'a> {
        ShaderBinding::new(&renderer.gl, self)
    }
}

/// A bound [`Shader`] that you can draw with.
pub struct ShaderBinding<'a> {
    gl: &'a Gl,
}

impl<'a> ShaderBinding<'a> {
    fn new(gl: &'a Gl, shader: &Shader) -> Self {
        gl.use_program(Some(&shader.program));
        Self { gl }
    }
}

impl<'a> Drop for ShaderBinding<'a> {
    fn drop(&mut self) {
        // Unbind (not required in release mode).
        #[cfg(debug_assertions)]
        self.gl.use_program(None);
        #[cfg(not(debug_assertions))]
        let _ = self.gl;
    }
}

/// Compiles one stage of a shader program, failing with its info log if the compile status
/// comes back false.
fn compile_stage(gl: &Gl, kind: StageKind, source: &str) -> Result<WebGlShader, RenderError> {
    let shader = gl
        .create_shader(kind.gl_enum())
        .ok_or_else(|| RenderError::Runtime("create_shader returned null".into()))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        Err(RenderError::CompileFailed {
            kind,
            log: info_log(gl.get_shader_info_log(&shader)),
        })
    }
}

/// Links the two stages to form a shader program.
fn link_program(
    gl: &Gl,
    vert_shader: &WebGlShader,
    frag_shader: &WebGlShader,
) -> Result<WebGlProgram, RenderError> {
    let program = gl
        .create_program()
        .ok_or_else(|| RenderError::Runtime("create_program returned null".into()))?;

    gl.attach_shader(&program, vert_shader);
    gl.attach_shader(&program, frag_shader);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        Err(RenderError::LinkFailed(info_log(
            gl.get_program_info_log(&program),
        )))
    }
}

/// Some drivers pad info logs with trailing nul bytes.
fn info_log(log: Option<String>) -> String {
    let log = log.unwrap_or_default();
    log.trim_end_matches('\u{0}').to_owned()
}

#[cfg(test)]
mod tests {
    use super::{info_log, StageKind};

    #[test]
    fn stage_kind_display() {
        assert_eq!(StageKind::Vertex.to_string(), "vertex");
        assert_eq!(StageKind::Fragment.to_string(), "fragment");
    }

    #[test]
    fn info_log_strips_trailing_nuls() {
        assert_eq!(info_log(Some("bad cast\u{0}\u{0}".into())), "bad cast");
        assert_eq!(info_log(None), "");
    }
}

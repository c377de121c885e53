// SPDX-License-Identifier: MIT

use crate::shader::StageKind;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while setting up and running the pipeline. Every variant is
/// terminal for the current render attempt; nothing is retried.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The canvas element with the given id does not exist in the document.
    #[error("Canvas element \"{0}\" not found")]
    SurfaceNotFound(String),

    /// The platform refused to hand out a WebGL2 context.
    #[error("WebGL2 not supported in this browser")]
    ContextUnsupported,

    /// A shader stage failed to compile. Carries the compiler diagnostic verbatim.
    #[error("Failed to compile {kind} shader: {log}")]
    CompileFailed {
        /// Which stage failed.
        kind: StageKind,
        /// The compiler's info log.
        log: String,
    },

    /// The two stages could not be linked into a program.
    #[error("Failed to link GPU program: {0}")]
    LinkFailed(String),

    /// The named vertex input does not exist in the linked program (misspelled or optimized
    /// out).
    #[error("Failed to get attribute location for {0}")]
    AttributeNotFound(&'static str),

    /// Anything the taxonomy above doesn't cover, e.g. a JavaScript exception.
    #[error("Unexpected runtime error: {0}")]
    Runtime(String),
}

impl RenderError {
    /// Converts a caught JavaScript error into [`RenderError::Runtime`].
    pub fn from_js(error: &JsValue) -> Self {
        Self::Runtime(
            js_hooks::error_message(error).unwrap_or_else(|| format!("{:?}", error)),
        )
    }
}

// SPDX-License-Identifier: MIT

//! Page entry point: runs the clear-only demo and the first-triangle demo once at load time,
//! routing every failure through the error sink.

use glam::{vec2, Vec2};
use js_hooks::console_log;
use renderer::{PositionBuffer, RenderError, Renderer, Shader};

const TRIANGLE_VERTEX_SHADER: &str = include_str!("shaders/triangle.vert");
const TRIANGLE_FRAGMENT_SHADER: &str = include_str!("shaders/triangle.frag");

const CLEAR_CANVAS_ID: &str = "animated-shapes-canvas";
const TRIANGLE_CANVAS_ID: &str = "triangle-canvas";

/// Clip-space corners of the demo triangle: top middle, bottom left, bottom right.
fn triangle_positions() -> [Vec2; 3] {
    [vec2(0.0, 0.5), vec2(-0.5, -0.5), vec2(0.5, -0.5)]
}

fn main() {
    // Required to get stack traces in WASM.
    #[cfg(target_family = "wasm")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    // Shows that the error sink is wired up before anything can fail for real.
    js_hooks::report_error("This is an error message");

    run_demo("clear", clear_demo);
    run_demo("triangle", triangle_demo);
}

/// The top-level error guard: a demo either completes or its failure is forwarded to the error
/// sink. Nothing propagates past here.
fn run_demo(name: &str, demo: fn() -> Result<(), RenderError>) {
    match demo() {
        Ok(()) => console_log!("{} demo done", name),
        Err(e) => js_hooks::report_error(&e.to_string()),
    }
}

/// Acquires a context and clears it to the background color without drawing anything.
fn clear_demo() -> Result<(), RenderError> {
    Renderer::new(CLEAR_CANVAS_ID)?;
    Ok(())
}

/// The manual rasterization pipeline: upload geometry, compile and link both stages, resolve
/// the position attribute, then issue a single non-indexed triangle draw. Each step is a hard
/// precondition for the next.
fn triangle_demo() -> Result<(), RenderError> {
    let renderer = Renderer::new(TRIANGLE_CANVAS_ID)?;

    let buffer = PositionBuffer::new(&renderer, &triangle_positions())?;
    let shader = Shader::new(
        &renderer,
        TRIANGLE_VERTEX_SHADER,
        TRIANGLE_FRAGMENT_SHADER,
    )?;
    let position = shader.attribute(&renderer, "vertexPosition")?;

    renderer.fit_to_display();
    renderer.clear();
    renderer.set_viewport(renderer.canvas_size());

    let _shader = shader.bind(&renderer);
    buffer.bind(&renderer, position).draw();
    Ok(())
}

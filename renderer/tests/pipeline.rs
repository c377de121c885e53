// SPDX-License-Identifier: MIT

//! In-browser pipeline tests. Run with `wasm-pack test --headless --chrome renderer`.

#![cfg(target_arch = "wasm32")]

use glam::vec2;
use renderer::{PositionBuffer, RenderError, Renderer, Shader, StageKind};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const VERTEX: &str = "#version 300 es
precision mediump float;
in vec2 vertexPosition;
void main() {
    gl_Position = vec4(vertexPosition, 0.0, 1.0);
}";

const FRAGMENT: &str = "#version 300 es
precision mediump float;
out vec4 outputColor;
void main() {
    outputColor = vec4(0.294, 0.0, 0.51, 1.0);
}";

/// Adds a canvas with the given id to the document so [`Renderer::new`] can find it.
fn install_canvas(id: &str) {
    let document = js_hooks::document();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_surface_not_found() {
    match Renderer::new("no-such-canvas") {
        Err(RenderError::SurfaceNotFound(id)) => assert_eq!(id, "no-such-canvas"),
        other => panic!("expected SurfaceNotFound, got {:?}", other.err()),
    }
}

#[wasm_bindgen_test]
fn broken_fragment_source_fails_compile_with_diagnostic() {
    install_canvas("compile-error-canvas");
    let renderer = Renderer::new("compile-error-canvas").unwrap();

    let broken = "#version 300 es\nthis is not glsl";
    match Shader::new(&renderer, VERTEX, broken) {
        Err(RenderError::CompileFailed { kind, log }) => {
            assert_eq!(kind, StageKind::Fragment);
            assert!(!log.is_empty());
        }
        other => panic!("expected CompileFailed, got {:?}", other.err()),
    }
}

/// 8-bit framebuffer values can land on either side of a rounding boundary.
fn assert_pixel_near(actual: [u8; 4], expected: [u8; 4]) {
    for (a, e) in actual.into_iter().zip(expected) {
        assert!(
            (a as i16 - e as i16).abs() <= 1,
            "pixel {:?} not near {:?}",
            actual,
            expected
        );
    }
}

#[wasm_bindgen_test]
fn full_pipeline_draws_one_triangle() {
    install_canvas("pipeline-canvas");
    let renderer = Renderer::new("pipeline-canvas").unwrap();

    let positions = [vec2(0.0, 0.5), vec2(-0.5, -0.5), vec2(0.5, -0.5)];
    let buffer = PositionBuffer::new(&renderer, &positions).unwrap();
    assert_eq!(buffer.len(), 3);

    let shader = Shader::new(&renderer, VERTEX, FRAGMENT).unwrap();
    let position = shader.attribute(&renderer, "vertexPosition").unwrap();

    renderer.fit_to_display();
    renderer.clear();
    renderer.set_viewport(renderer.canvas_size());

    let _shader = shader.bind(&renderer);
    buffer.bind(&renderer, position).draw();

    // The bottom-left corner is outside the triangle, so the clear color
    // (0.08, 0.08, 0.08, 1.0) shows through; the canvas center is inside it and takes the
    // fragment color (0.294, 0.0, 0.51, 1.0).
    let corner = renderer.read_pixel(0, 0).unwrap();
    assert_pixel_near(corner, [20, 20, 20, 255]);

    let size = renderer.canvas_size();
    let center = renderer.read_pixel(size.x / 2, size.y / 2).unwrap();
    assert_pixel_near(center, [75, 0, 130, 255]);
}

#[wasm_bindgen_test]
fn surface_errors_reach_the_error_sink_once() {
    let document = js_hooks::document();
    let error_box = document.create_element("div").unwrap();
    error_box.set_id(js_hooks::ERROR_BOX_ID);
    document.body().unwrap().append_child(&error_box).unwrap();

    if let Err(e) = Renderer::new("vanished-canvas") {
        js_hooks::report_error(&e.to_string());
    } else {
        panic!("expected SurfaceNotFound");
    }

    assert_eq!(error_box.child_element_count(), 1);
    let message = error_box
        .first_element_child()
        .unwrap()
        .text_content()
        .unwrap();
    assert!(message.contains("vanished-canvas"));
}

#[wasm_bindgen_test]
fn unknown_attribute_is_reported_by_name() {
    install_canvas("attribute-canvas");
    let renderer = Renderer::new("attribute-canvas").unwrap();
    let shader = Shader::new(&renderer, VERTEX, FRAGMENT).unwrap();

    match shader.attribute(&renderer, "missingAttr") {
        Err(RenderError::AttributeNotFound(name)) => assert_eq!(name, "missingAttr"),
        other => panic!("expected AttributeNotFound, got {:?}", other.err()),
    }
}

//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use bouncing_particles::{start_with, Simulation, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append(document: &Document, tag: &str, id: &str) -> web_sys::Element {
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn draws_on_a_2d_context() {
    let document = document();
    let canvas = append(&document, "canvas", "draw-test")
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(100);
    canvas.set_height(100);
    let mut context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap();

    let mut sim = Simulation::new().with_surface(Surface::with_size(100.0, 100.0));
    sim.generate_single();
    sim.step(&mut context).unwrap();

    // The disc is centered on (53, 52.5) after one frame
    let pixel = context.get_image_data(53.0, 52.0, 1.0, 1.0).unwrap().data().0;
    assert_eq!(pixel, vec![0x7c, 0xf0, 0xff, 0xff]);
}

#[wasm_bindgen_test]
fn start_mounts_a_swarm_and_follows_triggers() {
    let document = document();
    append(&document, "canvas", "start-canvas");
    append(&document, "button", "start-single");
    append(&document, "button", "start-swarm");

    let demo = start_with("start-canvas", "start-single", "start-swarm").unwrap();
    assert_eq!(demo.particle_count(), 100);

    demo.single();
    assert_eq!(demo.particle_count(), 1);

    demo.resize().unwrap();
    assert_eq!(demo.particle_count(), 1);

    demo.swarm(0);
    assert_eq!(demo.particle_count(), 0);
}

#[wasm_bindgen_test]
fn start_fails_without_canvas() {
    assert!(start_with("missing-canvas", "missing-single", "missing-swarm").is_err());
}

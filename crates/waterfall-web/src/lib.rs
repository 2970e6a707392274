#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use waterfall_core::{RapierWorld, SceneConfig, Simulation};
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod input;
mod keys;
mod overlay;

/// Latest boat/camera state for whatever renders the scene:
/// `[pos.xyz, rot.xyzw, eye.xyz, target.xyz, proximity]`.
#[wasm_bindgen]
pub fn scene_snapshot() -> js_sys::Float32Array {
    js_sys::Float32Array::from(&frame::read_snapshot()[..])
}

/// Column-major view-projection of the chase camera, using the canvas aspect.
#[wasm_bindgen]
pub fn camera_view_projection() -> js_sys::Float32Array {
    js_sys::Float32Array::from(&frame::read_view_projection()[..])
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waterfall-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    events::wire_canvas_resize(&canvas);

    let config = SceneConfig::default();
    let world = RapierWorld::new(&config);
    let mut sim = Simulation::new(config, world)?;

    // The context stays suspended until the first key press unlocks it.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let audio = audio::AudioGraph::build(&audio_ctx, &sim.config().mix)?;
    sim.context_mut().set_loaded(true);

    let input = Rc::new(RefCell::new(input::InputState::default()));
    events::wire_keyboard(input.clone());
    events::wire_pointer(&canvas, input.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        audio,
        input,
        canvas,
        document: document.clone(),
        last_instant: Instant::now(),
        overlay_dismissed: false,
    }));
    events::wire_mute_button(&document, frame_ctx.clone());

    frame::start_loop(frame_ctx);
    Ok(())
}

#![cfg(target_arch = "wasm32")]
use crate::core::{InputDispatcher, SceneConfig, SceneController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod midi;
mod overlay;
mod render;
mod sprites;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("midi-particles starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn midi_handler(
    scene: Rc<RefCell<SceneController>>,
    dispatcher: Rc<RefCell<InputDispatcher>>,
) -> Rc<dyn Fn(&[u8])> {
    Rc::new(move |bytes: &[u8]| {
        let now_ms = js_sys::Date::now();
        let result =
            dispatcher
                .borrow_mut()
                .handle_bytes(bytes, &mut scene.borrow_mut(), now_ms);
        match result {
            Ok(outcome) => log::debug!("[midi] {:?}", outcome),
            Err(e) => log::warn!("[midi] dropped message {:?}: {}", bytes, e),
        }
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Nothing is set up until MIDI access is granted
    let access = match midi::request_access().await {
        Ok(a) => a,
        Err(e) => {
            log::warn!("[midi] {:#}; visualizer stays inert", e);
            return Ok(());
        }
    };

    let canvas = dom::ensure_canvas(&document)?;
    dom::wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(SceneController::new(SceneConfig {
        aspect: canvas.width() as f32 / canvas.height().max(1) as f32,
        // fresh cloud per page load; the fixed default seed is for tests
        seed: rand::random(),
        ..SceneConfig::default()
    })));
    let dispatcher = Rc::new(RefCell::new(InputDispatcher::default()));

    let sprite_queue = sprites::SpriteQueue::default();
    sprites::load_sprites(&sprite_queue);

    let gpu = frame::init_gpu(&canvas).await;
    let stats_panel = overlay::ensure_stats_panel(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        canvas: canvas.clone(),
        gpu,
        sprite_queue,
        stats: Default::default(),
        stats_panel,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    let attached = midi::attach_inputs(&access, midi_handler(scene, dispatcher));
    log::info!("[midi] {} input(s) attached", attached);
    Ok(())
}

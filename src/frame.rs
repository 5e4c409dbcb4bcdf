use crate::core::{FrameStats, SceneController};
use crate::overlay;
use crate::render;
use crate::sprites::SpriteQueue;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneController>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub sprite_queue: SpriteQueue,
    pub stats: FrameStats,
    pub stats_panel: Option<web::Element>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(g) = &mut self.gpu {
            for upload in self.sprite_queue.borrow_mut().drain(..) {
                g.upload_sprite(upload.layer, &upload.pixels);
            }
        }

        let w = self.canvas.width();
        let h = self.canvas.height();
        let now_ms = js_sys::Date::now();

        let particles = {
            let mut scene = self.scene.borrow_mut();
            scene.resize(w, h);
            let particles = scene.particle_count();
            let view = scene.render_frame(now_ms);
            if let Some(g) = &mut self.gpu {
                g.resize_if_needed(w, h);
                if let Err(e) = g.render(&view) {
                    log::error!("render error: {:?}", e);
                }
            }
            particles
        };

        if let Some(report) = self.stats.record(dt.as_secs_f64() * 1000.0) {
            if let Some(el) = &self.stats_panel {
                overlay::update_stats(el, &report, particles);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Render every display refresh until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

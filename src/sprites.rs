use crate::constants::{SPRITE_SIZE, SPRITE_URLS};
use crate::core::sprite::premultiply_alpha;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SpriteUpload {
    pub layer: u32,
    pub pixels: Vec<u8>,
}

/// Decoded sprites waiting for the frame loop to hand them to the GPU.
pub type SpriteQueue = Rc<RefCell<Vec<SpriteUpload>>>;

pub fn load_sprites(queue: &SpriteQueue) {
    for (layer, url) in SPRITE_URLS.iter().enumerate() {
        load_sprite(layer as u32, url, queue.clone());
    }
}

// Failures are logged only; the procedural sprite for the layer stays in place.
fn load_sprite(layer: u32, url: &'static str, queue: SpriteQueue) {
    let img = match web::HtmlImageElement::new() {
        Ok(i) => i,
        Err(e) => {
            log::error!("[sprites] HtmlImageElement error: {:?}", e);
            return;
        }
    };
    let img_loaded = img.clone();
    let onload = Closure::wrap(Box::new(move || match rasterize(&img_loaded) {
        Ok(pixels) => {
            log::info!("[sprites] loaded {} into layer {}", url, layer);
            queue.borrow_mut().push(SpriteUpload { layer, pixels });
        }
        Err(e) => log::error!("[sprites] could not read {}: {:?}", url, e),
    }) as Box<dyn FnMut()>);
    let onerror = Closure::wrap(Box::new(move || {
        log::error!("[sprites] failed to load {}", url);
    }) as Box<dyn FnMut()>);
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(url);
    onload.forget();
    onerror.forget();
}

/// Draw the image scaled to `SPRITE_SIZE` on a scratch canvas and read back
/// premultiplied RGBA8.
fn rasterize(img: &web::HtmlImageElement) -> anyhow::Result<Vec<u8>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(SPRITE_SIZE);
    canvas.set_height(SPRITE_SIZE);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let side = SPRITE_SIZE as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, side, side)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let data = ctx
        .get_image_data(0.0, 0.0, side, side)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let mut pixels = data.data().0;
    premultiply_alpha(&mut pixels);
    Ok(pixels)
}

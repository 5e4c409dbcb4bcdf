use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask the browser for Web MIDI access. Resolves once; an error means the
/// API is missing or the user refused.
pub async fn request_access() -> anyhow::Result<web::MidiAccess> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = window
        .navigator()
        .request_midi_access()
        .map_err(|e| anyhow::anyhow!(format!("Web MIDI unavailable: {:?}", e)))?;
    let access = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("MIDI access refused: {:?}", e)))?;
    access
        .dyn_into::<web::MidiAccess>()
        .map_err(|e| anyhow::anyhow!(format!("unexpected MIDI access object: {:?}", e)))
}

/// Install `handler` as the message callback of every input present now.
/// Returns how many inputs were wired.
pub fn attach_inputs(access: &web::MidiAccess, handler: Rc<dyn Fn(&[u8])>) -> usize {
    let inputs = access.inputs();
    let entries = match js_sys::try_iter(inputs.as_ref()) {
        Ok(Some(it)) => it,
        _ => {
            log::warn!("[midi] input map is not iterable");
            return 0;
        }
    };
    let mut attached = 0;
    // Map iteration yields [id, input] pairs
    for entry in entries {
        let Ok(entry) = entry else { continue };
        let pair: js_sys::Array = entry.unchecked_into();
        let Ok(input) = pair.get(1).dyn_into::<web::MidiInput>() else {
            continue;
        };
        let h = handler.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MidiMessageEvent| {
            h(&message_bytes(&ev));
        }) as Box<dyn FnMut(_)>);
        input.set_onmidimessage(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        log::info!(
            "[midi] listening on {}",
            input.name().unwrap_or_else(|| "unnamed input".to_string())
        );
        attached += 1;
    }
    attached
}

// An event without a payload decodes as empty and is rejected downstream
fn message_bytes(ev: &web::MidiMessageEvent) -> Vec<u8> {
    ev.data().unwrap_or_default()
}

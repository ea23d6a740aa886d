use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// One-shot `setTimeout`, cleared when dropped. Effects hand it to their
/// cleanup so navigating away cancels the pending callback.
pub struct Timeout {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn start(ms: u32, f: impl FnOnce() + 'static) -> Self {
        let mut f = Some(f);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = web_sys::window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms as i32,
            )
            .ok()
        });
        Self {
            id,
            _callback: callback,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id, web_sys::window()) {
            win.clear_timeout_with_handle(id);
        }
    }
}

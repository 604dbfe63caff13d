#![cfg(target_arch = "wasm32")]
use crate::app::App;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod app;
pub mod constants;
pub mod contact;
pub mod core;
pub mod dom;
pub mod hero;
pub mod loader;
pub mod nav;
pub mod portfolio;
pub mod reveal;
pub mod scroll_top;
pub mod timers;
pub mod toast;

type Initializer = fn(&Rc<App>) -> Result<()>;

// Each feature is wired on its own; one failing does not stop the rest.
const INITIALIZERS: &[(&str, Initializer)] = &[
    ("nav", nav::init),
    ("scroll-top", scroll_top::init),
    ("parallax", hero::init_parallax),
    ("fade-in", reveal::init_fade_in),
    ("filter", portfolio::init),
    ("contact", contact::init),
    ("title", hero::init_title),
    ("scroll-reveal", reveal::init_scroll_reveal),
    ("particles", hero::init_particles),
    ("trail", hero::init_mouse_trail),
    ("loader", loader::init),
];

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run_init);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        run_init();
    }
    Ok(())
}

/// Cancel every pending timer and detach every listener.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.teardown();
    }
}

fn run_init() {
    match init() {
        Ok(app) => {
            shutdown();
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Build the controller and run every feature initializer against it.
pub fn init() -> Result<Rc<App>> {
    let app = App::new()?;
    let mut failed = 0;
    for (name, initializer) in INITIALIZERS {
        if let Err(e) = initializer(&app) {
            failed += 1;
            log::error!("[{}] init failed: {:?}", name, e);
        }
    }
    log::info!(
        "initialized {}/{} features, {} listeners",
        INITIALIZERS.len() - failed,
        INITIALIZERS.len(),
        app.listener_count()
    );
    Ok(app)
}

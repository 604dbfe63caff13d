use crate::app::App;
use crate::constants::{CLASS_HIDDEN, CLASS_LOADED, LOADER_FADE_MS, LOADER_HOLD_MS};
use crate::dom::{self, js_err};
use anyhow::Result;
use std::rc::Rc;
use web_sys as web;

/// Run the loader sequence on window `load`, or right away if the page has
/// already finished loading.
pub fn init(app: &Rc<App>) -> Result<()> {
    if app.document.ready_state() == "complete" {
        return on_load(app);
    }
    app.listen(&app.window, "load", |app, _| {
        if let Err(e) = on_load(app) {
            log::error!("[loader] {:?}", e);
        }
    })
}

fn on_load(app: &Rc<App>) -> Result<()> {
    let body = dom::body(&app.document)?;
    let loader = show(&app.document, &body)?;
    app.track(&loader);
    _ = body.class_list().add_1(CLASS_LOADED);

    app.after(LOADER_HOLD_MS, move |app| {
        hide(&loader);
        let fading = loader.clone();
        let removal = app.after(LOADER_FADE_MS, move |app| {
            app.release(&fading);
        });
        if let Err(e) = removal {
            log::debug!("[loader] removal skipped: {:?}", e);
        }
    })?;
    Ok(())
}

/// Reuse the page's `.loading` element, or append one.
pub fn show(document: &web::Document, body: &web::HtmlElement) -> Result<web::Element> {
    if let Some(existing) = document.query_selector(".loading").map_err(js_err)? {
        _ = existing.class_list().remove_1(CLASS_HIDDEN);
        return Ok(existing);
    }
    let loader = document.create_element("div").map_err(js_err)?;
    loader.set_class_name("loading");
    loader.set_inner_html("<div class=\"loader\"></div>");
    body.append_child(&loader).map_err(js_err)?;
    Ok(loader)
}

#[inline]
pub fn hide(loader: &web::Element) {
    _ = loader.class_list().add_1(CLASS_HIDDEN);
}

#[inline]
pub fn is_hidden(loader: &web::Element) -> bool {
    loader.class_list().contains(CLASS_HIDDEN)
}

use crate::app::App;
use crate::core::scroll_top_visible;
use crate::dom::{self, js_err};
use anyhow::{anyhow, Result};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const BUTTON_ID: &str = "scrollTopBtn";
const BUTTON_CSS: &str = "position: fixed; bottom: 30px; right: 30px; width: 60px; height: 60px; \
background: linear-gradient(135deg, #6366f1, #8b5cf6); color: white; border-radius: 50%; \
cursor: pointer; font-size: 1.5rem; z-index: 1000; transition: all 0.4s ease; opacity: 0; \
visibility: hidden; transform: translateY(20px) scale(0.8); \
box-shadow: 0 10px 25px rgba(99, 102, 241, 0.3); border: 2px solid rgba(99, 102, 241, 0.3);";

/// Create (or adopt) the scroll-to-top button and keep its visibility in
/// step with the scroll position.
pub fn init(app: &Rc<App>) -> Result<()> {
    let button = match app.document.get_element_by_id(BUTTON_ID) {
        Some(el) => el
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("#{} is not an HTML element", BUTTON_ID))?,
        None => create_button(&app.document)?,
    };
    app.listen(&button, "click", |app, _| {
        dom::smooth_scroll_to(&app.window, 0.0);
    })?;
    *app.scroll_top.borrow_mut() = Some(button);

    app.listen(&app.window, "scroll", |app, _| update(app))?;
    update(app);
    Ok(())
}

fn create_button(document: &web::Document) -> Result<web::HtmlElement> {
    let button = dom::create_html(document, "button")?;
    button.set_id(BUTTON_ID);
    button.set_inner_html("<i class=\"fas fa-arrow-up\"></i>");
    button.style().set_css_text(BUTTON_CSS);
    dom::body(document)?.append_child(&button).map_err(js_err)?;
    Ok(button)
}

fn update(app: &App) {
    let visible = scroll_top_visible(app.scroll_y());
    if let Some(button) = app.scroll_top.borrow().as_ref() {
        apply_visibility(button, visible);
    }
}

fn apply_visibility(button: &web::HtmlElement, visible: bool) {
    let (opacity, visibility, transform) = if visible {
        ("1", "visible", "translateY(0) scale(1)")
    } else {
        ("0", "hidden", "translateY(20px) scale(0.8)")
    };
    dom::set_style(button, "opacity", opacity);
    dom::set_style(button, "visibility", visibility);
    dom::set_style(button, "transform", transform);
}

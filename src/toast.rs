use crate::app::App;
use crate::core::{toast_markup, NotificationKind, ToastTimeline};
use crate::dom::{self, js_err};
use anyhow::Result;
use std::rc::Rc;
use web_sys as web;

const TOAST_BASE_CSS: &str = "position: fixed; top: 20px; right: 20px; padding: 20px 25px; \
border-radius: 15px; color: white; font-weight: 500; z-index: 10000; \
transform: translateX(400px); transition: transform 0.4s ease; display: flex; \
align-items: center; gap: 10px; backdrop-filter: blur(10px); \
border: 1px solid rgba(255, 255, 255, 0.2); box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);";

/// Show a self-dismissing toast. Failures are logged, never surfaced.
pub fn notify(app: &Rc<App>, message: &str, kind: NotificationKind) {
    if let Err(e) = show(app, message, kind) {
        log::error!("[toast] {:?}", e);
    }
}

/// Create the toast node and schedule its slide-in, slide-out and removal.
pub fn show(app: &Rc<App>, message: &str, kind: NotificationKind) -> Result<web::HtmlElement> {
    let toast = dom::create_html(&app.document, "div")?;
    toast.set_class_name(&format!("notification {}", kind.class_name()));
    toast.set_inner_html(&toast_markup(message, kind));
    toast
        .style()
        .set_css_text(&format!("{} background: {};", TOAST_BASE_CSS, kind.background()));
    dom::body(&app.document)?
        .append_child(&toast)
        .map_err(js_err)?;
    app.track(&toast);

    let timeline = ToastTimeline::default();
    let entering = toast.clone();
    app.after(timeline.enter_at_ms, move |_| {
        dom::set_style(&entering, "transform", "translateX(0)");
    })?;
    let leaving = toast.clone();
    app.after(timeline.exit_at_ms, move |_| {
        dom::set_style(&leaving, "transform", "translateX(400px)");
    })?;
    let removing = toast.clone();
    app.after(timeline.remove_at_ms, move |app| {
        app.release(&removing);
    })?;
    Ok(toast)
}

use crate::app::App;
use crate::constants::{
    CLASS_FADE_IN, CLASS_REVEALED, CLASS_VISIBLE, FADE_IN_CHILD_STAGGER_MS, FADE_IN_ROOT_MARGIN,
    FADE_IN_SELECTOR, FADE_IN_THRESHOLD,
};
use crate::core::{reveal_action, RevealAction, REVEAL_MODE};
use crate::dom::{self, Observer};
use anyhow::Result;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Re-check every `.scroll-reveal` element on each scroll tick.
pub fn init_scroll_reveal(app: &Rc<App>) -> Result<()> {
    let elements = dom::query_all(&app.document, ".scroll-reveal")?;
    let tracked = elements.len();
    app.listen(&app.window, "scroll", move |app, _| {
        let viewport = dom::viewport_height(&app.window, &app.document);
        for el in &elements {
            let top = el.get_bounding_client_rect().top();
            match reveal_action(top, viewport, REVEAL_MODE) {
                Some(RevealAction::Reveal) => {
                    _ = el.class_list().add_1(CLASS_REVEALED);
                }
                Some(RevealAction::Conceal) => {
                    _ = el.class_list().remove_1(CLASS_REVEALED);
                }
                None => {}
            }
        }
    })?;
    log::info!("[reveal] tracking {} elements", tracked);
    Ok(())
}

/// Fade content blocks in as they intersect the viewport.
pub fn init_fade_in(app: &Rc<App>) -> Result<()> {
    let targets = dom::query_all(&app.document, FADE_IN_SELECTOR)?;

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    init.set_root_margin(FADE_IN_ROOT_MARGIN);

    let weak = Rc::downgrade(app);
    let observer = Observer::new(&init, move |entries: js_sys::Array, _| {
        let Some(app) = weak.upgrade() else {
            return;
        };
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            _ = target.class_list().add_1(CLASS_VISIBLE);
            if is_grid(&target) {
                stagger_children(&app, &target);
            }
        }
    })?;

    for target in &targets {
        _ = target.class_list().add_1(CLASS_FADE_IN);
        observer.observe(target);
    }
    app.keep_observer(observer);
    Ok(())
}

#[inline]
fn is_grid(el: &web::Element) -> bool {
    let cl = el.class_list();
    cl.contains("services-grid") || cl.contains("portfolio-grid")
}

fn stagger_children(app: &Rc<App>, grid: &web::Element) {
    let children = grid.children();
    for index in 0..children.length() {
        let Some(child) = children
            .item(index)
            .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let delay = index.saturating_mul(FADE_IN_CHILD_STAGGER_MS);
        let scheduled = app.after(delay, move |_| {
            dom::set_style(&child, "opacity", "1");
            dom::set_style(&child, "transform", "translateY(0)");
        });
        if let Err(e) = scheduled {
            log::debug!("[reveal] stagger skipped: {:?}", e);
        }
    }
}

use crate::app::App;
use crate::constants::{CLASS_ACTIVE, CLASS_SCROLLED};
use crate::core::{active_section, nav_href, navbar_scrolled, scroll_target_for};
use crate::dom;
use anyhow::Result;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the mobile menu toggle, link smooth-scrolling and the scroll-driven
/// navbar state.
pub fn init(app: &Rc<App>) -> Result<()> {
    let document = &app.document;
    let hamburger = dom::by_id(document, "hamburger")?;
    let nav_menu = dom::by_id(document, "nav-menu")?;
    let navbar = dom::by_id(document, "navbar")?;
    let links = Rc::new(dom::query_all(document, ".nav-link")?);

    {
        let hamburger_cl = hamburger.clone();
        let menu = nav_menu.clone();
        app.listen(&hamburger, "click", move |_, _| {
            _ = hamburger_cl.class_list().toggle(CLASS_ACTIVE);
            _ = menu.class_list().toggle(CLASS_ACTIVE);
        })?;
    }

    for link in links.iter() {
        let hamburger = hamburger.clone();
        let menu = nav_menu.clone();
        let link_el = link.clone();
        app.listen(link, "click", move |app, ev| {
            ev.prevent_default();
            close_menu(&hamburger, &menu);
            if let Some(href) = link_el.get_attribute("href") {
                scroll_to_fragment(app, &href);
            }
        })?;
    }

    let tracked = links.clone();
    app.listen(&app.window, "scroll", move |app, _| {
        let scroll_y = app.scroll_y();
        if navbar_scrolled(scroll_y) {
            _ = navbar.class_list().add_1(CLASS_SCROLLED);
        } else {
            _ = navbar.class_list().remove_1(CLASS_SCROLLED);
        }
        highlight_active_link(&app.document, &tracked, scroll_y);
    })?;

    log::info!("[nav] wired {} links", links.len());
    Ok(())
}

#[inline]
fn close_menu(hamburger: &web::Element, menu: &web::Element) {
    _ = hamburger.class_list().remove_1(CLASS_ACTIVE);
    _ = menu.class_list().remove_1(CLASS_ACTIVE);
}

/// Smooth-scroll so the section named by `href` sits just below the header.
/// Unresolvable targets are ignored.
fn scroll_to_fragment(app: &App, href: &str) {
    let Ok(Some(target)) = app.document.query_selector(href) else {
        log::debug!("[nav] no scroll target for {}", href);
        return;
    };
    let Some(section) = target.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let top = scroll_target_for(section.offset_top() as f64);
    dom::smooth_scroll_to(&app.window, top);
}

/// Mark only the link for the last section whose top is within reach.
fn highlight_active_link(document: &web::Document, links: &[web::Element], scroll_y: f64) {
    let sections: Vec<(String, f64)> = dom::query_all(document, "section")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|el| {
            let id = el.get_attribute("id").unwrap_or_default();
            let top = el.dyn_ref::<web::HtmlElement>()?.offset_top() as f64;
            Some((id, top))
        })
        .collect();
    let current = active_section(sections.iter().map(|(id, top)| (id.as_str(), *top)), scroll_y)
        .filter(|id| !id.is_empty())
        .map(nav_href);

    for link in links {
        let cl = link.class_list();
        _ = cl.remove_1(CLASS_ACTIVE);
        if current.is_some() && link.get_attribute("href") == current {
            _ = cl.add_1(CLASS_ACTIVE);
        }
    }
}

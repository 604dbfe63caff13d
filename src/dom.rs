use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn by_id(document: &web::Document, id: &str) -> Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))
}

pub fn html_by_id(document: &web::Document, id: &str) -> Result<web::HtmlElement> {
    by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("#{} is not an HTML element", id))
}

fn collect_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok(collect_elements(list))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Result<Vec<web::Element>> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok(collect_elements(list))
}

pub fn query_html_all(document: &web::Document, selector: &str) -> Result<Vec<web::HtmlElement>> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

pub fn create_html(document: &web::Document, tag: &str) -> Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow!("<{}> is not an HTML element", tag))
}

pub fn body(document: &web::Document) -> Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow!("no body"))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Detach `el` from the document if it is still attached.
pub fn remove_if_attached(document: &web::Document, el: &web::Element) {
    if let Some(body) = document.body() {
        let node: &web::Node = el;
        if body.contains(Some(node)) {
            el.remove();
        }
    }
}

/// Append a `<style>` block to `<head>`.
pub fn inject_style(document: &web::Document, css: &str) -> Result<()> {
    let head = document.head().ok_or_else(|| anyhow!("no head"))?;
    let style = document.create_element("style").map_err(js_err)?;
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// `innerHeight`, falling back to the root element's client height.
pub fn viewport_height(window: &web::Window, document: &web::Document) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|h| *h > 0.0)
        .or_else(|| {
            document
                .document_element()
                .map(|root| root.client_height() as f64)
        })
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &web::Window, top: f64) {
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// An event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// An intersection observer together with the callback it invokes.
/// Disconnects on drop.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Observer {
    pub fn new(
        init: &web::IntersectionObserverInit,
        handler: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
    ) -> Result<Self> {
        let callback = Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
        );
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
                .map_err(js_err)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &web::Element) {
        self.observer.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

use crate::core::{FilterPass, MouseTrail};
use crate::dom::{self, Listener, Observer};
use crate::hero::ParticleField;
use crate::timers::{TimerHandle, Timers};
use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owner of every piece of mutable page-effect state.
///
/// Handlers never hold the `App` strongly: `listen` and `after` capture a weak
/// reference and skip the callback once the app is gone, so dropping the last
/// `Rc<App>` (or calling `teardown`) releases everything.
pub struct App {
    pub window: web::Window,
    pub document: web::Document,
    pub timers: Rc<Timers>,
    pub trail: RefCell<MouseTrail>,
    pub filter: RefCell<FilterPass>,
    pub particles: RefCell<Option<ParticleField>>,
    pub scroll_top: RefCell<Option<web::HtmlElement>>,
    listeners: RefCell<Vec<Listener>>,
    observers: RefCell<Vec<Observer>>,
    transients: RefCell<Vec<web::Element>>,
}

impl App {
    pub fn new() -> Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        Ok(Rc::new(Self {
            timers: Timers::new(window.clone()),
            window,
            document,
            trail: RefCell::new(MouseTrail::default()),
            filter: RefCell::new(FilterPass::default()),
            particles: RefCell::new(None),
            scroll_top: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            observers: RefCell::new(Vec::new()),
            transients: RefCell::new(Vec::new()),
        }))
    }

    /// Attach `handler` to `target` for the lifetime of the app.
    pub fn listen(
        self: &Rc<Self>,
        target: &web::EventTarget,
        kind: &'static str,
        mut handler: impl FnMut(&Rc<App>, web::Event) + 'static,
    ) -> Result<()> {
        let weak = Rc::downgrade(self);
        let listener = Listener::new(target, kind, move |ev| {
            if let Some(app) = weak.upgrade() {
                handler(&app, ev);
            }
        })?;
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }

    /// Run `f` once after `delay_ms`, unless the app is torn down first.
    pub fn after(
        self: &Rc<Self>,
        delay_ms: u32,
        f: impl FnOnce(&Rc<App>) + 'static,
    ) -> Result<TimerHandle> {
        let weak = Rc::downgrade(self);
        self.timers.after(delay_ms, move || {
            if let Some(app) = weak.upgrade() {
                f(&app);
            }
        })
    }

    pub fn keep_observer(&self, observer: Observer) {
        self.observers.borrow_mut().push(observer);
    }

    /// Register a short-lived node (toast, trail marker, loader) so teardown
    /// can detach it if its removal timer never gets to run.
    pub fn track(&self, el: &web::Element) {
        self.transients.borrow_mut().push(el.clone());
    }

    /// Forget a tracked node and detach it from the document.
    pub fn release(&self, el: &web::Element) {
        self.transients.borrow_mut().retain(|tracked| tracked != el);
        dom::remove_if_attached(&self.document, el);
    }

    pub fn transient_count(&self) -> usize {
        self.transients.borrow().len()
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        dom::scroll_y(&self.window)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Stop the particle respawn loop, cancel pending timers, detach
    /// listeners and observers, and remove every tracked transient node.
    /// Must not be called from inside one of the app's own event handlers.
    /// Calling it again is a no-op.
    pub fn teardown(&self) {
        if self.timers.is_shut_down() {
            return;
        }
        if let Some(field) = self.particles.borrow_mut().take() {
            let cancelled = field.clear(&self.timers);
            log::debug!("[app] {} particle respawns cancelled", cancelled);
        }
        self.timers.shutdown();
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let detached = listeners.len();
        drop(listeners);
        self.observers.borrow_mut().clear();
        for el in std::mem::take(&mut *self.transients.borrow_mut()) {
            el.remove();
        }
        self.trail.borrow_mut().clear();
        log::info!("[app] torn down, {} listeners detached", detached);
    }
}

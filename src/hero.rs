use crate::app::App;
use crate::constants::{TITLE_LINE_BASE_DELAY_SEC, TITLE_LINE_STAGGER_SEC, TRAIL_FADE_MS};
use crate::core::{parallax_offset, ParticlePool, ParticleSpec};
use crate::dom::{self, js_err};
use crate::timers::{TimerHandle, Timers};
use anyhow::{anyhow, Result};
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIELD_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
pointer-events: none; z-index: 1;";
const PARTICLE_CSS: &str = "position: absolute; width: 2px; height: 2px; \
background: rgba(99, 102, 241, 0.6); border-radius: 50%; pointer-events: none;";
const TRAIL_CSS: &str = "position: fixed; width: 4px; height: 4px; \
background: rgba(99, 102, 241, 0.6); border-radius: 50%; pointer-events: none; \
z-index: 9999; animation: trailFade 0.5s ease-out forwards;";
const TRAIL_KEYFRAMES: &str = "@keyframes trailFade { \
0% { opacity: 1; transform: scale(1); } \
100% { opacity: 0; transform: scale(0); } }";

/// Live particle elements of the hero background, one per pool slot, with
/// the pending respawn timer of each slot.
pub struct ParticleField {
    container: web::HtmlElement,
    slots: Vec<Option<web::HtmlElement>>,
    respawn_timers: Vec<Option<TimerHandle>>,
    pool: ParticlePool,
}

impl ParticleField {
    /// Swap the element in `slot` for a fresh random particle.
    /// Returns the new particle's lifetime in ms.
    fn respawn(&mut self, document: &web::Document, slot: usize) -> Result<u32> {
        if let Some(old) = self.slots.get_mut(slot).and_then(Option::take) {
            let node: &web::Node = &old;
            if self.container.contains(Some(node)) {
                old.remove();
            }
        }
        let spec = self
            .pool
            .respawn(slot, &mut rand::thread_rng())
            .ok_or_else(|| anyhow!("no particle slot {}", slot))?;
        let el = mount_particle(document, &self.container, &spec)?;
        self.slots[slot] = Some(el);
        Ok(spec.lifetime_ms())
    }

    pub fn live_count(&self) -> usize {
        self.container.child_element_count() as usize
    }

    fn set_respawn_timer(&mut self, slot: usize, handle: TimerHandle) {
        if let Some(entry) = self.respawn_timers.get_mut(slot) {
            *entry = Some(handle);
        }
    }

    /// Cancel every slot's pending respawn and remove the container with
    /// every particle in it. Returns how many respawns were still pending.
    pub fn clear(self, timers: &Timers) -> usize {
        let cancelled = self
            .respawn_timers
            .into_iter()
            .flatten()
            .filter(|handle| timers.cancel(*handle))
            .count();
        self.container.remove();
        cancelled
    }
}

fn mount_particle(
    document: &web::Document,
    container: &web::HtmlElement,
    spec: &ParticleSpec,
) -> Result<web::HtmlElement> {
    let particle = dom::create_html(document, "div")?;
    let style = particle.style();
    style.set_css_text(PARTICLE_CSS);
    _ = style.set_property("left", &format!("{}%", spec.x_pct));
    _ = style.set_property("top", &format!("{}%", spec.y_pct));
    _ = style.set_property("animation", &spec.animation_css());
    container.append_child(&particle).map_err(js_err)?;
    Ok(particle)
}

/// Fill the hero with the particle pool and start each slot's respawn loop.
/// A page without `.hero` is left alone.
pub fn init_particles(app: &Rc<App>) -> Result<()> {
    let Some(hero) = app.document.query_selector(".hero").map_err(js_err)? else {
        log::info!("[particles] no .hero, skipping");
        return Ok(());
    };
    let container = dom::create_html(&app.document, "div")?;
    container.style().set_css_text(FIELD_CSS);
    hero.append_child(&container).map_err(js_err)?;

    let pool = ParticlePool::fill(&mut rand::thread_rng());
    let mut slots = Vec::with_capacity(pool.len());
    let mut lifetimes = Vec::with_capacity(pool.len());
    for (_, spec) in pool.iter() {
        slots.push(Some(mount_particle(&app.document, &container, spec)?));
        lifetimes.push(spec.lifetime_ms());
    }
    *app.particles.borrow_mut() = Some(ParticleField {
        container,
        respawn_timers: vec![None; slots.len()],
        slots,
        pool,
    });

    for (slot, lifetime_ms) in lifetimes.into_iter().enumerate() {
        schedule_respawn(app, slot, lifetime_ms);
    }
    let spawned = app.particles.borrow().as_ref().map_or(0, |f| f.live_count());
    log::info!("[particles] spawned {}", spawned);
    Ok(())
}

fn schedule_respawn(app: &Rc<App>, slot: usize, after_ms: u32) {
    let scheduled = app.after(after_ms, move |app| {
        let next = match app.particles.borrow_mut().as_mut() {
            Some(field) => field.respawn(&app.document, slot),
            None => return,
        };
        match next {
            Ok(lifetime_ms) => schedule_respawn(app, slot, lifetime_ms),
            Err(e) => log::warn!("[particles] slot {} stopped: {:?}", slot, e),
        }
    });
    match scheduled {
        Ok(handle) => {
            if let Some(field) = app.particles.borrow_mut().as_mut() {
                field.set_respawn_timer(slot, handle);
            }
        }
        Err(e) => log::debug!("[particles] slot {} not rescheduled: {:?}", slot, e),
    }
}

/// Record pointer samples and drop fading markers while over the hero.
pub fn init_mouse_trail(app: &Rc<App>) -> Result<()> {
    dom::inject_style(&app.document, TRAIL_KEYFRAMES)?;
    app.listen(&app.document, "mousemove", |app, ev| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y) = (mouse.client_x() as f64, mouse.client_y() as f64);
        app.trail.borrow_mut().push(x, y, Instant::now());

        let over_hero = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(".hero").ok().flatten())
            .is_some();
        if over_hero {
            if let Err(e) = spawn_trail_marker(app, x, y) {
                log::debug!("[trail] {:?}", e);
            }
        }
    })
}

fn spawn_trail_marker(app: &Rc<App>, x: f64, y: f64) -> Result<()> {
    let marker = dom::create_html(&app.document, "div")?;
    let style = marker.style();
    style.set_css_text(TRAIL_CSS);
    _ = style.set_property("left", &format!("{}px", x));
    _ = style.set_property("top", &format!("{}px", y));
    dom::body(&app.document)?
        .append_child(&marker)
        .map_err(js_err)?;
    app.track(&marker);
    app.after(TRAIL_FADE_MS, move |app| {
        app.release(&marker);
    })?;
    Ok(())
}

/// Shift the hero with the scroll position.
pub fn init_parallax(app: &Rc<App>) -> Result<()> {
    let Some(hero) = app
        .document
        .query_selector(".hero")
        .map_err(js_err)?
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return Ok(());
    };
    app.listen(&app.window, "scroll", move |app, _| {
        let offset = parallax_offset(app.scroll_y());
        dom::set_style(&hero, "transform", &format!("translateY({}px)", offset));
    })
}

/// Stagger the hero title lines in.
pub fn init_title(app: &Rc<App>) -> Result<()> {
    let Some(title) = app.document.query_selector(".hero-title").map_err(js_err)? else {
        return Ok(());
    };
    let lines = dom::query_all_in(&title, ".title-line")?;
    for (index, line) in lines.iter().enumerate() {
        let Some(line) = line.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        let delay = index as f64 * TITLE_LINE_STAGGER_SEC + TITLE_LINE_BASE_DELAY_SEC;
        dom::set_style(line, "opacity", "0");
        dom::set_style(line, "transform", "translateY(50px)");
        dom::set_style(
            line,
            "animation",
            &format!("slideInLeft 1s ease forwards {:.1}s", delay),
        );
    }
    Ok(())
}

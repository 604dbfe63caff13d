use crate::dom::js_err;
use anyhow::{bail, Result};
use fnv::FnvHashSet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Id of a pending `setTimeout`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(i32);

/// Registry of every pending timeout the page effects have scheduled.
///
/// Callbacks are handed to the browser as one-shot functions; the registry
/// only keeps their ids so that `shutdown` can clear whatever is still
/// outstanding. Once shut down, new timers are refused.
pub struct Timers {
    window: web::Window,
    pending: RefCell<FnvHashSet<i32>>,
    closed: Cell<bool>,
}

impl Timers {
    pub fn new(window: web::Window) -> Rc<Self> {
        Rc::new(Self {
            window,
            pending: RefCell::new(FnvHashSet::default()),
            closed: Cell::new(false),
        })
    }

    /// Run `f` once after `delay_ms`.
    pub fn after(self: &Rc<Self>, delay_ms: u32, f: impl FnOnce() + 'static) -> Result<TimerHandle> {
        if self.closed.get() {
            bail!("timers are shut down");
        }
        let id_cell = Rc::new(Cell::new(0_i32));
        let id_for_cb = id_cell.clone();
        let weak = Rc::downgrade(self);
        let callback = Closure::once_into_js(move || {
            let Some(timers) = weak.upgrade() else {
                return;
            };
            let was_pending = timers.pending.borrow_mut().remove(&id_for_cb.get());
            if was_pending {
                f();
            }
        });
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(js_err)?;
        id_cell.set(id);
        self.pending.borrow_mut().insert(id);
        Ok(TimerHandle(id))
    }

    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&self, handle: TimerHandle) -> bool {
        let removed = self.pending.borrow_mut().remove(&handle.0);
        if removed {
            self.window.clear_timeout_with_handle(handle.0);
        }
        removed
    }

    pub fn cancel_all(&self) {
        let ids: Vec<i32> = self.pending.borrow_mut().drain().collect();
        for id in ids {
            self.window.clear_timeout_with_handle(id);
        }
    }

    pub fn shutdown(&self) {
        self.closed.set(true);
        self.cancel_all();
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_shut_down(&self) -> bool {
        self.closed.get()
    }
}

use crate::app::App;
use crate::constants::{CLASS_ACTIVE, CLASS_HIDE, CLASS_SHOW};
use crate::core::{Filter, FilterPass, FilterStep, ItemSchedule, ItemView};
use crate::dom;
use anyhow::Result;
use std::rc::Rc;
use web_sys as web;

/// Wire the category buttons to the portfolio grid.
pub fn init(app: &Rc<App>) -> Result<()> {
    let buttons = Rc::new(dom::query_all(&app.document, ".filter-btn")?);
    let items = Rc::new(dom::query_html_all(&app.document, ".portfolio-item")?);

    for item in items.iter() {
        _ = item.class_list().add_1(CLASS_SHOW);
    }
    *app.filter.borrow_mut() = FilterPass::new(items.len());

    for button in buttons.iter() {
        let all_buttons = buttons.clone();
        let items = items.clone();
        let clicked = button.clone();
        app.listen(button, "click", move |app, _| {
            for other in all_buttons.iter() {
                _ = other.class_list().remove_1(CLASS_ACTIVE);
            }
            _ = clicked.class_list().add_1(CLASS_ACTIVE);
            let filter = Filter::from_attribute(clicked.get_attribute("data-filter").as_deref());
            run_pass(app, filter, &items);
        })?;
    }

    log::info!(
        "[filter] {} buttons, {} items",
        buttons.len(),
        items.len()
    );
    Ok(())
}

/// Schedule the staggered hide/settle/show steps for every item.
pub fn run_pass(app: &Rc<App>, filter: Filter, items: &[web::HtmlElement]) {
    let generation = app.filter.borrow_mut().begin(filter.clone());
    log::debug!("[filter] pass {} -> {:?}", generation, filter);

    for (index, item) in items.iter().enumerate() {
        let schedule = ItemSchedule::for_index(index);
        let matched = filter.matches(item.get_attribute("data-category").as_deref());
        let steps = [
            (FilterStep::Hide, schedule.hide_at_ms),
            (FilterStep::Settle, schedule.settle_at_ms),
        ];
        for (step, at_ms) in steps {
            schedule_step(app, generation, index, item, step, at_ms, matched);
        }
        if matched {
            schedule_step(
                app,
                generation,
                index,
                item,
                FilterStep::Show,
                schedule.show_at_ms,
                matched,
            );
        }
    }
}

fn schedule_step(
    app: &Rc<App>,
    generation: u64,
    index: usize,
    item: &web::HtmlElement,
    step: FilterStep,
    at_ms: u32,
    matched: bool,
) {
    let item = item.clone();
    let scheduled = app.after(at_ms, move |app| {
        let view = app
            .filter
            .borrow_mut()
            .apply(generation, index, step, matched);
        if let Some(view) = view {
            render_step(&item, step, view);
        }
    });
    if let Err(e) = scheduled {
        log::warn!("[filter] could not schedule {:?}: {:?}", step, e);
    }
}

/// Push the part of `view` that `step` changed onto the element.
fn render_step(item: &web::HtmlElement, step: FilterStep, view: ItemView) {
    match step {
        FilterStep::Settle => {
            let display = if view.displayed { "block" } else { "none" };
            dom::set_style(item, "display", display);
        }
        FilterStep::Hide | FilterStep::Show => {
            let cl = item.class_list();
            _ = cl.toggle_with_force(CLASS_HIDE, view.hiding);
            _ = cl.toggle_with_force(CLASS_SHOW, view.showing);
        }
    }
}

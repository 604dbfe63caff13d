use crate::app::App;
use crate::constants::{SIMULATED_SEND_MS, SUBMIT_PULSE_MS};
use crate::core::{ContactMessage, NotificationKind};
use crate::dom::{self, js_err};
use crate::toast;
use anyhow::{anyhow, Result};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const BUSY_LABEL: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";
const BUSY_BACKGROUND: &str = "linear-gradient(135deg, #8b5cf6, #ec4899)";
const IDLE_BACKGROUND: &str = "linear-gradient(135deg, #6366f1, #8b5cf6)";

/// Wire validation and the simulated send onto `#contact-form`.
pub fn init(app: &Rc<App>) -> Result<()> {
    let form = dom::by_id(&app.document, "contact-form")?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| anyhow!("#contact-form is not a form"))?;
    let submit = form
        .query_selector("button[type=\"submit\"]")
        .map_err(js_err)?
        .ok_or_else(|| anyhow!("#contact-form has no submit button"))?
        .dyn_into::<web::HtmlButtonElement>()
        .map_err(|_| anyhow!("submit control is not a button"))?;

    let form_el = form.clone();
    app.listen(&form, "submit", move |app, ev| {
        ev.prevent_default();
        handle_submit(app, &form_el, &submit);
    })?;
    Ok(())
}

pub fn read_message(form: &web::HtmlFormElement) -> Result<ContactMessage> {
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    Ok(ContactMessage::from_fields(|name| data.get(name).as_string()))
}

fn handle_submit(app: &Rc<App>, form: &web::HtmlFormElement, submit: &web::HtmlButtonElement) {
    let message = match read_message(form) {
        Ok(m) => m,
        Err(e) => {
            log::error!("[contact] reading form data: {:?}", e);
            return;
        }
    };
    if let Err(err) = message.validate() {
        log::debug!("[contact] rejected: {}", err);
        toast::notify(app, &err.to_string(), NotificationKind::Error);
        return;
    }

    let original_label = submit.text_content().unwrap_or_default();
    submit.set_inner_html(BUSY_LABEL);
    submit.set_disabled(true);
    dom::set_style(submit, "background", BUSY_BACKGROUND);

    let form = form.clone();
    let button = submit.clone();
    let label = original_label.clone();
    let scheduled = app.after(SIMULATED_SEND_MS, move |app| {
        toast::notify(app, SUCCESS_MESSAGE, NotificationKind::Success);
        form.reset();
        finish_sending(app, &button, &label);
    });
    if let Err(e) = scheduled {
        log::warn!("[contact] send not scheduled: {:?}", e);
        submit.set_text_content(Some(&original_label));
        submit.set_disabled(false);
    }
}

fn finish_sending(app: &Rc<App>, button: &web::HtmlButtonElement, label: &str) {
    button.set_text_content(Some(label));
    button.set_disabled(false);
    dom::set_style(button, "background", IDLE_BACKGROUND);
    dom::set_style(button, "transform", "scale(1.05)");
    let button = button.clone();
    let pulse = app.after(SUBMIT_PULSE_MS, move |_| {
        dom::set_style(&button, "transform", "scale(1)");
    });
    if let Err(e) = pulse {
        log::debug!("[contact] pulse reset skipped: {:?}", e);
    }
}

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form::{Field, FormAction, FormState};

/// Reads the current value of whichever form control fired `event`.
pub fn control_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        target
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|textarea| textarea.value())
    }
}

/// Change handler writing the control's value into `field`.
pub fn bind<E>(dispatcher: UseReducerDispatcher<FormState>, field: Field) -> Callback<E>
where
    E: AsRef<Event> + 'static,
{
    Callback::from(move |e: E| match control_value(e.as_ref()) {
        Some(value) => dispatcher.dispatch(FormAction::Update(field, value)),
        None => log::warn!("Change event for {} had no form control target", field.name()),
    })
}

use yew::prelude::*;
use web_sys::{HtmlFormElement, FormData, MouseEvent};
use shared::Theme;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SettingsOverlayProps {
    pub is_open: bool,
    pub theme: Theme,
    pub on_submit: Callback<Theme>,
    pub on_close: Callback<()>,
}

#[function_component(SettingsOverlay)]
pub fn settings_overlay(props: &SettingsOverlayProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            let value = FormData::new_with_form(&form)
                .ok()
                .and_then(|data| data.get("theme").as_string())
                .unwrap_or_default();

            match value.parse::<Theme>() {
                Ok(theme) => on_submit.emit(theme),
                Err(e) => Logger::warn_with_component("settings", &e.to_string()),
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="overlay" open={props.is_open}>
            <div class="overlay__content">
                <form class="overlay__form" onsubmit={on_submit}>
                    <label class="overlay__row">
                        <span class="overlay__label">{"Theme"}</span>
                        <select class="overlay__input overlay__input_select" name="theme">
                            {for Theme::ALL.iter().map(|theme| html! {
                                <option
                                    value={theme.as_str()}
                                    selected={*theme == props.theme}
                                >
                                    {theme.label()}
                                </option>
                            })}
                        </select>
                    </label>
                    <div class="overlay__actions">
                        <button type="button" class="overlay__button" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="overlay__button overlay__button_primary">{"Save"}</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

use yew::prelude::*;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, MouseEvent};
use shared::{FilterCriteria, SelectOption};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SearchOverlayProps {
    pub is_open: bool,
    pub genre_options: Vec<SelectOption>,
    pub author_options: Vec<SelectOption>,
    pub on_submit: Callback<FilterCriteria>,
    pub on_close: Callback<()>,
}

fn render_options(options: &[SelectOption]) -> Html {
    options
        .iter()
        .map(|option| html! {
            <option key={option.value.clone()} value={option.value.clone()}>{&option.label}</option>
        })
        .collect()
}

/// Read the search form fields into criteria. Missing fields fall back to
/// "match everything".
fn criteria_from_form(form: &HtmlFormElement) -> Option<FilterCriteria> {
    let form_data = FormData::new_with_form(form).ok()?;
    let field = |name: &str| form_data.get(name).as_string().unwrap_or_default();
    Some(FilterCriteria::from_form(
        &field("title"),
        &field("author"),
        &field("genre"),
    ))
}

#[function_component(SearchOverlay)]
pub fn search_overlay(props: &SearchOverlayProps) -> Html {
    let title_ref = use_node_ref();

    // Focus the title field whenever the overlay opens
    use_effect_with(props.is_open, {
        let title_ref = title_ref.clone();
        move |is_open| {
            if *is_open {
                if let Some(input) = title_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        }
    });

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form: HtmlFormElement = e.target_unchecked_into();
            match criteria_from_form(&form) {
                Some(criteria) => on_submit.emit(criteria),
                None => Logger::error_with_component("search", "could not read the search form"),
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
                        <span class="overlay__label">{"Title"}</span>
                        <input
                            ref={title_ref}
                            class="overlay__input"
                            name="title"
                            placeholder="Any"
                        />
                    </label>
                    <label class="overlay__row">
                        <span class="overlay__label">{"Genre"}</span>
                        <select class="overlay__input overlay__input_select" name="genre">
                            {render_options(&props.genre_options)}
                        </select>
                    </label>
                    <label class="overlay__row">
                        <span class="overlay__label">{"Author"}</span>
                        <select class="overlay__input overlay__input_select" name="author">
                            {render_options(&props.author_options)}
                        </select>
                    </label>
                    <div class="overlay__actions">
                        <button type="button" class="overlay__button" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="overlay__button overlay__button_primary">{"Search"}</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

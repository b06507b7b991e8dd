use yew::prelude::*;
use web_sys::MouseEvent;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_search: Callback<()>,
    pub on_settings: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_search_click = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };

    let on_settings_click = {
        let on_settings = props.on_settings.clone();
        Callback::from(move |_: MouseEvent| on_settings.emit(()))
    };

    html! {
        <header class="header">
            <h1 class="header__logo">{"Book Connect"}</h1>
            <div class="header__buttons">
                <button class="header__button" aria-label="Search books" onclick={on_search_click}>
                    {"Search"}
                </button>
                <button class="header__button" aria-label="Settings" onclick={on_settings_click}>
                    {"Settings"}
                </button>
            </div>
        </header>
    }
}

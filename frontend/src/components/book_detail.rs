use yew::prelude::*;
use web_sys::MouseEvent;
use shared::BookDetail;

#[derive(Properties, PartialEq)]
pub struct BookDetailOverlayProps {
    pub detail: Option<BookDetail>,
    pub on_close: Callback<()>,
}

#[function_component(BookDetailOverlay)]
pub fn book_detail_overlay(props: &BookDetailOverlayProps) -> Html {
    let Some(detail) = &props.detail else {
        return html! {};
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <dialog class="overlay" open=true>
            <div class="overlay__preview">
                <img class="overlay__blur" src={detail.image.clone()} alt="" />
                <img class="overlay__image" src={detail.image.clone()} alt={detail.title.clone()} />
            </div>
            <div class="overlay__content">
                <h3 class="overlay__title">{&detail.title}</h3>
                <div class="overlay__data">{&detail.subtitle}</div>
                <p class="overlay__data overlay__data_secondary">{&detail.description}</p>
            </div>
            <div class="overlay__actions">
                <button class="overlay__button" onclick={on_close_click}>{"Close"}</button>
            </div>
        </dialog>
    }
}

use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{Affordance, BookPreview};

#[derive(Properties, PartialEq)]
pub struct BookPreviewCardProps {
    pub preview: BookPreview,
    pub on_open: Callback<String>,
}

#[function_component(BookPreviewCard)]
pub fn book_preview_card(props: &BookPreviewCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.preview.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    html! {
        <button class="preview" data-preview={props.preview.id.clone()} {onclick}>
            <img class="preview__image" src={props.preview.image.clone()} alt="" />
            <div class="preview__info">
                <h3 class="preview__title">{&props.preview.title}</h3>
                <div class="preview__author">{&props.preview.author_name}</div>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookListProps {
    pub books: Vec<BookPreview>,
    pub affordance: Affordance,
    pub show_empty_message: bool,
    pub on_open: Callback<String>,
    pub on_show_more: Callback<()>,
}

#[function_component(BookList)]
pub fn book_list(props: &BookListProps) -> Html {
    let on_show_more_click = {
        let on_show_more = props.on_show_more.clone();
        Callback::from(move |_: MouseEvent| on_show_more.emit(()))
    };

    let message_class = classes!(
        "list__message",
        props.show_empty_message.then_some("list__message_show")
    );

    html! {
        <main class="list">
            <div class="list__items">
                {for props.books.iter().map(|preview| html! {
                    <BookPreviewCard
                        key={preview.id.clone()}
                        preview={preview.clone()}
                        on_open={props.on_open.clone()}
                    />
                })}
            </div>
            <div class={message_class}>
                {"No results found. Your filters might be too narrow."}
            </div>
            <button
                class="list__button"
                disabled={!props.affordance.enabled}
                onclick={on_show_more_click}
            >
                <span>{"Show more"}</span>
                <span class="list__remaining">{format!(" ({})", props.affordance.remaining)}</span>
            </button>
        </main>
    }
}

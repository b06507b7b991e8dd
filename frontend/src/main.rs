use std::rc::Rc;
use anyhow::Context;
use yew::prelude::*;
use shared::Catalog;

mod components;
mod hooks;
mod services;

use components::{
    book_detail::BookDetailOverlay, book_list::BookList, header::Header,
    search_overlay::SearchOverlay, settings_overlay::SettingsOverlay,
};
use hooks::use_browser::use_browser;
use services::logging::Logger;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

fn load_catalog() -> anyhow::Result<Catalog> {
    Catalog::from_json(CATALOG_JSON).context("embedded book catalog is invalid")
}

#[derive(Properties, PartialEq)]
struct CatalogPageProps {
    catalog: Rc<Catalog>,
}

#[function_component(CatalogPage)]
fn catalog_page(props: &CatalogPageProps) -> Html {
    let browser = use_browser(props.catalog.clone());
    let view = &browser.view;
    let actions = &browser.actions;

    let genre_options = use_memo(browser.catalog.clone(), |catalog| catalog.genre_options());
    let author_options = use_memo(browser.catalog.clone(), |catalog| catalog.author_options());

    html! {
        <>
            <Header
                on_search={actions.open_search.clone()}
                on_settings={actions.open_settings.clone()}
            />
            <BookList
                books={view.books.clone()}
                affordance={view.affordance}
                show_empty_message={view.show_empty_message}
                on_open={actions.open_detail.clone()}
                on_show_more={actions.show_more.clone()}
            />
            <SearchOverlay
                is_open={view.search_open}
                genre_options={(*genre_options).clone()}
                author_options={(*author_options).clone()}
                on_submit={actions.submit_filter.clone()}
                on_close={actions.close_search.clone()}
            />
            <SettingsOverlay
                is_open={view.settings_open}
                theme={view.theme}
                on_submit={actions.change_theme.clone()}
                on_close={actions.close_settings.clone()}
            />
            <BookDetailOverlay
                detail={view.detail.clone()}
                on_close={actions.close_detail.clone()}
            />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let catalog = use_memo((), |_| match load_catalog() {
        Ok(catalog) => {
            Logger::info_with_component(
                "app",
                &format!("Loaded catalog with {} books", catalog.len()),
            );
            Ok(Rc::new(catalog))
        }
        Err(e) => {
            let message = format!("{:#}", e);
            Logger::error_with_component("app", &message);
            Err(message)
        }
    });

    match &*catalog {
        Ok(catalog) => html! { <CatalogPage catalog={catalog.clone()} /> },
        Err(message) => html! {
            <div class="load-error">
                <h2>{"The book catalog could not be loaded"}</h2>
                <p>{message}</p>
            </div>
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use std::rc::Rc;
use yew::prelude::*;
use shared::{
    Affordance, BookDetail, BookPreview, Browser, Catalog, FilterCriteria, RenderSurface, Theme,
};
use crate::services::{dom, logging::Logger};

/// Everything the page renders, filled in by the browser controller
#[derive(Clone, Debug, PartialEq)]
pub struct ListView {
    pub books: Vec<BookPreview>,
    pub affordance: Affordance,
    pub show_empty_message: bool,
    pub detail: Option<BookDetail>,
    pub theme: Theme,
    pub search_open: bool,
    pub settings_open: bool,
    /// Bumped whenever the controller asks for a scroll to the top
    pub scroll_requests: u32,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            affordance: Affordance::from_remaining(0),
            show_empty_message: false,
            detail: None,
            theme: Theme::default(),
            search_open: false,
            settings_open: false,
            scroll_requests: 0,
        }
    }
}

impl RenderSurface for ListView {
    fn render_books(&mut self, books: &[BookPreview]) {
        self.books = books.to_vec();
    }

    fn append_books(&mut self, books: &[BookPreview]) {
        self.books.extend_from_slice(books);
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
    }

    fn set_empty_message(&mut self, visible: bool) {
        self.show_empty_message = visible;
    }

    fn show_detail(&mut self, detail: BookDetail) {
        self.detail = Some(detail);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn close_search(&mut self) {
        self.search_open = false;
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requests = self.scroll_requests.wrapping_add(1);
    }
}

pub enum BrowserAction {
    Start { prefers_dark: bool },
    SubmitFilter(FilterCriteria),
    ShowMore,
    OpenDetail(String),
    CloseDetail,
    ChangeTheme(Theme),
    OpenSearch,
    CloseSearch,
    OpenSettings,
    CloseSettings,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserModel {
    pub browser: Browser,
    pub view: ListView,
}

impl BrowserModel {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            browser: Browser::new(catalog),
            view: ListView::default(),
        }
    }
}

impl Reducible for BrowserModel {
    type Action = BrowserAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut model = (*self).clone();
        let BrowserModel { browser, view } = &mut model;

        match action {
            BrowserAction::Start { prefers_dark } => browser.start(prefers_dark, view),
            BrowserAction::SubmitFilter(criteria) => browser.submit_filter(criteria, view),
            BrowserAction::ShowMore => browser.show_more(view),
            BrowserAction::OpenDetail(book_id) => {
                browser.open_detail(&book_id, view);
            }
            BrowserAction::CloseDetail => view.detail = None,
            BrowserAction::ChangeTheme(theme) => {
                browser.change_theme(theme, view);
                view.settings_open = false;
            }
            BrowserAction::OpenSearch => view.search_open = true,
            BrowserAction::CloseSearch => view.search_open = false,
            BrowserAction::OpenSettings => view.settings_open = true,
            BrowserAction::CloseSettings => view.settings_open = false,
        }

        Rc::new(model)
    }
}

pub struct UseBrowserResult {
    pub view: ListView,
    pub catalog: Rc<Catalog>,
    pub actions: UseBrowserActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBrowserActions {
    pub submit_filter: Callback<FilterCriteria>,
    pub show_more: Callback<()>,
    pub open_detail: Callback<String>,
    pub close_detail: Callback<()>,
    pub change_theme: Callback<Theme>,
    pub open_search: Callback<()>,
    pub close_search: Callback<()>,
    pub open_settings: Callback<()>,
    pub close_settings: Callback<()>,
}

fn dispatch_with<T: 'static>(
    model: &UseReducerHandle<BrowserModel>,
    action: impl Fn(T) -> BrowserAction + 'static,
) -> Callback<T> {
    let model = model.clone();
    Callback::from(move |value: T| model.dispatch(action(value)))
}

#[hook]
pub fn use_browser(catalog: Rc<Catalog>) -> UseBrowserResult {
    let model = use_reducer({
        let catalog = catalog.clone();
        move || BrowserModel::new(catalog)
    });

    // Initial render, seeded with the system color scheme
    use_effect_with((), {
        let model = model.clone();
        move |_| {
            let prefers_dark = dom::prefers_dark_scheme();
            Logger::info_with_component(
                "browser",
                &format!("Starting, prefers dark scheme: {}", prefers_dark),
            );
            model.dispatch(BrowserAction::Start { prefers_dark });
            || ()
        }
    });

    use_effect_with(model.view.theme, |theme| {
        dom::apply_theme(theme.colors());
        || ()
    });

    use_effect_with(model.view.scroll_requests, |requests| {
        if *requests > 0 {
            dom::scroll_to_top();
        }
        || ()
    });

    let actions = UseBrowserActions {
        submit_filter: dispatch_with(&model, BrowserAction::SubmitFilter),
        show_more: dispatch_with(&model, |_: ()| BrowserAction::ShowMore),
        open_detail: dispatch_with(&model, BrowserAction::OpenDetail),
        close_detail: dispatch_with(&model, |_: ()| BrowserAction::CloseDetail),
        change_theme: dispatch_with(&model, BrowserAction::ChangeTheme),
        open_search: dispatch_with(&model, |_: ()| BrowserAction::OpenSearch),
        close_search: dispatch_with(&model, |_: ()| BrowserAction::CloseSearch),
        open_settings: dispatch_with(&model, |_: ()| BrowserAction::OpenSettings),
        close_settings: dispatch_with(&model, |_: ()| BrowserAction::CloseSettings),
    };

    UseBrowserResult {
        view: model.view.clone(),
        catalog,
        actions,
    }
}

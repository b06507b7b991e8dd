pub mod use_browser;

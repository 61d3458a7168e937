use leptos::prelude::*;

/// Top-level pages reachable from the header navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Products,
    About,
    Orders,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Products => "Products",
            Page::About => "About Us",
            Page::Orders => "Orders",
        }
    }
}

/// App-wide UI state shared through Leptos context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Products),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current_page.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

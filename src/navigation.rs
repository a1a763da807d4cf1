use gtk::prelude::*;
use tracing::info;

/// Named destinations of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    ProfileAccount,
    Tabs,
}

impl Route {
    /// Name of the stack page that shows this route.
    pub const fn name(&self) -> &'static str {
        match self {
            Route::ProfileAccount => "profile-account",
            Route::Tabs => "tabs",
        }
    }
}

/// Fire-and-forget navigation.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl Navigator for gtk::Stack {
    fn navigate(&self, route: Route) {
        info!("Navigating to {}", route.name());
        self.set_visible_child_name(route.name());
    }
}

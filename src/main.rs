mod app;
mod capture;
mod config;
mod form;
mod navigation;
mod profile;
mod session;
mod store;
mod ui;
mod win;

use relm4::*;
use tracing::error;

fn main() {
    app::init::init_logging();

    let session = match app::init::make_session() {
        Ok(session) => session,
        Err(e) => {
            error!("Could not start: {}", e);
            std::process::exit(1);
        }
    };

    let app = RelmApp::new(app::init::APP_ID);
    app.set_global_css(ui::STYLE);

    app.run::<crate::win::Win>(session);
}

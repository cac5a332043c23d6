mod app;
mod config;
mod logging;

mod domain {
    pub mod entities {
        pub mod column;
        pub mod filter;
        pub mod grouping;
        pub mod row;
        pub mod view;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
    }
    pub mod services {
        pub mod dataset_store;
        pub mod filter_service;
        pub mod table_service;
        pub mod view_service;
    }
}

mod infra {
    pub mod source {
        pub mod file;
        #[cfg(target_arch = "wasm32")]
        pub mod http;
        pub mod json;
        pub mod platform;
    }
}

mod platform {
    pub mod desktop {
        pub mod webview;
    }
}

mod ui {
    pub mod state {
        pub mod app_state;
        pub mod session;
    }
}


use crate::app::App;
use crate::config::AppConfig;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

fn main() {
    let config = AppConfig::load();
    logging::init(config.log_level);
    tracing::info!(dataset = %config.dataset_location, "starting grid view");
    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    let mut desktop_config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Grid View"));
    match platform::desktop::webview::default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => tracing::warn!("using default webview data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}

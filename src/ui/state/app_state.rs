use dioxus::prelude::{use_signal, Signal};

use crate::ui::state::session::GridSession;
use crate::usecase::services::dataset_store::DatasetStore;

pub struct AppState {
    pub session: Signal<GridSession>,
    pub store: Signal<DatasetStore>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(initial_page_size: usize) -> Self {
        Self {
            session: use_signal(|| GridSession::with_page_size(initial_page_size)),
            store: use_signal(DatasetStore::default),
            busy: use_signal(|| true),
            status: use_signal(|| "Loading dataset…".to_string()),
        }
    }
}

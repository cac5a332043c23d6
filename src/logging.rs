use tracing::Level;

/// Installs the renderer's tracing subscriber (browser console on web, stdout on desktop).
pub fn init(level: Level) {
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
}

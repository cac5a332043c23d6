#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSource = crate::infra::source::file::FileSource;
#[cfg(target_arch = "wasm32")]
pub type PlatformSource = crate::infra::source::http::HttpSource;

/// Source for the configured dataset location on the current target.
pub fn platform_source(location: &str) -> PlatformSource {
    PlatformSource::new(location)
}

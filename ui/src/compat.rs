// Re-export the public API from the appropriate module
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use wasm32::*;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub use non_wasm32::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod wasm32 {
    use web_sys::Window;

    /// Origin of the page the dashboard was served from, e.g. `http://host:5000`.
    pub fn page_origin() -> Option<String> {
        web_sys::window()
            .map(|win: Window| win.location())
            .and_then(|location| location.origin().ok())
            .filter(|origin| origin.starts_with("http"))
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub mod non_wasm32 {
    /// There is no page outside the browser.
    pub fn page_origin() -> Option<String> {
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;
pub mod content;
#[cfg(target_arch = "wasm32")]
pub mod frontend;
pub mod sections;
pub mod theme;

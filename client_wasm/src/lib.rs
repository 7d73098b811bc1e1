//! Browser client for Pong
//!
//! Canvas 2D rendering and DOM input around the `game_core` simulation.
//! Note: the browser bindings are only compiled for the wasm32 target; the
//! input and clock helpers are plain Rust and tested natively.

pub mod clock;
pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod logger;
#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use app::run;

//! Flappy - terminal side-scroller library
//!
//! The simulation in `core` is pure and deterministic given an RNG; the
//! binary wires it to the terminal through `platform` and `ui`.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod core;
pub mod input;
pub mod platform;
pub mod sprite;
pub mod ui;

pub use config::GameConfig;
pub use self::core::{Game, GameInput, GameStatus, OverReason};
pub use sprite::Sprite;

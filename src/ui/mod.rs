//! Terminal front end. Nothing in here mutates the game.

pub mod canvas;
pub mod game_scene;

pub use canvas::{Canvas, CellCanvas};
pub use game_scene::{draw_world, render_game};

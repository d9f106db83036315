//! Pure game simulation: no terminal, no clock, no global RNG.

pub mod avatar;
pub mod game;
pub mod geometry;
pub mod obstacle;
pub mod stream;

pub use avatar::Avatar;
pub use game::{Game, GameInput, GameStatus, OverReason, StepOutcome};
pub use geometry::Rect;
pub use obstacle::Obstacle;
pub use stream::ObstacleStream;

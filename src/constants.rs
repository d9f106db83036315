// Frame timing
pub const TARGET_FPS: u64 = 60;

// Screen (world units; the renderer scales these down to terminal cells)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 1200.0;

// Avatar
pub const AVATAR_X: f64 = 50.0;
pub const AVATAR_WIDTH: f64 = 51.0;
pub const AVATAR_HEIGHT: f64 = 54.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -10.0; // replaces velocity, never added

// Obstacles
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_VELOCITY: f64 = 5.0;
pub const PIPE_MARGIN: f64 = 100.0;
pub const SPAWN_SPACING: f64 = 400.0;

// Assets
pub const SPRITE_DIR: &str = "images";
pub const SPRITE_FILE: &str = "bird.txt";

// Logging
pub const LOG_FILE: &str = "flappy.log";

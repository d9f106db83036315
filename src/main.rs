use flappy::constants::LOG_FILE;
use flappy::platform::{poll_events, FramePacer, TerminalGuard};
use flappy::ui::render_game;
use flappy::{Game, GameConfig, GameStatus, OverReason, Sprite};
use std::fs::File;
use std::io;

fn main() -> io::Result<()> {
    init_logging();

    let config = GameConfig::default();
    config
        .validate()
        .map_err(|msg| {
            log::error!("invalid configuration: {}", msg);
            io::Error::new(io::ErrorKind::InvalidInput, msg)
        })?;

    let (sprite, sprite_path) = Sprite::load_default().map_err(|e| {
        log::error!("startup failed: {}", e);
        e
    })?;
    log::info!(
        "loaded sprite {} ({}x{})",
        sprite_path.display(),
        sprite.width(),
        sprite.height()
    );
    log::debug!("config: {:?}", config);

    let game = run(config, &sprite)?;

    let ending = match game.status() {
        GameStatus::Over(OverReason::Collision) => "Crashed into a pipe.",
        GameStatus::Over(OverReason::OutOfBounds) => "Flew off the screen.",
        GameStatus::Over(OverReason::Quit) | GameStatus::Running => "Goodbye!",
    };
    println!("{} Score: {}", ending, game.score());

    Ok(())
}

/// Play one run to completion. The terminal is restored when this returns,
/// on success or error.
fn run(config: GameConfig, sprite: &Sprite) -> io::Result<Game> {
    let mut guard = TerminalGuard::enter()?;
    let mut game = Game::new(config);
    let mut rng = rand::thread_rng();
    let mut pacer = FramePacer::new(config.target_fps);

    while !game.is_over() {
        let inputs = poll_events()?;
        let outcome = game.step(&inputs, &mut rng);
        log::trace!("frame {}: {:?}", game.frame(), outcome);

        guard.terminal().draw(|frame| {
            let area = frame.size();
            render_game(frame, area, &game, sprite);
        })?;

        pacer.wait_for_next_tick();
    }

    Ok(game)
}

/// Logs go to a file, and only when `RUST_LOG` is set: the terminal belongs
/// to the game while it runs.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create(LOG_FILE) {
        Ok(file) => env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init(),
        Err(e) => eprintln!("Could not open {}: {}", LOG_FILE, e),
    }
}

//! Rendering for a running game.

use super::canvas::{Canvas, CellCanvas};
use crate::build_info;
use crate::core::Game;
use crate::sprite::Sprite;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const SKY: Color = Color::Rgb(135, 206, 235);
pub const PIPE: Color = Color::Rgb(0, 200, 0);
pub const TEXT: Color = Color::White;

/// Score text position in world units.
const SCORE_POS: (f64, f64) = (10.0, 10.0);

const INFO_PANEL_WIDTH: u16 = 22;

/// Draw the world (pipes, avatar, score) onto any canvas.
pub fn draw_world<C: Canvas>(canvas: &mut C, game: &Game, sprite: &Sprite) {
    for obstacle in game.stream.obstacles() {
        canvas.draw_rect(obstacle.top_rect(), PIPE);
        canvas.draw_rect(obstacle.bottom_rect(), PIPE);
    }
    canvas.draw_sprite(sprite, game.avatar.rect());
    canvas.draw_text(
        &format!("Score: {}", game.score()),
        SCORE_POS.0,
        SCORE_POS.1,
        TEXT,
    );
}

/// Render the full game screen: bordered play area, status bar, info panel.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play area]                   │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn render_game(frame: &mut Frame, area: Rect, game: &Game, sprite: &Sprite) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], game, sprite);
    render_status_bar(frame, v_chunks[1], game);
    render_info_panel(frame, h_chunks[1], game);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &Game, sprite: &Sprite) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let config = game.config();
    let mut canvas = CellCanvas::new(
        area.width,
        area.height,
        config.screen_width,
        config.screen_height,
        SKY,
    );
    draw_world(&mut canvas, game, sprite);
    frame.render_widget(Paragraph::new(canvas.to_lines()), area);
}

/// Two lines: score, then the controls.
fn render_status_bar(frame: &mut Frame, area: Rect, game: &Game) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(format!("Score: {}", game.score()))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let controls = [("[Space/Up/Enter]", "Flap"), ("[Esc/Q]", "Quit")];
    let mut spans = Vec::new();
    for (i, (key, action)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![
            label(" Score: "),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label(" Pipes: "),
            Span::styled(
                game.stream.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            label(" Speed: "),
            Span::styled(
                format!("{:+.1}", game.avatar.velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            label(" Frame: "),
            Span::styled(game.frame().to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", build_info::label()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{Obstacle, ObstacleStream};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sprite() -> Sprite {
        Sprite::parse("@@\n@@").unwrap()
    }

    #[test]
    fn test_draw_world_shows_score_pipes_and_avatar() {
        let config = GameConfig::default();
        let mut game = Game::new(config);
        let mut obstacle = Obstacle::with_gap_top(&config, 400.0);
        obstacle.x = 400.0;
        game.stream = ObstacleStream::with_obstacles(config, vec![obstacle]);

        // 1 cell = 10 x 20 world units
        let mut canvas = CellCanvas::new(80, 60, 800.0, 1200.0, SKY);
        draw_world(&mut canvas, &game, &sprite());

        // (10, 10) lands in the top-left corner, one column in
        assert!((0..2).any(|row| canvas.row_text(row).starts_with(" Score: 0")));
        // Top pipe covers rows 0..20 at cols 40..48
        assert_eq!(canvas.cell(44, 10).unwrap().bg, PIPE);
        // Gap 400..600 is rows 20..30
        assert_eq!(canvas.cell(44, 25).unwrap().bg, SKY);
        // Bottom pipe from row 30
        assert_eq!(canvas.cell(44, 40).unwrap().bg, PIPE);
        // Avatar at (50, 600) is cell (5, 30)
        assert_eq!(canvas.cell(5, 30).unwrap().symbol, '@');
    }

    #[test]
    fn test_render_game_on_test_backend() {
        let game = Game::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &game, &sprite());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Flappy"));
        assert!(text.contains("Info"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("Flap"));
        assert!(text.contains("@"));
    }

    #[test]
    fn test_render_game_tiny_terminal_does_not_panic() {
        let game = Game::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &game, &sprite());
            })
            .unwrap();
    }
}

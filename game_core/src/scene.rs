//! Frame composition.
//!
//! `draw_scene` repaints the whole field through a [`Surface`], which the
//! browser client backs with a 2D canvas.

use crate::{Aabb, Game, Phase, Side};
use glam::Vec2;

/// RGBA colour; alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS colour string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const BACKGROUND: Color = Color::rgb(12, 16, 24);
pub const FOREGROUND: Color = Color::rgb(236, 240, 241);
pub const NET: Color = Color::rgba(236, 240, 241, 0.35);
pub const SHADE: Color = Color::rgba(0, 0, 0, 0.6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32, // Pixels
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn centered(size: f32) -> Self {
        Self {
            size,
            align: TextAlign::Center,
        }
    }
}

/// Drawing primitives in field coordinates.
///
/// Text is positioned by its vertical middle.
pub trait Surface {
    type Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, rect: Aabb, color: Color) -> Result<(), Self::Error>;
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), Self::Error>;
    fn fill_text(
        &mut self,
        text: &str,
        pos: Vec2,
        style: TextStyle,
        color: Color,
    ) -> Result<(), Self::Error>;
}

/// Message panel shown whenever the rally is paused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const SERVE_PROMPT: &str = "Click or press Space to serve";
const RESTART_PROMPT: &str = "Click or press Space to play again";

pub fn overlay(game: &Game) -> Option<Overlay> {
    match game.phase() {
        Phase::Play => None,
        Phase::Serve => {
            let title = match game.last_point() {
                None => "Pong",
                Some(Side::Player) => "Your point",
                Some(Side::Opponent) => "Computer's point",
            };
            Some(Overlay {
                title,
                subtitle: SERVE_PROMPT,
            })
        }
        Phase::GameOver => {
            let title = match game.winner() {
                Some(Side::Player) => "You win!",
                _ => "You lose!",
            };
            Some(Overlay {
                title,
                subtitle: RESTART_PROMPT,
            })
        }
    }
}

const NET_WIDTH: f32 = 2.0;
const NET_DASH: f32 = 12.0;
const NET_GAP: f32 = 10.0;

/// Repaint the full frame
pub fn draw_scene<S: Surface>(game: &Game, surface: &mut S) -> Result<(), S::Error> {
    let config = &game.config;
    let width = config.field_width;
    let height = config.field_height;

    surface.clear(BACKGROUND)?;

    // Net
    let net_x = (width - NET_WIDTH) / 2.0;
    let mut y = NET_GAP / 2.0;
    while y < height {
        let dash = NET_DASH.min(height - y);
        surface.fill_rect(
            Aabb::from_min_size(Vec2::new(net_x, y), Vec2::new(NET_WIDTH, dash)),
            NET,
        )?;
        y += NET_DASH + NET_GAP;
    }

    // Scores
    let score_style = TextStyle::centered(40.0);
    surface.fill_text(
        &game.score.player.to_string(),
        Vec2::new(width * 0.25, 40.0),
        score_style,
        FOREGROUND,
    )?;
    surface.fill_text(
        &game.score.opponent.to_string(),
        Vec2::new(width * 0.75, 40.0),
        score_style,
        FOREGROUND,
    )?;

    // Paddles and ball
    for side in [Side::Player, Side::Opponent] {
        if let Some(paddle) = game.paddle(side) {
            surface.fill_rect(config.paddle_rect(side, paddle.y), FOREGROUND)?;
        }
    }
    if let Some(ball) = game.ball() {
        surface.fill_circle(ball.pos, config.ball_radius, FOREGROUND)?;
    }

    if let Some(overlay) = overlay(game) {
        let center = config.center();
        surface.fill_rect(Aabb::new(Vec2::ZERO, Vec2::new(width, height)), SHADE)?;
        surface.fill_text(
            overlay.title,
            center - Vec2::new(0.0, 24.0),
            TextStyle::centered(36.0),
            FOREGROUND,
        )?;
        surface.fill_text(
            overlay.subtitle,
            center + Vec2::new(0.0, 20.0),
            TextStyle::centered(18.0),
            FOREGROUND,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ball;
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Color),
        Rect(Aabb, Color),
        Circle(Vec2, f32),
        Text(String, TextStyle),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn clear(&mut self, color: Color) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, rect: Aabb, color: Color) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Rect(rect, color));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Circle(center, radius));
            Ok(())
        }

        fn fill_text(
            &mut self,
            text: &str,
            _pos: Vec2,
            style: TextStyle,
            _color: Color,
        ) -> Result<(), Infallible> {
            self.calls.push(DrawCall::Text(text.to_string(), style));
            Ok(())
        }
    }

    struct BrokenSurface {
        calls: usize,
    }

    impl Surface for BrokenSurface {
        type Error = String;

        fn clear(&mut self, _color: Color) -> Result<(), String> {
            self.calls += 1;
            Err("context lost".to_string())
        }

        fn fill_rect(&mut self, _rect: Aabb, _color: Color) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_circle(&mut self, _c: Vec2, _r: f32, _color: Color) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }

        fn fill_text(&mut self, _t: &str, _p: Vec2, _s: TextStyle, _c: Color) -> Result<(), String> {
            self.calls += 1;
            Ok(())
        }
    }

    fn record(game: &Game) -> Vec<DrawCall> {
        let mut surface = RecordingSurface::default();
        draw_scene(game, &mut surface).unwrap();
        surface.calls
    }

    fn texts(calls: &[DrawCall]) -> Vec<String> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let calls = record(&Game::default());
        assert_eq!(calls.first(), Some(&DrawCall::Clear(BACKGROUND)));
    }

    #[test]
    fn test_frame_draws_paddles_ball_and_scores() {
        let mut game = Game::default();
        game.score.player = 3;
        game.score.opponent = 1;
        let calls = record(&game);

        let config = &game.config;
        let start = config.paddle_start_y();
        assert!(calls.contains(&DrawCall::Rect(
            config.paddle_rect(Side::Player, start),
            FOREGROUND
        )));
        assert!(calls.contains(&DrawCall::Rect(
            config.paddle_rect(Side::Opponent, start),
            FOREGROUND
        )));
        assert!(calls.contains(&DrawCall::Circle(config.center(), config.ball_radius)));

        let texts = texts(&calls);
        assert_eq!(texts[0], "3");
        assert_eq!(texts[1], "1");
    }

    #[test]
    fn test_net_stays_inside_field() {
        let game = Game::default();
        let calls = record(&game);
        let dashes: Vec<Aabb> = calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect(rect, color) if *color == NET => Some(*rect),
                _ => None,
            })
            .collect();
        assert!(!dashes.is_empty());
        for dash in dashes {
            assert!(dash.min.y >= 0.0 && dash.max.y <= game.config.field_height);
        }
    }

    #[test]
    fn test_serve_overlay_is_drawn_last() {
        let game = Game::default();
        let calls = record(&game);
        let shade = calls
            .iter()
            .position(|c| matches!(c, DrawCall::Rect(_, color) if *color == SHADE))
            .expect("serve overlay shade");
        let ball = calls
            .iter()
            .position(|c| matches!(c, DrawCall::Circle(..)))
            .unwrap();
        assert!(shade > ball, "Overlay covers the field");

        let texts = texts(&calls);
        assert!(texts.contains(&"Pong".to_string()));
        assert!(texts.contains(&SERVE_PROMPT.to_string()));
    }

    #[test]
    fn test_no_overlay_in_play() {
        let mut game = Game::default();
        game.serve_or_restart();
        assert_eq!(overlay(&game), None);
        let calls = record(&game);
        assert!(!calls
            .iter()
            .any(|c| matches!(c, DrawCall::Rect(_, color) if *color == SHADE)));
    }

    #[test]
    fn test_overlay_after_a_point() {
        let mut game = Game::default();
        game.serve_or_restart();
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(700.0, 240.0);
            ball.vel = Vec2::new(5.0, 0.0);
        }
        game.update();

        assert_eq!(
            overlay(&game),
            Some(Overlay {
                title: "Your point",
                subtitle: SERVE_PROMPT
            })
        );
    }

    #[test]
    fn test_overlay_on_loss() {
        let mut game = Game::default();
        game.score.opponent = game.config.win_score - 1;
        game.serve_or_restart();
        for (_e, ball) in game.world.query_mut::<&mut Ball>() {
            ball.pos = Vec2::new(-30.0, 240.0);
            ball.vel = Vec2::new(-5.0, 0.0);
        }
        game.update();

        let overlay = overlay(&game).unwrap();
        assert_eq!(overlay.title, "You lose!");
        assert_eq!(overlay.subtitle, RESTART_PROMPT);
    }

    #[test]
    fn test_surface_error_stops_the_frame() {
        let mut surface = BrokenSurface { calls: 0 };
        let result = draw_scene(&Game::default(), &mut surface);
        assert_eq!(result, Err("context lost".to_string()));
        assert_eq!(surface.calls, 1);
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::rgb(1, 2, 3).to_css(), "rgb(1, 2, 3)");
        assert_eq!(Color::rgba(0, 0, 0, 0.6).to_css(), "rgba(0, 0, 0, 0.6)");
    }
}

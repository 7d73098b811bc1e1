use crate::{Aabb, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_radius: f32,
    pub ball_serve_speed: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increase: f32,
    pub ball_max_vy: f32,
    pub serve_vy_min: f32,
    pub serve_vy_max: f32,
    pub spin: f32,
    pub opponent_speed: f32,
    pub opponent_dead_zone: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_max_vy: Params::BALL_MAX_VY,
            serve_vy_min: Params::SERVE_VY_MIN,
            serve_vy_max: Params::SERVE_VY_MAX,
            spin: Params::SPIN,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre of the field
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Left edge X of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_inset,
            Side::Opponent => self.field_width - self.paddle_inset - self.paddle_width,
        }
    }

    /// Paddle top that vertically centres it in the field
    pub fn paddle_start_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }

    /// Clamp a paddle top to the field
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.field_height - self.paddle_height).max(0.0))
    }

    /// Bounding box of a paddle whose top edge is at `y`
    pub fn paddle_rect(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_min_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }
}

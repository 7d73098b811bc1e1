use crate::{Config, GameRng, Side};
use glam::Vec2;

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2, // Pixels per tick
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Park the ball at the field centre, motionless
    pub fn park(&mut self, config: &Config) {
        self.pos = config.center();
        self.vel = Vec2::ZERO;
    }

    /// Launch from the centre toward `toward`, with a random vertical speed
    /// whose magnitude never drops below `serve_vy_min`
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        let vy_min = config.serve_vy_min.min(config.serve_vy_max);
        let vy_max = config.serve_vy_min.max(config.serve_vy_max);
        let magnitude = rng.0.gen_range(vy_min..=vy_max);
        let vy = if rng.0.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };

        self.pos = config.center();
        self.vel = Vec2::new(config.ball_serve_speed * toward.direction(), vy);
    }
}

/// Game tuning parameters for Pong.
///
/// Distances are in field pixels and speeds in pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_INSET: f32 = 16.0; // gap between paddle and field edge

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 11.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply |vx| on paddle hit
    pub const BALL_MAX_VY: f32 = 9.0;
    pub const SERVE_VY_MIN: f32 = 1.5;
    pub const SERVE_VY_MAX: f32 = 3.5;
    pub const SPIN: f32 = 3.0;

    // Opponent
    pub const OPPONENT_SPEED: f32 = 4.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 6.0;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Loop
    pub const TICK_RATE_HZ: f64 = 60.0;
    pub const MAX_FRAME_MS: f64 = 100.0; // Clamp to prevent large catch-up bursts
}

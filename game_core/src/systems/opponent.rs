use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Steer the opponent paddle toward the ball.
///
/// Moves at a fixed speed, holds still inside the dead zone to avoid jitter,
/// and stays inside the field.
pub fn drive_opponent(world: &mut World, config: &Config) {
    let Some(ball_y) = world.query::<&Ball>().iter().next().map(|(_e, b)| b.pos.y) else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let diff = ball_y - paddle.center_y(config);
        let dir = if diff > config.opponent_dead_zone {
            1.0
        } else if diff < -config.opponent_dead_zone {
            -1.0
        } else {
            0.0
        };

        paddle.y = config.clamp_paddle_y(paddle.y + dir * config.opponent_speed);
    }
}

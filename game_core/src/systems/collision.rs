use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect ball and paddle data without holding borrows
    let ball_data = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);

    let Some(mut ball) = ball_data else {
        return; // No ball in world
    };

    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    let hit_wall = bounce_walls(&mut ball, config);
    let hit_paddle = paddles
        .iter()
        .any(|paddle| bounce_paddle(&mut ball, paddle, config));

    if hit_wall || hit_paddle {
        events.ball_hit_wall |= hit_wall;
        events.ball_hit_paddle |= hit_paddle;

        for (_entity, b) in world.query_mut::<&mut Ball>() {
            *b = ball;
        }
    }
}

/// Reflect off the top and bottom edges, clamping the ball back inside
fn bounce_walls(ball: &mut Ball, config: &Config) -> bool {
    let r = config.ball_radius;
    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.pos.y + r > config.field_height {
        ball.pos.y = config.field_height - r;
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}

/// Return the ball off a paddle face, adding spin from the contact offset
fn bounce_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    // Only the paddle the ball is heading toward can return it
    let approaching = match paddle.side {
        Side::Player => ball.vel.x < 0.0,
        Side::Opponent => ball.vel.x > 0.0,
    };
    if !approaching {
        return false;
    }

    let r = config.ball_radius;
    let rect = config.paddle_rect(paddle.side, paddle.y);
    if !rect.overlaps_x(ball.pos.x - r, ball.pos.x + r) || !rect.contains_y(ball.pos.y) {
        return false;
    }

    // Push the ball just outside the face so it can't stick inside the paddle
    ball.pos.x = match paddle.side {
        Side::Player => rect.max.x + r,
        Side::Opponent => rect.min.x - r,
    };

    let speed = (ball.vel.x.abs() * config.ball_speed_increase).min(config.ball_speed_max);
    let away = paddle.side.opposite().direction();
    ball.vel.x = speed * away;

    // Relative position from -1 (top) to 1 (bottom)
    let half_height = config.paddle_height / 2.0;
    let offset = ((ball.pos.y - rect.center().y) / half_height).clamp(-1.0, 1.0);
    ball.vel.y = (ball.vel.y + offset * config.spin).clamp(-config.ball_max_vy, config.ball_max_vy);

    true
}

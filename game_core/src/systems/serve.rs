use crate::{Ball, Config, GameRng, Paddle, Score, Side};
use hecs::World;

/// Launch the ball from the centre toward `toward`
pub fn serve_ball(world: &mut World, config: &Config, toward: Side, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(toward, config, rng);
    }
}

/// Zero the score and put every piece back to its starting position
pub fn reset_match(world: &mut World, config: &Config, score: &mut Score) {
    score.reset();

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_start_y();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.park(config);
    }
}

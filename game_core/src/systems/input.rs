use crate::{Config, InputQueue, Paddle, Side};
use hecs::World;

/// Apply the pending pointer target to the player paddle.
///
/// The target is the desired paddle centre; the resulting top edge is
/// clamped so the paddle stays inside the field.
pub fn ingest_inputs(world: &mut World, inputs: &mut InputQueue, config: &Config) {
    let Some(target_y) = inputs.take_target() else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.y = config.clamp_paddle_y(target_y - config.paddle_height / 2.0);
        }
    }
}

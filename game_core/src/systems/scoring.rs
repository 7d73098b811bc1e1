use crate::{Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if the ball fully left the field (scoring).
///
/// Credits the point, parks the ball at the centre and returns the side that
/// conceded.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let r = config.ball_radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let conceded = if ball.pos.x + r < 0.0 {
            Side::Player
        } else if ball.pos.x - r > config.field_width {
            Side::Opponent
        } else {
            continue;
        };

        let scorer = conceded.opposite();
        score.increment(scorer);
        match scorer {
            Side::Player => events.player_scored = true,
            Side::Opponent => events.opponent_scored = true,
        }

        ball.park(config);
        return Some(conceded);
    }
    None
}

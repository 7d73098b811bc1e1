//! The game loop state: one struct owning the world and every resource.

use crate::systems::*;
use crate::{create_ball, create_paddle, Ball, Config, Events, GameRng, InputQueue, Paddle};
use crate::{Phase, Score, Side};
use glam::Vec2;
use hecs::World;

/// Complete game state, advanced one tick at a time by [`Game::update`]
pub struct Game {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    phase: Phase,
    serve_toward: Side,
    last_point: Option<Side>,
    tick: u64,
}

impl Game {
    /// New match waiting for the first serve
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let paddle_y = config.paddle_start_y();
        create_paddle(&mut world, Side::Player, paddle_y);
        create_paddle(&mut world, Side::Opponent, paddle_y);
        create_ball(&mut world, config.center(), Vec2::ZERO);

        let serve_toward = rng.side();

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            phase: Phase::Serve,
            serve_toward,
            last_point: None,
            tick: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side the next serve will travel toward
    pub fn serve_toward(&self) -> Side {
        self.serve_toward
    }

    /// Side that won the most recent point, cleared on restart
    pub fn last_point(&self) -> Option<Side> {
        self.last_point
    }

    /// Number of rally ticks simulated so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    /// Queue a pointer position (field units) as the player paddle's target
    pub fn set_pointer_y(&mut self, y: f32) {
        self.inputs.push_target(y);
    }

    /// Advance the simulation by one tick. A no-op unless a rally is in play.
    pub fn update(&mut self) {
        self.events.clear();
        if self.phase != Phase::Play {
            return;
        }
        self.tick += 1;

        // 1. Ingest inputs (pointer target -> player paddle)
        ingest_inputs(&mut self.world, &mut self.inputs, &self.config);

        // 2. Move ball
        move_ball(&mut self.world);

        // 3. Check collisions (ball vs walls, paddles)
        check_collisions(&mut self.world, &self.config, &mut self.events);

        // 4. Check scoring (ball exited field); the rest of the tick is skipped
        if let Some(conceded) =
            check_scoring(&mut self.world, &self.config, &mut self.score, &mut self.events)
        {
            self.finish_point(conceded);
            return;
        }

        // 5. Opponent follows the ball
        drive_opponent(&mut self.world, &self.config);
    }

    /// Serve from [`Phase::Serve`], restart from [`Phase::GameOver`]; ignored in play
    pub fn serve_or_restart(&mut self) {
        match self.phase {
            Phase::Serve => {
                serve_ball(&mut self.world, &self.config, self.serve_toward, &mut self.rng);
                self.phase = Phase::Play;
                log::debug!("Serve toward {:?}", self.serve_toward);
            }
            Phase::GameOver => {
                reset_match(&mut self.world, &self.config, &mut self.score);
                self.inputs.clear();
                self.serve_toward = self.rng.side();
                self.last_point = None;
                self.phase = Phase::Serve;
                log::info!("New match, first serve toward {:?}", self.serve_toward);
            }
            Phase::Play => {}
        }
    }

    fn finish_point(&mut self, conceded: Side) {
        let scorer = conceded.opposite();
        self.last_point = Some(scorer);
        log::info!(
            "Point to {:?} ({} - {})",
            scorer,
            self.score.player,
            self.score.opponent
        );

        if let Some(winner) = self.winner() {
            self.phase = Phase::GameOver;
            log::info!("Game over, {:?} wins", winner);
        } else {
            self.serve_toward = conceded;
            self.phase = Phase::Serve;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Config::default(), 12345)
    }
}

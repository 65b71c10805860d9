//! Match orchestration
//!
//! A [`Match`] owns both paddles, the ball and the score for the lifetime of
//! one game and drives them one tick at a time.

use std::io;
use std::time::Duration;

use crate::render::{draw_scene, draw_winner, Scene};
use crate::{
    sample_intents, update_ball, update_paddle, Ball, Config, Events, InputSource, MatchConfig,
    MatchState, Paddle, PaddleIntent, PlayerSlot, Presenter, Score,
};

/// What a single tick ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished(PlayerSlot),
    Quit,
}

/// How a whole match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Won { winner: PlayerSlot, score: Score },
    Quit { score: Score },
}

#[derive(Debug, Clone)]
pub struct Match {
    config: Config,
    setup: MatchConfig,
    left: Paddle,
    right: Paddle,
    ball: Ball,
    score: Score,
    events: Events,
    state: MatchState,
    ticks: u64,
}

impl Match {
    pub fn new(config: Config, setup: MatchConfig) -> Self {
        Self {
            left: Paddle::spawn(PlayerSlot::Left, &config),
            right: Paddle::spawn(PlayerSlot::Right, &config),
            ball: Ball::spawn(&config),
            score: Score::new(),
            events: Events::new(),
            state: MatchState::Playing,
            ticks: 0,
            config,
            setup,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn setup(&self) -> &MatchConfig {
        &self.setup
    }

    pub fn paddle(&self, slot: PlayerSlot) -> &Paddle {
        match slot {
            PlayerSlot::Left => &self.left,
            PlayerSlot::Right => &self.right,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Number of simulated ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run the simulation part of one tick: paddles, ball, then the win check.
    ///
    /// Once the match is finished this is a no-op that keeps reporting the
    /// winner.
    pub fn advance(&mut self, intents: [PaddleIntent; 2]) -> Option<PlayerSlot> {
        if let Some(winner) = self.state.winner() {
            return Some(winner);
        }
        self.ticks += 1;

        let [left_intent, right_intent] = intents;
        update_paddle(&mut self.left, left_intent, &self.config);
        update_paddle(&mut self.right, right_intent, &self.config);

        self.events.clear();
        update_ball(
            &mut self.ball,
            &self.left,
            &self.right,
            &mut self.score,
            &self.config,
            &mut self.events,
        );
        if let Some(slot) = self.events.paddle_hit {
            log::debug!("ball hit {} paddle on tick {}", slot, self.ticks);
        }

        let winner = self.score.has_winner(self.setup.winning_score)?;
        self.state = MatchState::Finished { winner };
        log::info!(
            "{} wins ({} - {}) after {} ticks",
            self.setup.name(winner),
            self.score.left,
            self.score.right,
            self.ticks
        );
        Some(winner)
    }

    /// One full tick: input, simulation, presentation.
    ///
    /// A quit request is honoured before anything is mutated.
    pub fn tick<I, P>(&mut self, input: &mut I, presenter: &mut P) -> io::Result<TickOutcome>
    where
        I: InputSource + ?Sized,
        P: Presenter + ?Sized,
    {
        input.poll()?;
        if input.quit_requested() {
            log::info!("quit requested on tick {}", self.ticks);
            return Ok(TickOutcome::Quit);
        }
        if let Some(winner) = self.state.winner() {
            return Ok(TickOutcome::Finished(winner));
        }

        let winner = self.advance(sample_intents(input));

        draw_scene(presenter, &self.scene());
        match winner {
            Some(winner) => {
                draw_winner(presenter, &self.config, &self.setup, winner);
                presenter.refresh()?;
                presenter.hold(Duration::from_millis(self.config.win_hold_ms))?;
                Ok(TickOutcome::Finished(winner))
            }
            None => {
                presenter.refresh()?;
                Ok(TickOutcome::Continue)
            }
        }
    }

    /// Tick until someone wins or quit is requested
    pub fn run<I, P>(&mut self, input: &mut I, presenter: &mut P) -> io::Result<MatchOutcome>
    where
        I: InputSource + ?Sized,
        P: Presenter + ?Sized,
    {
        log::info!(
            "match started: {} vs {}, first to {}",
            self.setup.left_name,
            self.setup.right_name,
            self.setup.winning_score
        );

        loop {
            match self.tick(input, presenter)? {
                TickOutcome::Continue => {}
                TickOutcome::Finished(winner) => {
                    return Ok(MatchOutcome::Won {
                        winner,
                        score: self.score,
                    })
                }
                TickOutcome::Quit => return Ok(MatchOutcome::Quit { score: self.score }),
            }
        }
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            config: &self.config,
            setup: &self.setup,
            left: &self.left,
            right: &self.right,
            ball: &self.ball,
            score: &self.score,
        }
    }
}

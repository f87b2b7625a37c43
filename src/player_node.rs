use alloc::boxed::Box;
use log::info;
use rand::rngs::SmallRng;

use crate::{
    common::ShotOutcome,
    config::MAX_TURNS,
    coord::Cell,
    game::{Game, COMPUTER, HUMAN, NUM_PLAYERS},
    player::{OpponentView, Player, PlayerError},
};

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Outcome {
    /// Index of the player whose fleet survived.
    pub winner: usize,
    /// Shots fired by each player.
    pub shots: [usize; NUM_PLAYERS],
    /// Shots that hit a ship, per player.
    pub hits: [usize; NUM_PLAYERS],
}

/// Drives a full match: fleet placement for both players, then alternating
/// shots until one fleet is destroyed.
pub struct PlayerNode<'a> {
    players: [Box<dyn Player + 'a>; NUM_PLAYERS],
    game: Game,
}

impl<'a> PlayerNode<'a> {
    /// `first` owns board 0 and fires first; `second` owns board 1.
    pub fn new(first: Box<dyn Player + 'a>, second: Box<dyn Player + 'a>) -> Self {
        Self {
            players: [first, second],
            game: Game::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Place both fleets, board 0 first.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), PlayerError> {
        for idx in [HUMAN, COMPUTER] {
            self.players[idx].place_ships(rng, self.game.board_mut(idx))?;
        }
        Ok(())
    }

    /// Play one shot for the current player. Returns the target and result;
    /// the turn passes only while both fleets are still alive.
    pub fn play_turn(
        &mut self,
        rng: &mut SmallRng,
    ) -> Result<(Cell, ShotOutcome), PlayerError> {
        let me = self.game.current_player();
        let them = self.game.opponent();
        let cell = self.players[me].select_target(rng, OpponentView::new(self.game.board(them)))?;
        let result = self.game.fire(cell)?;
        self.players[me].handle_shot_result(cell, result)?;
        self.players[them].handle_opponent_shot(cell, result)?;
        if self.game.is_playing() {
            self.game.advance_turn();
        }
        Ok((cell, result))
    }

    /// Run setup and combat to completion.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Outcome, PlayerError> {
        self.setup(rng)?;
        info!("fleets placed, combat begins");

        let mut shots = [0usize; NUM_PLAYERS];
        let mut hits = [0usize; NUM_PLAYERS];
        for _ in 0..MAX_TURNS {
            let me = self.game.current_player();
            let (_, result) = self.play_turn(rng)?;
            shots[me] += 1;
            if result.is_hit() {
                hits[me] += 1;
            }
            if !self.game.is_playing() {
                break;
            }
        }

        let winner = self.game.winner().ok_or(PlayerError::TurnLimit)?;
        for idx in [HUMAN, COMPUTER] {
            let other = (idx + 1) % NUM_PLAYERS;
            self.players[idx].handle_game_over(
                idx == winner,
                self.game.board(idx),
                OpponentView::new(self.game.board(other)),
            )?;
        }
        info!(
            "player {} wins after {} shots",
            winner,
            shots[0] + shots[1]
        );
        Ok(Outcome {
            winner,
            shots,
            hits,
        })
    }
}

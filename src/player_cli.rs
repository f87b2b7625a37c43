#![cfg(feature = "std")]

use std::io::{BufRead, Write};

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::ShotOutcome,
    config::FLEET,
    coord::{from_label, Cell},
    player::{OpponentView, Player, PlayerError},
    player_ai,
    ship::ShipType,
    ui::{render_board, render_view},
};

/// Human player reading one label per line from `input` and writing prompts
/// and boards to `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    autoplace: bool,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            autoplace: false,
        }
    }

    /// Place the whole fleet at random instead of asking.
    pub fn with_autoplace(mut self, autoplace: bool) -> Self {
        self.autoplace = autoplace;
        self
    }

    /// Consume the player, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, PlayerError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn place_one(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        def: ShipType,
    ) -> Result<(), PlayerError> {
        write!(self.output, "{}", render_board(board, true))?;
        writeln!(
            self.output,
            "Please place your {} (size {})",
            def.name(),
            def.length()
        )?;

        let (bow, sterns) = loop {
            let line = self.prompt("Enter bow of ship (forwardmost point), or ENTER for random:")?;
            if line.is_empty() {
                let (bow, stern) = player_ai::random_placement(rng, board, def)?;
                board.place_ship_between(def, bow, stern)?;
                writeln!(self.output, "{} placed from {} to {}", def.name(), bow, stern)?;
                return Ok(());
            }
            let bow = match Cell::parse_on_board(&line, board.size()) {
                Ok(cell) => cell,
                Err(e) => {
                    writeln!(self.output, "{}, enter another location", e)?;
                    continue;
                }
            };
            if !board.is_open_for_bow(bow) {
                writeln!(self.output, "There's a ship there, enter another location")?;
                continue;
            }
            let sterns = board.possible_stern_cells(bow, def.length());
            if sterns.is_empty() {
                writeln!(
                    self.output,
                    "Your {} does not fit from {}, enter another location",
                    def.name(),
                    bow
                )?;
                continue;
            }
            break (bow, sterns);
        };

        let choices = join_labels(&sterns);
        writeln!(self.output, "Possible stern positions: {}", choices)?;
        let stern = loop {
            let line = self.prompt("Enter stern of ship:")?;
            match from_label(&line) {
                Ok(cell) if sterns.contains(&cell) => break cell,
                _ => writeln!(
                    self.output,
                    "Please enter one of the possible positions: {}",
                    choices
                )?,
            }
        };
        board.place_ship_between(def, bow, stern)?;
        debug!("human placed {} from {} to {}", def.name(), bow, stern);
        Ok(())
    }
}

fn join_labels(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(Cell::label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlayerError> {
        if self.autoplace {
            player_ai::place_fleet_randomly(rng, board)?;
            writeln!(self.output, "Your ships were placed at random:")?;
            write!(self.output, "{}", render_board(board, true))?;
            return Ok(());
        }
        writeln!(self.output, "Please place your ships")?;
        for def in FLEET {
            self.place_one(rng, board, def)?;
        }
        write!(self.output, "{}", render_board(board, true))?;
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: OpponentView<'_>,
    ) -> Result<Cell, PlayerError> {
        write!(self.output, "{}", render_view(opponent))?;
        loop {
            let line = self.prompt("Call your shot:")?;
            match Cell::parse_on_board(&line, opponent.size()) {
                Ok(cell) if opponent.is_attacked(cell) => {
                    writeln!(self.output, "You already fired at {}, call another shot", cell)?;
                }
                Ok(cell) => return Ok(cell),
                Err(e) => writeln!(self.output, "{}, call another shot", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, _cell: Cell, result: ShotOutcome) -> Result<(), PlayerError> {
        match result {
            ShotOutcome::Miss => writeln!(self.output, "Miss.")?,
            ShotOutcome::Hit(name) => writeln!(self.output, "Hit. {}.", name)?,
            ShotOutcome::Sunk(name) => {
                writeln!(self.output, "Hit. {}.", name)?;
                writeln!(self.output, "You sunk their {}.", name)?;
            }
        }
        Ok(())
    }

    fn handle_opponent_shot(&mut self, cell: Cell, result: ShotOutcome) -> Result<(), PlayerError> {
        match result {
            ShotOutcome::Miss => writeln!(self.output, "Enemy fired at {} and missed.", cell)?,
            ShotOutcome::Hit(name) => {
                writeln!(self.output, "Enemy hit your {} at {}.", name, cell)?
            }
            ShotOutcome::Sunk(name) => {
                writeln!(self.output, "Enemy sunk your {} at {}.", name, cell)?
            }
        }
        Ok(())
    }

    fn handle_game_over(
        &mut self,
        won: bool,
        own: &Board,
        opponent: OpponentView<'_>,
    ) -> Result<(), PlayerError> {
        writeln!(self.output, "Enemy board:")?;
        write!(self.output, "{}", render_view(opponent))?;
        writeln!(self.output, "Your board:")?;
        write!(self.output, "{}", render_board(own, true))?;
        writeln!(self.output, "{}", if won { "YOU WIN!" } else { "YOU LOSE!" })?;
        Ok(())
    }
}

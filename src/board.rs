use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::GameConfig;
use crate::cell::Cell;
use crate::generator::MineGenerator;
use crate::types::{self, CellCount, Coord, Coord2, nd};

/// Lifecycle of a single game. The terminal states are one-way: once the
/// game is over the board only mutates through the terminal reveal pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn has_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Outcome of an open request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    /// The request was ignored: the game is over or the coordinates fall
    /// outside the grid.
    NoChange,
    Opened,
    HitMine,
    Won,
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn ended_game(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// The game engine: owns the grid and every rule that mutates it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    non_opened_cell_count: CellCount,
    flagged_cell_count: CellCount,
    flagged_mine_count: i32,
    open_count: u32,
    game_seconds: u32,
    score: u32,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds the grid, asks the generator for the mine mask, and derives
    /// every neighbor count up front. The stored mine count is recounted
    /// from the mask, so a clamping generator stays consistent with the
    /// win condition.
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Self {
        let size = usize::from(config.grid_size);
        let bounds = (config.grid_size, config.grid_size);
        let mask = generator.generate(config);

        let mut mine_count: CellCount = 0;
        let mut cells = Array2::from_shape_fn((size, size), |(row, col)| {
            Cell::new(row as Coord, col as Coord)
        });
        for ((row, col), cell) in cells.indexed_iter_mut() {
            if mask[[row, col]] {
                cell.has_mine = true;
                mine_count += 1;
            }
            cell.neighboring_mine_count = types::neighbors((row as Coord, col as Coord), bounds)
                .filter(|&pos| mask[nd(pos)])
                .count() as u8;
        }

        let config = GameConfig::new_unchecked(config.grid_size, mine_count);
        Self {
            config,
            cells,
            non_opened_cell_count: config.total_cells() - mine_count,
            flagged_cell_count: 0,
            flagged_mine_count: 0,
            open_count: 0,
            game_seconds: 0,
            score: 0,
            status: GameStatus::InProgress,
            triggered_mine: None,
        }
    }

    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub const fn grid_size(&self) -> Coord {
        self.config.grid_size
    }

    pub const fn mine_count(&self) -> CellCount {
        self.config.mine_count
    }

    pub const fn status(&self) -> GameStatus {
        self.status
    }

    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub const fn has_won(&self) -> bool {
        self.status.has_won()
    }

    /// Safe cells still closed; the game is won when this reaches zero.
    pub const fn non_opened_cell_count(&self) -> CellCount {
        self.non_opened_cell_count
    }

    /// Currently flagged cells that truly hold mines.
    pub const fn flagged_mine_count(&self) -> i32 {
        self.flagged_mine_count
    }

    /// Currently flagged cells, right or wrong.
    pub const fn flagged_cell_count(&self) -> CellCount {
        self.flagged_cell_count
    }

    /// Counter shown next to the clock: mines minus placed flags.
    pub const fn mines_left(&self) -> i32 {
        self.config.mine_count as i32 - self.flagged_cell_count as i32
    }

    /// Open requests accepted so far, including re-opens of visible cells.
    pub const fn open_count(&self) -> u32 {
        self.open_count
    }

    pub const fn game_seconds(&self) -> u32 {
        self.game_seconds
    }

    /// Final score; zero until the game is over.
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The mine that ended a lost game.
    pub const fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        self.in_bounds(coords).then(|| &self.cells[nd(coords)])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mine_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.has_mine)
    }

    /// Opens a cell. A flagged cell is un-flagged first; a mined cell ends
    /// the game as a loss; otherwise the flood-fill opens the connected
    /// zero-region and its fringe, and draining the last safe cell ends the
    /// game as a win.
    pub fn open_cell(&mut self, coords: Coord2) -> OpenOutcome {
        if self.status.is_over() || !self.in_bounds(coords) {
            return OpenOutcome::NoChange;
        }

        if self.cells[nd(coords)].is_flagged {
            self.unflag(coords);
        }
        self.open_count += 1;

        if self.cells[nd(coords)].has_mine {
            self.cells[nd(coords)].has_opened = true;
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return OpenOutcome::HitMine;
        }

        let opened = self.flood_open(coords);
        self.non_opened_cell_count = self.non_opened_cell_count.saturating_sub(opened);
        log::debug!(
            "opened {} cells from {:?}, {} safe cells left",
            opened,
            coords,
            self.non_opened_cell_count
        );

        if self.non_opened_cell_count == 0 {
            self.end_game(true);
            OpenOutcome::Won
        } else {
            OpenOutcome::Opened
        }
    }

    /// Work-list flood-fill: opens `start`, then keeps opening the unopened
    /// neighbors of every zero-count cell it reaches. Returns how many cells
    /// this call opened. `has_opened` doubles as the visited guard.
    fn flood_open(&mut self, start: Coord2) -> CellCount {
        let bounds = self.bounds();
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[nd(coords)];
            if cell.has_opened {
                continue;
            }
            if cell.is_flagged {
                // cells reached by the flood border a zero cell and are
                // never mines, so only the flag counter moves
                cell.is_flagged = false;
                self.flagged_cell_count -= 1;
            }
            cell.has_opened = true;
            opened += 1;
            log::trace!(
                "flood opened {:?}, neighboring mines: {}",
                coords,
                cell.neighboring_mine_count
            );

            if cell.neighboring_mine_count == 0 {
                to_visit.extend(
                    types::neighbors(coords, bounds)
                        .filter(|&pos| !self.cells[nd(pos)].has_opened),
                );
            }
        }

        opened
    }

    /// Toggles the flag on a closed cell. Opened cells, finished games, and
    /// out-of-range coordinates are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.status.is_over() || !self.in_bounds(coords) {
            return FlagOutcome::NoChange;
        }

        let cell = self.cells[nd(coords)];
        if cell.is_flagged {
            self.unflag(coords);
            FlagOutcome::Changed
        } else if cell.has_opened {
            FlagOutcome::NoChange
        } else {
            self.flag(coords);
            FlagOutcome::Changed
        }
    }

    /// Advances the game clock by one second while the game runs.
    pub fn record_second(&mut self) -> u32 {
        if !self.status.is_over() {
            self.game_seconds += 1;
        }
        self.game_seconds
    }

    fn flag(&mut self, coords: Coord2) {
        let cell = &mut self.cells[nd(coords)];
        cell.is_flagged = true;
        self.flagged_cell_count += 1;
        if cell.has_mine {
            self.flagged_mine_count += 1;
        }
    }

    fn unflag(&mut self, coords: Coord2) {
        let cell = &mut self.cells[nd(coords)];
        cell.is_flagged = false;
        self.flagged_cell_count -= 1;
        if cell.has_mine {
            self.flagged_mine_count -= 1;
        }
    }

    /// Terminal transition: sweeps the grid (auto-flagging mines on a win,
    /// revealing them on a loss), clamps the clock to a full second, and
    /// settles the score.
    fn end_game(&mut self, won: bool) {
        if self.status.is_over() {
            return;
        }

        let (rows, cols) = self.bounds();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let cell = self.cells[nd(coords)];
                if !cell.has_mine {
                    continue;
                }
                if won {
                    if !cell.is_flagged {
                        self.flag(coords);
                    }
                } else {
                    self.cells[nd(coords)].has_opened = true;
                }
            }
        }

        if self.game_seconds == 0 {
            self.game_seconds = 1;
        }
        self.score = (f64::from(self.flagged_mine_count) / f64::from(self.game_seconds) * 1000.0)
            .round() as u32;
        self.status = if won { GameStatus::Won } else { GameStatus::Lost };
        log::debug!(
            "game over, won: {}, score: {}, seconds: {}",
            won,
            self.score,
            self.game_seconds
        );
    }

    const fn bounds(&self) -> Coord2 {
        (self.config.grid_size, self.config.grid_size)
    }

    fn in_bounds(&self, coords: Coord2) -> bool {
        coords.0 < self.config.grid_size && coords.1 < self.config.grid_size
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::GameConfig;
use crate::board::{Board, FlagOutcome, OpenOutcome};
use crate::error::{GameError, Result};
use crate::generator::MineGenerator;
use crate::scoreboard::Scoreboard;
use crate::types::Coord2;

/// Scoreboard shared across game sessions for the lifetime of the process.
pub type SharedScoreboard = Arc<Mutex<Scoreboard>>;

/// A session behind the lock that serializes player intents with timer
/// ticks; every engine mutation goes through it.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Notifications raised towards the presentation layer. Every body defaults
/// to a no-op so observers implement only what they render.
pub trait GameEvents: Send {
    fn on_second_passed(&mut self, game_seconds: u32) {
        let _ = game_seconds;
    }

    fn on_cell_opened(&mut self, coords: Coord2, outcome: OpenOutcome) {
        let _ = (coords, outcome);
    }

    fn on_game_over(&mut self, summary: &GameSummary) {
        let _ = summary;
    }
}

/// Snapshot handed to observers when a game reaches its terminal state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub username: String,
    pub won: bool,
    pub score: u32,
    pub game_seconds: u32,
    pub flagged_mine_count: i32,
}

/// The seam between the engine and the presentation layer: routes the
/// per-cell intents a UI raises to the board, fans notifications out to the
/// subscribed observers, and submits the finished score to the shared
/// scoreboard.
pub struct GameSession {
    username: String,
    board: Board,
    scoreboard: SharedScoreboard,
    observers: Vec<Box<dyn GameEvents>>,
}

impl GameSession {
    pub fn new(
        username: impl Into<String>,
        scoreboard: SharedScoreboard,
        config: GameConfig,
        generator: impl MineGenerator,
    ) -> Result<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(GameError::EmptyUsername);
        }
        Ok(Self {
            username,
            board: Board::new(config, generator),
            scoreboard,
            observers: Vec::new(),
        })
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn GameEvents>) {
        self.observers.push(observer);
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Read access for rendering; mutation stays behind the intents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A user asked to open the cell at `coords`.
    pub async fn request_open(&mut self, coords: Coord2) -> OpenOutcome {
        let outcome = self.board.open_cell(coords);
        if outcome.has_update() {
            for observer in &mut self.observers {
                observer.on_cell_opened(coords, outcome);
            }
        }
        if outcome.ended_game() {
            self.finish_game().await;
        }
        outcome
    }

    /// A user asked to toggle the flag on the cell at `coords`.
    pub fn request_toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        self.board.toggle_flag(coords)
    }

    /// Timer callback: advances the game clock by one second. Returns
    /// whether the timer should keep running.
    pub fn tick(&mut self) -> bool {
        if self.board.is_over() {
            return false;
        }
        let game_seconds = self.board.record_second();
        for observer in &mut self.observers {
            observer.on_second_passed(game_seconds);
        }
        true
    }

    /// Runs at most once per session: terminal outcomes are unreachable
    /// after the board reports the game over.
    async fn finish_game(&mut self) {
        let summary = GameSummary {
            username: self.username.clone(),
            won: self.board.has_won(),
            score: self.board.score(),
            game_seconds: self.board.game_seconds(),
            flagged_mine_count: self.board.flagged_mine_count(),
        };
        log::debug!(
            "{} finished, won: {}, score: {}",
            summary.username,
            summary.won,
            summary.score
        );
        for observer in &mut self.observers {
            observer.on_game_over(&summary);
        }
        self.scoreboard
            .lock()
            .await
            .add_score(summary.username.clone(), summary.score);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::generator::FixedMineGenerator;

    #[derive(Clone, Default)]
    struct Recorder(Arc<StdMutex<Vec<String>>>);

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl GameEvents for Recorder {
        fn on_second_passed(&mut self, game_seconds: u32) {
            self.0.lock().unwrap().push(format!("second {game_seconds}"));
        }

        fn on_cell_opened(&mut self, coords: Coord2, _outcome: OpenOutcome) {
            self.0.lock().unwrap().push(format!("open {coords:?}"));
        }

        fn on_game_over(&mut self, summary: &GameSummary) {
            self.0
                .lock()
                .unwrap()
                .push(format!("over won={} score={}", summary.won, summary.score));
        }
    }

    fn session(scoreboard: SharedScoreboard, mines: &[Coord2]) -> (GameSession, Recorder) {
        let config = GameConfig::new_unchecked(3, mines.len() as u16);
        let mut session =
            GameSession::new("ada", scoreboard, config, FixedMineGenerator::new(mines)).unwrap();
        let recorder = Recorder::default();
        session.subscribe(Box::new(recorder.clone()));
        (session, recorder)
    }

    #[test]
    fn empty_usernames_are_rejected() {
        let scoreboard = Arc::new(Mutex::new(Scoreboard::new()));
        let config = GameConfig::new(3, 1);
        let result = GameSession::new("  ", scoreboard, config, FixedMineGenerator::new([(0, 0)]));

        assert_eq!(result.err(), Some(GameError::EmptyUsername));
    }

    #[tokio::test]
    async fn intents_route_to_the_board_and_notify_observers() {
        let scoreboard = Arc::new(Mutex::new(Scoreboard::new()));
        let (mut session, recorder) = session(scoreboard.clone(), &[(0, 0), (2, 2)]);

        session.tick();
        assert_eq!(session.request_toggle_flag((0, 0)), FlagOutcome::Changed);
        assert_eq!(session.request_open((1, 1)).await, OpenOutcome::Opened);
        assert_eq!(session.board().game_seconds(), 1);

        assert_eq!(recorder.events(), vec!["second 1", "open (1, 1)"]);
        assert!(scoreboard.lock().await.is_empty());
    }

    #[tokio::test]
    async fn finishing_a_game_notifies_once_and_submits_the_score() {
        let scoreboard = Arc::new(Mutex::new(Scoreboard::new()));
        let (mut session, recorder) = session(scoreboard.clone(), &[(0, 0)]);
        session.request_toggle_flag((0, 0));

        assert_eq!(session.request_open((2, 2)).await, OpenOutcome::Won);
        // the game is over, further intents are ignored and nothing is
        // submitted twice
        assert_eq!(session.request_open((2, 2)).await, OpenOutcome::NoChange);
        assert!(!session.tick());

        assert_eq!(
            recorder.events(),
            vec!["open (2, 2)", "over won=true score=1000"]
        );
        let scoreboard = scoreboard.lock().await;
        assert_eq!(scoreboard.len(), 1);
        assert_eq!(scoreboard.best().unwrap().username, "ada");
        assert_eq!(scoreboard.best().unwrap().score, 1000);
    }

    #[tokio::test]
    async fn losing_submits_the_score_as_well() {
        let scoreboard = Arc::new(Mutex::new(Scoreboard::new()));
        let (mut session, recorder) = session(scoreboard.clone(), &[(0, 0), (2, 2)]);

        assert_eq!(session.request_open((0, 0)).await, OpenOutcome::HitMine);

        assert_eq!(
            recorder.events(),
            vec!["open (0, 0)", "over won=false score=0"]
        );
        assert_eq!(scoreboard.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn out_of_bounds_intents_notify_nobody() {
        let scoreboard = Arc::new(Mutex::new(Scoreboard::new()));
        let (mut session, recorder) = session(scoreboard, &[(0, 0)]);

        assert_eq!(session.request_open((9, 9)).await, OpenOutcome::NoChange);
        assert!(recorder.events().is_empty());
    }
}

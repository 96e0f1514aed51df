use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;

use crate::session::SharedSession;

/// Fires the session's tick roughly once per second until the game ends.
///
/// The task takes the session lock for each tick, so ticks never interleave
/// with an open or flag intent. It exits on its own the first time it sees
/// the game over; `stop` aborts it earlier, and dropping the timer aborts
/// the task as well.
#[derive(Debug)]
pub struct GameTimer {
    handle: JoinHandle<()>,
}

impl GameTimer {
    /// Spawns the tick task on the current runtime.
    pub fn start(session: SharedSession) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = time::interval(Duration::from_secs(1));
            // the first tick of an interval completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if !session.lock().await.tick() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for GameTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

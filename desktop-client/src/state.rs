use std::sync::{Arc, Mutex};

use ringbuffer::{AllocRingBuffer, RingBuffer};
use snake_engine::{Direction, GameState, GridValue, Position};

pub const RECENT_ROUNDS_BUFFER_SIZE: usize = 10;

#[derive(Debug, Clone, Copy)]
pub enum ClientCommand {
    Turn(Direction),
    StartRound,
}

/// Read-only copy of the game published to the UI thread once per tick.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub grid: Vec<GridValue>,
    pub score: u32,
    pub body: Vec<Position>,
    /// Body segments recolored by the death animation, counted from the head.
    pub dead_segments: usize,
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            rows: state.rows(),
            columns: state.columns(),
            grid: state.grid().to_vec(),
            score: state.score(),
            body: state.body().collect(),
            dead_segments: 0,
        }
    }

    pub fn cell(&self, row: usize, column: usize) -> GridValue {
        self.grid[row * self.columns + column]
    }
}

#[derive(Debug, Clone)]
pub enum AppState {
    Idle,
    Countdown {
        remaining: u32,
        snapshot: GameSnapshot,
    },
    Running(GameSnapshot),
    GameOver(GameSnapshot),
}

pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    recent_rounds: Arc<Mutex<AllocRingBuffer<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Idle)),
            recent_rounds: Arc::new(Mutex::new(AllocRingBuffer::new(RECENT_ROUNDS_BUFFER_SIZE))),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    pub fn add_round_result(&self, summary: String) {
        self.recent_rounds.lock().unwrap().enqueue(summary);
    }

    /// Recent round summaries, oldest first.
    pub fn recent_rounds(&self) -> Vec<String> {
        self.recent_rounds.lock().unwrap().iter().cloned().collect()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            recent_rounds: Arc::clone(&self.recent_rounds),
        }
    }
}

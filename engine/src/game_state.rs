use std::collections::VecDeque;

use crate::log;
use crate::session_rng::GameRng;
use crate::types::{Direction, GridValue, Position};

const MAX_QUEUED_TURNS: usize = 2;
const INITIAL_SNAKE_LENGTH: i32 = 3;

/// One round of snake on a fixed-size grid. Mutated only through
/// `change_direction` and `move_snake`; frozen once `game_over` is set.
#[derive(Clone, Debug)]
pub struct GameState {
    rows: usize,
    columns: usize,
    grid: Vec<GridValue>,
    body: VecDeque<Position>,
    direction: Direction,
    queued_turns: VecDeque<Direction>,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Caller must supply at least 1 row and 4 columns so the initial snake
    /// fits; `GameSettings::validate` enforces this before any loop starts.
    pub fn new(rows: usize, columns: usize, rng: &mut GameRng) -> Self {
        let mut state = Self {
            rows,
            columns,
            grid: vec![GridValue::Empty; rows * columns],
            body: VecDeque::new(),
            direction: Direction::Right,
            queued_turns: VecDeque::new(),
            score: 0,
            game_over: false,
        };
        state.add_snake();
        state.add_food(rng);
        state
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn grid(&self) -> &[GridValue] {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head_position(&self) -> Position {
        *self.body.front().expect("snake body should never be empty")
    }

    pub fn tail_position(&self) -> Position {
        *self.body.back().expect("snake body should never be empty")
    }

    /// Body segments in head-to-tail order.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn cell(&self, position: Position) -> GridValue {
        if self.outside_grid(position) {
            return GridValue::Outside;
        }
        self.grid[self.cell_index(position)]
    }

    /// Queues a turn for a future tick. Reversals, repeats of the last queued
    /// direction, and anything past two queued turns are silently dropped.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if !self.game_over && self.can_change_direction(new_direction) {
            self.queued_turns.push_back(new_direction);
        }
    }

    /// Advances the simulation by one tick. No-op once the game is over.
    pub fn move_snake(&mut self, rng: &mut GameRng) {
        if self.game_over {
            return;
        }

        if let Some(direction) = self.queued_turns.pop_front() {
            self.direction = direction;
        }

        let new_head = self.head_position().translate(self.direction);
        match self.will_hit(new_head) {
            GridValue::Outside | GridValue::Snake => {
                self.game_over = true;
                log!(
                    "Hit {} at ({}, {}). Game over, score {}",
                    if self.outside_grid(new_head) { "wall" } else { "self" },
                    new_head.row,
                    new_head.column,
                    self.score
                );
            }
            GridValue::Empty => {
                self.remove_tail();
                self.add_head(new_head);
            }
            GridValue::Food => {
                self.add_head(new_head);
                self.score += 1;
                log!(
                    "Ate food at ({}, {}). Score: {}",
                    new_head.row,
                    new_head.column,
                    self.score
                );
                self.add_food(rng);
            }
        }
    }

    fn add_snake(&mut self) {
        let row = (self.rows / 2) as i32;
        for column in 1..=INITIAL_SNAKE_LENGTH {
            self.add_head(Position::new(row, column));
        }
    }

    fn add_food(&mut self, rng: &mut GameRng) {
        let empty: Vec<Position> = self.empty_positions().collect();
        if empty.is_empty() {
            return;
        }
        let position = empty[rng.random_range(0..empty.len())];
        self.set_cell(position, GridValue::Food);
        log!("Food spawned at ({}, {})", position.row, position.column);
    }

    fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = self.columns as i32;
        (0..self.rows as i32)
            .flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
            .filter(|position| self.cell(*position) == GridValue::Empty)
    }

    fn last_queued_direction(&self) -> Direction {
        self.queued_turns.back().copied().unwrap_or(self.direction)
    }

    fn can_change_direction(&self, new_direction: Direction) -> bool {
        if self.queued_turns.len() >= MAX_QUEUED_TURNS {
            return false;
        }
        let last = self.last_queued_direction();
        new_direction != last && !new_direction.is_opposite(&last)
    }

    fn outside_grid(&self, position: Position) -> bool {
        position.row < 0
            || position.row >= self.rows as i32
            || position.column < 0
            || position.column >= self.columns as i32
    }

    /// Classifies the cell the head is about to enter. The current tail cell
    /// counts as empty: the tail vacates it on the same tick.
    fn will_hit(&self, new_head: Position) -> GridValue {
        if self.outside_grid(new_head) {
            return GridValue::Outside;
        }
        if new_head == self.tail_position() {
            return GridValue::Empty;
        }
        self.cell(new_head)
    }

    fn add_head(&mut self, position: Position) {
        self.body.push_front(position);
        self.set_cell(position, GridValue::Snake);
    }

    fn remove_tail(&mut self) {
        let tail = self.body.pop_back().expect("snake body should never be empty");
        self.set_cell(tail, GridValue::Empty);
    }

    fn cell_index(&self, position: Position) -> usize {
        position.row as usize * self.columns + position.column as usize
    }

    fn set_cell(&mut self, position: Position, value: GridValue) {
        let index = self.cell_index(position);
        self.grid[index] = value;
    }
}

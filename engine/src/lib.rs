pub mod config;
pub mod game_state;
pub mod logger;
pub mod session_rng;
pub mod settings;
pub mod types;

pub use game_state::GameState;
pub use session_rng::GameRng;
pub use settings::GameSettings;
pub use types::{Direction, GridValue, Position};

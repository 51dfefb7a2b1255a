use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, sleep};

use snake_engine::{GameRng, GameSettings, GameState};

use crate::state::{AppState, ClientCommand, GameSnapshot, SharedState};

const COUNTDOWN_SECONDS: u32 = 3;
const COUNTDOWN_STEP: Duration = Duration::from_secs(1);
const DEAD_SEGMENT_DELAY: Duration = Duration::from_millis(50);
const GAME_OVER_PAUSE: Duration = Duration::from_millis(100);

/// Drives rounds forever: idle → countdown → fixed-tick play → death
/// animation → idle. Sole writer of the `GameState`; the UI thread only sees
/// snapshots through `SharedState` and talks back over the command channel.
pub async fn run_game_task(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    settings: GameSettings,
    first_round_seed: Option<u64>,
) {
    let mut next_seed = first_round_seed;

    loop {
        if !wait_for_round_start(&mut command_rx).await {
            return;
        }

        let mut rng = match next_seed.take() {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random(),
        };
        snake_engine::log!("Starting round with seed {}", rng.seed());

        let mut game = GameState::new(
            settings.rows as usize,
            settings.columns as usize,
            &mut rng,
        );

        for remaining in (1..=COUNTDOWN_SECONDS).rev() {
            shared_state.set_state(AppState::Countdown {
                remaining,
                snapshot: GameSnapshot::capture(&game),
            });
            sleep(COUNTDOWN_STEP).await;
        }
        // Keys pressed during the countdown must not steer the first tick.
        drain_commands(&mut command_rx);

        shared_state.set_state(AppState::Running(GameSnapshot::capture(&game)));

        let mut ticker = interval(Duration::from_millis(settings.tick_interval_ms as u64));
        ticker.tick().await; // the first tick completes immediately

        while !game.game_over() {
            tokio::select! {
                _ = ticker.tick() => {
                    game.move_snake(&mut rng);
                    shared_state.set_state(AppState::Running(GameSnapshot::capture(&game)));
                }
                command = command_rx.recv() => {
                    match command {
                        Some(ClientCommand::Turn(direction)) => game.change_direction(direction),
                        Some(ClientCommand::StartRound) => {}
                        None => return,
                    }
                }
            }
        }

        let final_snapshot = show_death_animation(&shared_state, &game).await;

        let summary = format!("Score: {}", game.score());
        snake_engine::log!("Round finished. {}", summary);
        shared_state.add_round_result(summary);
        shared_state.set_state(AppState::GameOver(final_snapshot));

        // Inputs buffered while the snake was dying should not instantly
        // start the next round.
        drain_commands(&mut command_rx);
    }
}

async fn wait_for_round_start(command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>) -> bool {
    loop {
        match command_rx.recv().await {
            Some(ClientCommand::StartRound) => return true,
            Some(_) => {}
            None => return false,
        }
    }
}

fn drain_commands(command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>) {
    while command_rx.try_recv().is_ok() {}
}

/// Recolors the body head to tail, one segment per step, like the original's
/// dead-snake sweep.
async fn show_death_animation(shared_state: &SharedState, game: &GameState) -> GameSnapshot {
    let mut snapshot = GameSnapshot::capture(game);
    for revealed in 1..=snapshot.body.len() {
        snapshot.dead_segments = revealed;
        shared_state.set_state(AppState::Running(snapshot.clone()));
        sleep(DEAD_SEGMENT_DELAY).await;
    }
    sleep(GAME_OVER_PAUSE).await;
    snapshot
}

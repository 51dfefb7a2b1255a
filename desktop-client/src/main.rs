mod config;
mod game_loop;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use snake_engine::logger;

use config::get_config_manager;
use game_loop::run_game_task;
use state::SharedState;
use ui::GameApp;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Fixed seed for the first round; later rounds use random seeds.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let settings = get_config_manager(&args.config).get_config()?.game;
    snake_engine::log!(
        "Loaded settings: {}x{} grid, {} ms tick",
        settings.rows,
        settings.columns,
        settings.tick_interval_ms
    );

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let loop_settings = settings.clone();
    let first_round_seed = args.seed;
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(run_game_task(
            shared_state_clone,
            command_rx,
            loop_settings,
            first_round_seed,
        ));
    });

    let window_width = settings.columns as f32 * ui::CELL_SIZE + 40.0;
    let window_height = settings.rows as f32 * ui::CELL_SIZE + 140.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_width, window_height])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(GameApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}

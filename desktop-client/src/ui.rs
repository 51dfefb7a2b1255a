use eframe::egui;
use tokio::sync::mpsc;

use snake_engine::{Direction, GridValue};

use crate::state::{AppState, ClientCommand, GameSnapshot, SharedState};

pub const CELL_SIZE: f32 = 32.0;

const EMPTY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x20, 0x30, 0x20);
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe5, 0x39, 0x35);
const DEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x9e, 0x9e, 0x9e);

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl GameApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
        }
    }

    fn handle_game_input(&self, ctx: &egui::Context) {
        ctx.input(|i| {
            let mut new_direction = None;

            if i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::Right);
            }

            if let Some(direction) = new_direction {
                let _ = self.command_tx.send(ClientCommand::Turn(direction));
            }
        });
    }

    fn handle_start_input(&self, ctx: &egui::Context) {
        let any_key_pressed = ctx.input(|i| {
            i.events
                .iter()
                .any(|event| matches!(event, egui::Event::Key { pressed: true, .. }))
        });
        if any_key_pressed {
            let _ = self.command_tx.send(ClientCommand::StartRound);
        }
    }

    fn draw_grid(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let canvas_size = egui::Vec2::new(
            snapshot.columns as f32 * CELL_SIZE,
            snapshot.rows as f32 * CELL_SIZE,
        );
        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::hover());
        let origin = response.rect.min;

        let cell_rect = |row: usize, column: usize| {
            egui::Rect::from_min_size(
                egui::pos2(
                    origin.x + column as f32 * CELL_SIZE,
                    origin.y + row as f32 * CELL_SIZE,
                ),
                egui::vec2(CELL_SIZE, CELL_SIZE),
            )
        };

        for row in 0..snapshot.rows {
            for column in 0..snapshot.columns {
                let color = match snapshot.cell(row, column) {
                    GridValue::Snake => SNAKE_COLOR,
                    GridValue::Food => FOOD_COLOR,
                    GridValue::Empty | GridValue::Outside => EMPTY_COLOR,
                };
                painter.rect_filled(cell_rect(row, column).shrink(1.0), 0.0, color);
            }
        }

        for position in snapshot.body.iter().take(snapshot.dead_segments) {
            let rect = cell_rect(position.row as usize, position.column as usize);
            painter.rect_filled(rect.shrink(1.0), 0.0, DEAD_COLOR);
        }
    }

    fn show_recent_rounds(&self, ui: &mut egui::Ui) {
        let rounds = self.shared_state.recent_rounds();
        if rounds.is_empty() {
            return;
        }
        ui.separator();
        ui.label("Recent rounds:");
        for entry in rounds.iter().rev() {
            ui.label(entry);
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.shared_state.get_state();

        egui::CentralPanel::default().show(ctx, |ui| match &state {
            AppState::Idle => {
                self.handle_start_input(ctx);
                ui.heading("Snake");
                ui.separator();
                ui.label("Press any key to start");
                self.show_recent_rounds(ui);
            }
            AppState::Countdown { remaining, snapshot } => {
                ui.heading(format!("Starting in {}...", remaining));
                ui.separator();
                self.draw_grid(ui, snapshot);
            }
            AppState::Running(snapshot) => {
                // Arrow keys are ignored once the death animation starts.
                if snapshot.dead_segments == 0 {
                    self.handle_game_input(ctx);
                }
                ui.heading(format!("Score: {}", snapshot.score));
                ui.separator();
                self.draw_grid(ui, snapshot);
            }
            AppState::GameOver(snapshot) => {
                self.handle_start_input(ctx);
                ui.heading(format!("Game over. Score: {}", snapshot.score));
                ui.separator();
                self.draw_grid(ui, snapshot);
                ui.label("Press any key to start");
                self.show_recent_rounds(ui);
            }
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}

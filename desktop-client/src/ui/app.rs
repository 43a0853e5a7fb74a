use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use common::log;
use eframe::egui;

use super::game::{BoardAction, TicTacToeGameUi};

pub struct TicTacToeApp {
    session: TicTacToeSession,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        Self {
            session: TicTacToeSession::new(settings),
            game_ui: TicTacToeGameUi::new(),
        }
    }

    fn handle_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::CellSelected(index) => {
                // Occupied cells and clicks after the game ended are no-ops.
                if let Err(e) = self.session.on_cell_selected(index) {
                    log!("Ignored click on cell {}: {}", index, e);
                }
            }
            BoardAction::Restart => self.session.on_restart_requested(),
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            action = self.game_ui.render_game(ui, &self.session);
        });

        if let Some(action) = action {
            self.handle_action(action);
            ctx.request_repaint();
        }
    }
}

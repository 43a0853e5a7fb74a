use common::games::tictactoe::{BOARD_SIDE, Cell, Outcome, TicTacToeSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    CellSelected(usize),
    Restart,
}

pub struct TicTacToeGameUi {
    last_hover: Option<usize>,
}

impl Default for TicTacToeGameUi {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameUi {
    const BOARD_PADDING: f32 = 20.0;
    const INFO_PANEL_HEIGHT: f32 = 130.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let board_width = available_width - Self::BOARD_PADDING * 2.0;
        let board_height = available_height - Self::INFO_PANEL_HEIGHT - Self::BOARD_PADDING * 2.0;
        let cell_size = board_width.min(board_height) / BOARD_SIDE as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    fn cell_rect(board_rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let x = (index % BOARD_SIDE) as f32;
        let y = (index / BOARD_SIDE) as f32;
        egui::Rect::from_min_size(
            egui::pos2(board_rect.left() + x * cell_size, board_rect.top() + y * cell_size),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn cell_at(board_rect: egui::Rect, pos: egui::Pos2, cell_size: f32) -> Option<usize> {
        if !board_rect.contains(pos) {
            return None;
        }
        let x = ((pos.x - board_rect.left()) / cell_size) as usize;
        let y = ((pos.y - board_rect.top()) / cell_size) as usize;
        (x < BOARD_SIDE && y < BOARD_SIDE).then_some(y * BOARD_SIDE + x)
    }

    /// Draws the board and info panel; returns what the player asked for this frame.
    pub fn render_game(&mut self, ui: &mut egui::Ui, session: &TicTacToeSession) -> Option<BoardAction> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());

        let mut action = None;
        ui.vertical_centered(|ui| {
            ui.add_space(Self::BOARD_PADDING);
            if let Some(index) = self.render_board(ui, session, cell_size) {
                action = Some(BoardAction::CellSelected(index));
            }
            ui.add_space(Self::BOARD_PADDING);
            if self.render_info_panel(ui, session) {
                action = Some(BoardAction::Restart);
            }
        });
        action
    }

    fn render_board(&mut self, ui: &mut egui::Ui, session: &TicTacToeSession, cell_size: f32) -> Option<usize> {
        let board_side = cell_size * BOARD_SIDE as f32;
        let (rect, response) = ui.allocate_exact_size(egui::vec2(board_side, board_side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        if let Some(index) = session.last_move() {
            painter.rect_filled(
                Self::cell_rect(rect, index, cell_size),
                0.0,
                egui::Color32::from_rgb(255, 245, 200),
            );
        }

        for i in 0..=BOARD_SIDE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        for (index, cell) in session.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match cell {
                Cell::X => self.draw_x(painter, cell_rect),
                Cell::O => self.draw_o(painter, cell_rect),
                Cell::Empty => {}
            }
        }

        if let Some([start, _, end]) = session.winning_line() {
            painter.line_segment(
                [
                    Self::cell_rect(rect, start, cell_size).center(),
                    Self::cell_rect(rect, end, cell_size).center(),
                ],
                egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
            );
        }

        if !session.is_human_turn() {
            self.last_hover = None;
            return None;
        }

        self.last_hover = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, pos, cell_size))
            .filter(|&index| session.board().get(index) == Some(Cell::Empty));

        if let Some(index) = self.last_hover {
            painter.rect_filled(
                Self::cell_rect(rect, index, cell_size),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|pos| Self::cell_at(rect, pos, cell_size));
        }

        None
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }

    /// Returns true when a restart was requested.
    fn render_info_panel(&self, ui: &mut egui::Ui, session: &TicTacToeSession) -> bool {
        let human = session.settings().human_player;
        ui.label(format!("You: {}    Computer: {}", human, human.opponent()));

        match session.outcome() {
            Outcome::Ongoing if session.is_human_turn() => {
                ui.colored_label(egui::Color32::DARK_GREEN, format!("Your turn ({})", human));
            }
            Outcome::Ongoing => {
                ui.label(format!("Computer's turn ({})", human.opponent()));
            }
            Outcome::Won(player) if player == human => {
                ui.colored_label(egui::Color32::DARK_GREEN, egui::RichText::new("You won!").strong());
            }
            Outcome::Won(_) | Outcome::Draw => {}
        }

        if let Some(message) = session.status_message() {
            ui.label(egui::RichText::new(message).size(18.0).strong());
        }

        let mut restart = false;
        ui.horizontal(|ui| {
            if session.restart_visible() && ui.button("Restart").clicked() {
                restart = true;
            }
            if !session.restart_visible() && ui.button("New game").clicked() {
                restart = true;
            }
        });
        restart
    }
}

//! Board built from one mouse area per cell

use crate::input::BoardMessage;
use crate::styles;
use checkers_core::{BOARD_SIZE, BoardView, Cell, Player, Square};
use iced::widget::{column, container, mouse_area, row, text};
use iced::{Color, Element};

/// Retained-widget binding: each cell reports its own press and release,
/// so no pixel mapping is needed.
pub struct WidgetBoard<'a, V> {
    game: &'a V,
    square_size: f32,
}

impl<'a, V: BoardView> WidgetBoard<'a, V> {
    pub fn new(game: &'a V, square_size: f32) -> Self {
        Self { game, square_size }
    }

    pub fn view(&self) -> Element<'a, BoardMessage> {
        let hints = self.game.highlighted_destinations();
        let mut board_column = column![].spacing(0);

        for r in 0..BOARD_SIZE as i8 {
            let mut board_row = row![].spacing(0);
            for c in 0..BOARD_SIZE as i8 {
                if let Some(sq) = Square::new(r, c) {
                    board_row = board_row.push(self.render_square(sq, hints.contains(&sq)));
                }
            }
            board_column = board_column.push(board_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn render_square(&self, sq: Square, is_hint: bool) -> Element<'a, BoardMessage> {
        let size = self.square_size;
        let bg_color = styles::square_color(sq, self.game.selection() == Some(sq));

        let content: Element<'a, BoardMessage> = match self.game.cell(sq) {
            Cell::Piece(player) => text("\u{25cf}")
                .size(size * 0.8)
                .color(piece_color(player))
                .center()
                .into(),
            Cell::Empty if is_hint => text("\u{25cf}")
                .size(size * 0.3)
                .color(styles::MOVE_HINT)
                .center()
                .into(),
            Cell::Empty => text("").into(),
        };

        let square = container(content)
            .center_x(size)
            .center_y(size)
            .style(move |_theme| container::Style {
                background: Some(iced::Background::Color(bg_color)),
                ..Default::default()
            });

        mouse_area(square)
            .on_press(BoardMessage::Pressed(sq.row(), sq.col()))
            .on_release(BoardMessage::Released(sq.row(), sq.col()))
            .into()
    }
}

pub fn piece_color(player: Player) -> Color {
    match player {
        Player::Black => styles::BLACK_PIECE,
        Player::Red => styles::RED_PIECE,
    }
}

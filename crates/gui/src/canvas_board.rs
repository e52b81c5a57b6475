//! Board drawn on a single canvas

use crate::input::{BoardGeometry, BoardMessage};
use crate::styles;
use crate::widget_board::piece_color;
use checkers_core::{BoardView, Cell, Square};
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path};
use iced::{mouse, Element, Point, Rectangle, Renderer, Size, Theme};

/// Canvas binding: draws every square itself and maps raw cursor positions
/// to cells through [`BoardGeometry`].
pub struct CanvasBoard<'a, V> {
    game: &'a V,
    geometry: BoardGeometry,
}

impl<'a, V: BoardView + 'a> CanvasBoard<'a, V> {
    pub fn new(game: &'a V, geometry: BoardGeometry) -> Self {
        Self { game, geometry }
    }

    pub fn view(self) -> Element<'a, BoardMessage> {
        let extent = self.geometry.extent();
        Canvas::new(self).width(extent).height(extent).into()
    }

    fn draw_square(&self, frame: &mut Frame, sq: Square, is_hint: bool) {
        let size = self.geometry.square_size;
        let (x, y) = self.geometry.cell_origin(sq.row(), sq.col());
        let top_left = Point::new(x, y);
        let center = Point::new(x + size / 2.0, y + size / 2.0);

        let bg_color = styles::square_color(sq, self.game.selection() == Some(sq));
        frame.fill_rectangle(top_left, Size::new(size, size), bg_color);

        match self.game.cell(sq) {
            Cell::Piece(player) => {
                let piece = Path::circle(center, size / 2.0 - styles::PIECE_INSET);
                frame.fill(&piece, piece_color(player));
            }
            Cell::Empty if is_hint => {
                let dot = Path::circle(center, size * 0.15);
                frame.fill(&dot, styles::MOVE_HINT);
            }
            Cell::Empty => {}
        }
    }
}

impl<V: BoardView> canvas::Program<BoardMessage> for CanvasBoard<'_, V> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<BoardMessage>) {
        let Some(position) = cursor.position_in(bounds) else {
            return (canvas::event::Status::Ignored, None);
        };
        let Some((row, col)) = self.geometry.cell_at(position.x, position.y) else {
            return (canvas::event::Status::Ignored, None);
        };

        let message = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                BoardMessage::Pressed(row, col)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                BoardMessage::Released(row, col)
            }
            _ => return (canvas::event::Status::Ignored, None),
        };
        (canvas::event::Status::Captured, Some(message))
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let hints = self.game.highlighted_destinations();

        for sq in Square::all() {
            self.draw_square(&mut frame, sq, hints.contains(&sq));
        }

        vec![frame.into_geometry()]
    }
}

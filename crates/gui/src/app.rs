//! Main application state and logic

use crate::canvas_board::CanvasBoard;
use crate::config::{BoardStyle, GuiConfig};
use crate::input::{BoardGeometry, BoardMessage};
use crate::styles::PANEL_WIDTH;
use crate::widget_board::WidgetBoard;

use checkers_core::{BoardView, GameState, Player, PointerInput, TurnPhase};
use iced::widget::{button, column, container, horizontal_rule, pick_list, row, text, vertical_space};
use iced::{Element, Length, Task, Theme};
use tracing::info;

/// Main application state
pub struct CheckersApp {
    /// Game state, owned here and lent to the board bindings
    game: GameState,
    /// Active board binding
    board_style: BoardStyle,
    config: GuiConfig,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    BoardStyleChanged(BoardStyle),
}

impl CheckersApp {
    pub fn new(config: GuiConfig) -> (Self, Task<Message>) {
        (
            Self {
                game: GameState::new(),
                board_style: config.board_style,
                config,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("{} - {} to move", self.config.title, self.game.current_player())
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::Pressed(row, col)) => {
                self.game.handle_press(row, col);
            }
            Message::Board(BoardMessage::Released(row, col)) => {
                self.game.handle_release(row, col);
            }
            Message::NewGame => {
                self.game.reset();
                info!("new game");
            }
            Message::BoardStyleChanged(style) => {
                self.board_style = style;
                info!(%style, "board style changed");
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = match self.board_style {
            BoardStyle::Canvas => {
                CanvasBoard::new(&self.game, BoardGeometry::new(self.config.square_size)).view()
            }
            BoardStyle::Widgets => WidgetBoard::new(&self.game, self.config.square_size).view(),
        }
        .map(Message::Board);

        row![
            board,
            container(self.control_panel())
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let style_picker = pick_list(
            BoardStyle::ALL,
            Some(self.board_style),
            Message::BoardStyleChanged,
        )
        .width(Length::Fill);

        let player = self.game.current_player();
        let status = match self.game.phase() {
            TurnPhase::AwaitingSelection => format!("{player} to move"),
            TurnPhase::AwaitingRelease => format!("{player}: drop the piece"),
        };

        column![
            new_game_btn,
            vertical_space().height(20),
            text("Board").size(14),
            style_picker,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status).size(16),
            vertical_space().height(10),
            text(format!("Black pieces: {}", self.game.piece_count(Player::Black))).size(14),
            text(format!("Red pieces: {}", self.game.piece_count(Player::Red))).size(14),
        ]
        .spacing(5)
        .into()
    }
}

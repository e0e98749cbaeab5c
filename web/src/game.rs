use clap::Args;
use tictac_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Taken(game::Token),
}

impl ViewCellState {
    fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Taken(token) => token.symbol(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    /// Fresh board after a restart, nobody has moved yet.
    Ready,
    Active,
    Won(game::Token),
    Tied,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    pub engine: game::GameEngine,
    pub move_count: u32,
    pub restarted: bool,
}

impl GameSession {
    fn new(config: game::GameConfig) -> Self {
        Self {
            engine: game::GameEngine::new(config),
            move_count: 0,
            restarted: false,
        }
    }

    fn view_state(&self) -> ViewGameState {
        use game::GameState::*;
        match self.engine.check_game_state() {
            InProgress if self.restarted && self.move_count == 0 => ViewGameState::Ready,
            InProgress => ViewGameState::Active,
            Win(token) => ViewGameState::Won(token),
            Tie => ViewGameState::Tied,
        }
    }

    fn cell_state_at(&self, index: game::CellIndex) -> ViewCellState {
        match self.engine.board().cell_at(index).map(game::Cell::token) {
            Ok(Some(token)) => ViewCellState::Taken(token),
            Ok(None) | Err(_) => ViewCellState::Empty,
        }
    }

    fn can_interact_at(&self, index: game::CellIndex) -> bool {
        !self.engine.is_finished() && matches!(self.cell_state_at(index), ViewCellState::Empty)
    }

    fn status_message(&self) -> String {
        match self.view_state() {
            ViewGameState::Ready => "Please Select".to_string(),
            ViewGameState::Active => format!("{}'s turn...", self.engine.active_player()),
            ViewGameState::Won(token) => format!("{} Win", self.engine.player(token)),
            ViewGameState::Tied => "It's a tie".to_string(),
        }
    }

    fn play(&mut self, index: game::CellIndex) -> bool {
        match self.engine.take_turn(index) {
            Ok(outcome) => {
                if outcome.has_update() {
                    self.move_count = self.move_count.saturating_add(1);
                }
                log::debug!("cell {}: {:?}", index, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("move at cell {} rejected: {}", index, err);
                false
            }
        }
    }

    /// Symbol and name of each player, in seat order.
    fn legend(&self) -> Vec<(char, &str)> {
        self.engine
            .players()
            .iter()
            .map(|player| (player.token().symbol(), player.name()))
            .collect()
    }

    fn restart(&mut self) {
        self.engine.restart();
        self.move_count = 0;
        self.restarted = true;
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(game::CellIndex),
    Restart,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: game::CellIndex,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        index,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        match cell_state {
            Empty => classes!(),
            Taken(game::Token::Player1) => classes!("taken", "x"),
            Taken(game::Token::Player2) => classes!("taken", "o"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick} disabled={locked} data-cell={index.to_string()}>
            {cell_state.symbol().to_string()}
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Name shown for the player placing X
    #[arg(long)]
    player1: Option<String>,

    /// Name shown for the player placing O
    #[arg(long)]
    player2: Option<String>,
}

impl GameProps {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(
            self.player1.as_deref().unwrap_or_default(),
            self.player2.as_deref().unwrap_or_default(),
        )
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: GameSession,
}

impl GameView {
    fn get_game_state_class(&self) -> Classes {
        classes!(match self.game.view_state() {
            ViewGameState::Ready => "not-started",
            ViewGameState::Active => "in-progress",
            ViewGameState::Won(_) => "win",
            ViewGameState::Tied => "tie",
        })
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            game: GameSession::new(ctx.props().game_config()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => {
                log::debug!("play cell: {}", index);
                self.game.play(index)
            }
            Restart => {
                log::debug!("restart");
                self.game.restart();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::{SIDE, cell_index};

        let game_state_class = self.get_game_state_class();
        let message = self.game.status_message();
        let cb_restart = ctx.link().callback(|_: MouseEvent| Msg::Restart);

        html! {
            <div class="tictac">
                <ul class="players">
                    {
                        for self.game.legend().into_iter().map(|(symbol, name)| html! {
                            <li>{format!("{symbol}: {name}")}</li>
                        })
                    }
                </ul>
                <p class="message">{message}</p>
                <div class={classes!("board", game_state_class)}>
                    {
                        for (0..SIDE).map(|row| html! {
                            <div class="row">
                                {
                                    for (0..SIDE).map(|col| {
                                        let index = cell_index(row, col);
                                        let cell_state = self.game.cell_state_at(index);
                                        let locked = !self.game.can_interact_at(index);
                                        let callback = ctx.link().callback(Msg::Play);
                                        html! {
                                            <CellView {index} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <button class="btn-restart" onclick={cb_restart}>{"Restart"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(game::GameConfig::new("Ada", "Grace"))
    }

    #[test]
    fn status_follows_active_player() {
        let mut session = session();
        assert_eq!(session.status_message(), "Ada's turn...");

        assert!(session.play(4));

        assert_eq!(session.status_message(), "Grace's turn...");
        assert_eq!(
            session.cell_state_at(4),
            ViewCellState::Taken(game::Token::Player1)
        );
        assert!(!session.can_interact_at(4));
        assert!(session.can_interact_at(0));
    }

    #[test]
    fn win_locks_every_cell_and_names_winner() {
        let mut session = session();
        for index in [0, 3, 1, 4, 2] {
            assert!(session.play(index));
        }

        assert_eq!(
            session.view_state(),
            ViewGameState::Won(game::Token::Player1)
        );
        assert_eq!(session.status_message(), "Ada Win");
        assert!((0..9).all(|index| !session.can_interact_at(index)));
        assert!(!session.play(5));
        assert_eq!(session.cell_state_at(5), ViewCellState::Empty);
    }

    #[test]
    fn tie_is_reported() {
        let mut session = session();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(session.play(index));
        }

        assert_eq!(session.view_state(), ViewGameState::Tied);
        assert_eq!(session.status_message(), "It's a tie");
    }

    #[test]
    fn taken_cell_is_not_counted_as_a_move() {
        let mut session = session();
        assert!(session.play(4));

        assert!(!session.play(4));
        assert_eq!(session.move_count, 1);
        assert_eq!(session.status_message(), "Grace's turn...");
    }

    #[test]
    fn restart_asks_for_a_selection_until_first_move() {
        let mut session = session();
        session.play(0);
        session.play(1);

        session.restart();

        assert_eq!(session.view_state(), ViewGameState::Ready);
        assert_eq!(session.status_message(), "Please Select");
        assert_eq!(session.engine.active_token(), game::Token::Player1);
        assert!(session.play(8));
        assert_eq!(session.status_message(), "Grace's turn...");
    }

    #[test]
    fn legend_lists_players_in_seat_order() {
        let session = session();

        assert_eq!(session.legend(), vec![('X', "Ada"), ('O', "Grace")]);
    }

    #[test]
    fn props_fall_back_to_default_names() {
        let props = GameProps {
            player1: None,
            player2: Some("Grace".to_string()),
        };

        let config = props.game_config();

        assert_eq!(config.player1, game::GameConfig::DEFAULT_PLAYER1);
        assert_eq!(config.player2, "Grace");
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Win(Token),
    Tie,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win(_) | Self::Tie)
    }

    pub const fn winner(self) -> Option<Token> {
        match self {
            Self::Win(token) => Some(token),
            Self::InProgress | Self::Tie => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    pub selection: SelectOutcome,
    pub state: GameState,
}

impl RoundOutcome {
    pub const fn has_update(self) -> bool {
        self.selection.has_update()
    }
}

/// Turn order and outcome for one game between two players.
///
/// The game state is never stored: [`GameEngine::check_game_state`]
/// recomputes it from the board and the active player on every call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    active: Token,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let GameConfig { player1, player2 } = config;
        Self {
            board: Board::new(),
            players: [
                Player::new(player1, Token::Player1),
                Player::new(player2, Token::Player2),
            ],
            active: Token::Player1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        self.board.cells()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, token: Token) -> &Player {
        match token {
            Token::Player1 => &self.players[0],
            Token::Player2 => &self.players[1],
        }
    }

    pub fn active_token(&self) -> Token {
        self.active
    }

    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.check_game_state()
            .winner()
            .map(|token| self.player(token))
    }

    /// Whether any player holds a line or the board is full, regardless of
    /// whose turn it is.
    pub fn is_finished(&self) -> bool {
        self.board.has_line(Token::Player1)
            || self.board.has_line(Token::Player2)
            || self.board.is_full()
    }

    /// Only the active player's cells are checked for a line: a round that
    /// completes a line never hands the turn over.
    pub fn check_game_state(&self) -> GameState {
        if self.board.has_line(self.active) {
            GameState::Win(self.active)
        } else if self.board.is_full() {
            GameState::Tie
        } else {
            GameState::InProgress
        }
    }

    /// Hands the turn to the other player. Ignored once the game is
    /// decided, so the reported winner stays put.
    pub fn switch_player(&mut self) {
        if self.is_finished() {
            log::debug!("game decided, {} keeps the turn", self.active_player());
            return;
        }
        self.active = self.active.opponent();
    }

    pub fn play_round(&mut self, index: CellIndex) -> Result<GameState> {
        self.take_turn(index).map(|outcome| outcome.state)
    }

    /// Places the active player's token at `index` and passes the turn on
    /// unless the round decided the game.
    ///
    /// Picking a taken cell changes nothing and the same player moves
    /// again.
    pub fn take_turn(&mut self, index: CellIndex) -> Result<RoundOutcome> {
        self.check_not_finished()?;

        let selection = self.board.select_cell(index, self.active)?;
        if !selection.has_update() {
            log::debug!(
                "cell {} already taken, {} moves again",
                index,
                self.active_player()
            );
            return Ok(RoundOutcome {
                selection,
                state: self.check_game_state(),
            });
        }

        log::debug!("{} took cell {}", self.active_player(), index);
        log::trace!("board:\n{}", self.board);

        let state = self.check_game_state();
        match state {
            GameState::InProgress => {
                self.switch_player();
                log::debug!("it is {}'s turn", self.active_player());
            }
            GameState::Win(token) => log::debug!("{} wins", self.player(token)),
            GameState::Tie => log::debug!("game tied"),
        }

        Ok(RoundOutcome { selection, state })
    }

    /// Clears the board and gives the first move back to player one.
    pub fn restart(&mut self) {
        self.board.reset();
        self.active = Token::Player1;
        log::debug!("game restarted");
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyDecided)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

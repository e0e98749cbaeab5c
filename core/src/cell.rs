use serde::{Deserialize, Serialize};

/// Mark placed by one of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Player1,
    Player2,
}

impl Token {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Player1 => 'X',
            Self::Player2 => 'O',
        }
    }
}

/// State of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Empty => None,
            Self::Player1 => Some(Token::Player1),
            Self::Player2 => Some(Token::Player2),
        }
    }

    pub const fn symbol(self) -> char {
        match self.token() {
            Some(token) => token.symbol(),
            None => ' ',
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        match token {
            Token::Player1 => Cell::Player1,
            Token::Player2 => Cell::Player2,
        }
    }
}

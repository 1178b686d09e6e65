use std::num::ParseIntError;
use std::str::FromStr;

use cozy_chess::{BitBoard, Color, Piece, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const NUM_FIELDS: usize = 6;

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("not enough position fields: expected 6, got {found}")]
    MissingFields { found: usize },
    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(ParseIntError),
    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(ParseIntError),
}

/// Castling availability as four independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1 << 0;
    pub const WHITE_QUEENSIDE: u8 = 1 << 1;
    pub const BLACK_KINGSIDE: u8 = 1 << 2;
    pub const BLACK_QUEENSIDE: u8 = 1 << 3;

    pub const NONE: Self = Self(0);

    #[inline(always)]
    pub fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// True if the color may still castle on either wing.
    #[inline(always)]
    pub fn any_for(self, color: Color) -> bool {
        match color {
            Color::White => self.has(Self::WHITE_KINGSIDE | Self::WHITE_QUEENSIDE),
            Color::Black => self.has(Self::BLACK_KINGSIDE | Self::BLACK_QUEENSIDE),
        }
    }

    // Each letter counts by presence alone; anything else in the field is ignored.
    fn parse(field: &str) -> Self {
        let mut bits = 0;
        for (letter, flag) in [
            ('K', Self::WHITE_KINGSIDE),
            ('Q', Self::WHITE_QUEENSIDE),
            ('k', Self::BLACK_KINGSIDE),
            ('q', Self::BLACK_QUEENSIDE),
        ] {
            if field.contains(letter) {
                bits |= flag;
            }
        }
        Self(bits)
    }
}

/// A parsed position: the board split into per-color, per-piece square lists
/// plus the remaining position fields.
///
/// Parsing is deliberately lenient. Only the field count and the two move
/// counters are checked; board text that does not describe a legal position
/// still produces whatever piece lists it spells out.
#[derive(Debug, Clone)]
pub struct Position {
    board: String,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: i32,
    fullmove_number: i32,
    pieces: [[Vec<Square>; Piece::NUM]; Color::NUM],
}

impl Position {
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < NUM_FIELDS {
            return Err(FormatError::MissingFields {
                found: fields.len(),
            });
        }

        let halfmove_clock = fields[4]
            .parse()
            .map_err(FormatError::InvalidHalfmoveClock)?;
        let fullmove_number = fields[5]
            .parse()
            .map_err(FormatError::InvalidFullmoveNumber)?;

        let side_to_move = if fields[1] == "w" {
            Color::White
        } else {
            Color::Black
        };

        Ok(Self {
            board: fields[0].to_string(),
            side_to_move,
            castling: CastlingRights::parse(fields[2]),
            en_passant: fields[3].parse().ok(),
            halfmove_clock,
            fullmove_number,
            pieces: parse_board(fields[0]),
        })
    }

    #[inline(always)]
    pub fn board(&self) -> &str {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline(always)]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> i32 {
        self.halfmove_clock
    }

    #[inline(always)]
    pub fn fullmove_number(&self) -> i32 {
        self.fullmove_number
    }

    /// Squares holding `piece` of `color`, in board-text order.
    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> &[Square] {
        &self.pieces[color as usize][piece as usize]
    }

    /// The first recorded king of `color`, if any.
    #[inline(always)]
    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).first().copied()
    }

    #[inline(always)]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces(color, piece).len()
    }

    /// Occupancy of `piece` of `color` as a bitboard. Duplicate squares collapse.
    pub fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.pieces(color, piece)
            .iter()
            .fold(BitBoard::EMPTY, |bb, sq| bb | sq.bitboard())
    }
}

impl FromStr for Position {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::parse(s)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::parse(STARTING_FEN).expect("starting position is well-formed")
    }
}

fn parse_board(board: &str) -> [[Vec<Square>; Piece::NUM]; Color::NUM] {
    let mut pieces: [[Vec<Square>; Piece::NUM]; Color::NUM] = Default::default();

    let mut rank: i32 = 7;
    let mut file: i32 = 0;
    let mut chars = board.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '/' {
            rank -= 1;
            file = 0;
            continue;
        }

        if let Some(digit) = ch.to_digit(10) {
            // a run of digits is one gap count
            let mut gap = digit as i32;
            while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                gap = gap.saturating_mul(10).saturating_add(next as i32);
                chars.next();
            }
            file = file.saturating_add(gap);
            continue;
        }

        let square = rank
            .checked_mul(8)
            .and_then(|r| r.checked_add(file))
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(Square::try_index);
        file = file.saturating_add(1);

        let Some(piece) = piece_from_letter(ch) else {
            log::trace!("dropping unrecognised board character '{}'", ch);
            continue;
        };
        let Some(square) = square else {
            log::trace!("dropping '{}' outside the board (rank {}, file {})", ch, rank, file - 1);
            continue;
        };

        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        pieces[color as usize][piece as usize].push(square);
    }

    pieces
}

fn piece_from_letter(ch: char) -> Option<Piece> {
    match ch.to_ascii_uppercase() {
        'P' => Some(Piece::Pawn),
        'N' => Some(Piece::Knight),
        'B' => Some(Piece::Bishop),
        'R' => Some(Piece::Rook),
        'Q' => Some(Piece::Queen),
        'K' => Some(Piece::King),
        _ => None,
    }
}

//! Token kinds and their static spellings.

use std::fmt;

/// Kind of a scanned token.
///
/// Discriminants are laid out in contiguous bands so that category checks
/// are a single range comparison:
///
/// | Range   | Category                                    |
/// |---------|---------------------------------------------|
/// | 0-9     | Dynamic: text comes from the source         |
/// | 16-57   | Operators and punctuation                   |
/// | 64-94   | Keywords                                    |
/// | 120-121 | Specials (`EOF`, terminator)                |
///
/// Every kind outside the dynamic band has a static spelling and carries no
/// literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Dynamic (0-9) ===
    Illegal = 0,
    Comment = 1,
    Identifier = 2,
    String = 3,
    Character = 4,
    BinaryInteger = 5,
    OctalInteger = 6,
    DecimalInteger = 7,
    HexadecimalInteger = 8,
    DecimalFloat = 9,

    // === Operators and punctuation (16-57) ===
    BlankIdentifier = 16,
    Define = 17,
    Equal = 18,
    NotEqual = 19,
    LessOrEqual = 20,
    GreaterOrEqual = 21,
    RightArrow = 22,
    Increment = 23,
    Decrement = 24,
    AddAssign = 25,
    SubtractAssign = 26,
    MultiplyAssign = 27,
    QuotientAssign = 28,
    RemainderAssign = 29,
    LogicalAnd = 30,
    LogicalOr = 31,
    LeftShift = 32,
    RightShift = 33,
    LeftArrow = 34,
    BitClear = 35,
    Assign = 36,
    Colon = 37,
    Semicolon = 38,
    Plus = 39,
    Minus = 40,
    Asterisk = 41,
    Slash = 42,
    Percent = 43,
    Ampersand = 44,
    Pipe = 45,
    Caret = 46,
    Not = 47,
    Period = 48,
    Comma = 49,
    Less = 50,
    Greater = 51,
    LeftCurlyBracket = 52,
    RightCurlyBracket = 53,
    LeftRoundBracket = 54,
    RightRoundBracket = 55,
    LeftSquareBracket = 56,
    RightSquareBracket = 57,

    // === Keywords (64-94) ===
    Import = 64,
    Function = 65,
    Continue = 66,
    Return = 67,
    Break = 68,
    Const = 69,
    Case = 70,
    For = 71,
    Else = 72,
    If = 73,
    ElseIf = 74,
    Defer = 75,
    Default = 76,
    Interface = 77,
    Map = 78,
    Module = 79,
    Dirty = 80,
    Immutable = 81,
    In = 82,
    Var = 83,
    Type = 84,
    Switch = 85,
    Struct = 86,
    Pub = 87,
    Ku = 88,
    Select = 89,
    Package = 90,
    Goto = 91,
    Chan = 92,
    Loop = 93,
    While = 94,

    // === Specials (120-121) ===
    Eof = 120,
    Terminator = 121,
}

impl TokenKind {
    const DYNAMIC_END: u8 = TokenKind::DecimalFloat as u8;
    const KEYWORD_START: u8 = TokenKind::Import as u8;
    const KEYWORD_END: u8 = TokenKind::While as u8;

    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; 85] = [
        TokenKind::Illegal,
        TokenKind::Comment,
        TokenKind::Identifier,
        TokenKind::String,
        TokenKind::Character,
        TokenKind::BinaryInteger,
        TokenKind::OctalInteger,
        TokenKind::DecimalInteger,
        TokenKind::HexadecimalInteger,
        TokenKind::DecimalFloat,
        TokenKind::BlankIdentifier,
        TokenKind::Define,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::LessOrEqual,
        TokenKind::GreaterOrEqual,
        TokenKind::RightArrow,
        TokenKind::Increment,
        TokenKind::Decrement,
        TokenKind::AddAssign,
        TokenKind::SubtractAssign,
        TokenKind::MultiplyAssign,
        TokenKind::QuotientAssign,
        TokenKind::RemainderAssign,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::LeftShift,
        TokenKind::RightShift,
        TokenKind::LeftArrow,
        TokenKind::BitClear,
        TokenKind::Assign,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Asterisk,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Ampersand,
        TokenKind::Pipe,
        TokenKind::Caret,
        TokenKind::Not,
        TokenKind::Period,
        TokenKind::Comma,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LeftCurlyBracket,
        TokenKind::RightCurlyBracket,
        TokenKind::LeftRoundBracket,
        TokenKind::RightRoundBracket,
        TokenKind::LeftSquareBracket,
        TokenKind::RightSquareBracket,
        TokenKind::Import,
        TokenKind::Function,
        TokenKind::Continue,
        TokenKind::Return,
        TokenKind::Break,
        TokenKind::Const,
        TokenKind::Case,
        TokenKind::For,
        TokenKind::Else,
        TokenKind::If,
        TokenKind::ElseIf,
        TokenKind::Defer,
        TokenKind::Default,
        TokenKind::Interface,
        TokenKind::Map,
        TokenKind::Module,
        TokenKind::Dirty,
        TokenKind::Immutable,
        TokenKind::In,
        TokenKind::Var,
        TokenKind::Type,
        TokenKind::Switch,
        TokenKind::Struct,
        TokenKind::Pub,
        TokenKind::Ku,
        TokenKind::Select,
        TokenKind::Package,
        TokenKind::Goto,
        TokenKind::Chan,
        TokenKind::Loop,
        TokenKind::While,
        TokenKind::Eof,
        TokenKind::Terminator,
    ];

    /// Raw discriminant.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// True if tokens of this kind take their text from a static table
    /// instead of carrying a source literal.
    #[inline]
    pub const fn has_static_literal(self) -> bool {
        self as u8 > Self::DYNAMIC_END
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= Self::KEYWORD_START && tag <= Self::KEYWORD_END
    }

    /// True for every integer and float literal kind.
    #[inline]
    pub const fn is_number(self) -> bool {
        let tag = self as u8;
        tag >= TokenKind::BinaryInteger as u8 && tag <= Self::DYNAMIC_END
    }

    /// Name used in the token dump format.
    ///
    /// Operators and keywords are named by their spelling; dynamic kinds and
    /// specials use an upper-case mnemonic that cannot clash with a keyword.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENT",
            TokenKind::String => "STR",
            TokenKind::Character => "CHAR",
            TokenKind::BinaryInteger => "BININT",
            TokenKind::OctalInteger => "OCTINT",
            TokenKind::DecimalInteger => "DECINT",
            TokenKind::HexadecimalInteger => "HEXINT",
            TokenKind::DecimalFloat => "DECFLT",
            TokenKind::BlankIdentifier => "_",
            TokenKind::Define => ":=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::LessOrEqual => "<=",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::RightArrow => "=>",
            TokenKind::Increment => "++",
            TokenKind::Decrement => "--",
            TokenKind::AddAssign => "+=",
            TokenKind::SubtractAssign => "-=",
            TokenKind::MultiplyAssign => "*=",
            TokenKind::QuotientAssign => "/=",
            TokenKind::RemainderAssign => "%=",
            TokenKind::LogicalAnd => "&&",
            TokenKind::LogicalOr => "||",
            TokenKind::LeftShift => "<<",
            TokenKind::RightShift => ">>",
            TokenKind::LeftArrow => "<-",
            TokenKind::BitClear => "&^",
            TokenKind::Assign => "=",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Not => "!",
            TokenKind::Period => ".",
            TokenKind::Comma => ",",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LeftCurlyBracket => "{",
            TokenKind::RightCurlyBracket => "}",
            TokenKind::LeftRoundBracket => "(",
            TokenKind::RightRoundBracket => ")",
            TokenKind::LeftSquareBracket => "[",
            TokenKind::RightSquareBracket => "]",
            TokenKind::Import => "import",
            TokenKind::Function => "fn",
            TokenKind::Continue => "continue",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Const => "const",
            TokenKind::Case => "case",
            TokenKind::For => "for",
            TokenKind::Else => "else",
            TokenKind::If => "if",
            TokenKind::ElseIf => "elif",
            TokenKind::Defer => "defer",
            TokenKind::Default => "default",
            TokenKind::Interface => "interface",
            TokenKind::Map => "map",
            TokenKind::Module => "module",
            TokenKind::Dirty => "dirty",
            TokenKind::Immutable => "imt",
            TokenKind::In => "in",
            TokenKind::Var => "var",
            TokenKind::Type => "type",
            TokenKind::Switch => "switch",
            TokenKind::Struct => "struct",
            TokenKind::Pub => "pub",
            TokenKind::Ku => "ku",
            TokenKind::Select => "select",
            TokenKind::Package => "package",
            TokenKind::Goto => "goto",
            TokenKind::Chan => "chan",
            TokenKind::Loop => "loop",
            TokenKind::While => "while",
            TokenKind::Eof => "EOF",
            TokenKind::Terminator => "TERM",
        }
    }

    /// Source spelling for operator and keyword kinds.
    #[inline]
    pub const fn spelling(self) -> Option<&'static str> {
        if self.has_static_literal() && !matches!(self, TokenKind::Eof | TokenKind::Terminator) {
            Some(self.name())
        } else {
            None
        }
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal token",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Character => "character literal",
            TokenKind::BinaryInteger => "binary integer",
            TokenKind::OctalInteger => "octal integer",
            TokenKind::DecimalInteger => "integer",
            TokenKind::HexadecimalInteger => "hexadecimal integer",
            TokenKind::DecimalFloat => "float",
            TokenKind::Eof => "end of file",
            TokenKind::Terminator => "end of statement",
            _ => self.name(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

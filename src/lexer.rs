use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// Token kinds for Go source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    // Special
    Illegal,
    Eof,
    Comment,

    // Literals
    Ident,
    Int,
    Float,
    Imag,
    Char,
    String,

    // Operators
    Add,            // +
    Sub,            // -
    Mul,            // *
    Quo,            // /
    Rem,            // %
    And,            // &
    Or,             // |
    Xor,            // ^
    Shl,            // <<
    Shr,            // >>
    AndNot,         // &^
    AddAssign,      // +=
    SubAssign,      // -=
    MulAssign,      // *=
    QuoAssign,      // /=
    RemAssign,      // %=
    AndAssign,      // &=
    OrAssign,       // |=
    XorAssign,      // ^=
    ShlAssign,      // <<=
    ShrAssign,      // >>=
    AndNotAssign,   // &^=
    LAnd,           // &&
    LOr,            // ||
    Arrow,          // <-
    Inc,            // ++
    Dec,            // --
    Eql,            // ==
    Lss,            // <
    Gtr,            // >
    Assign,         // =
    Not,            // !
    Neq,            // !=
    Leq,            // <=
    Geq,            // >=
    Define,         // :=
    Ellipsis,       // ...
    Tilde,          // ~

    // Delimiters
    LParen,
    LBrack,
    LBrace,
    Comma,
    Period,
    RParen,
    RBrack,
    RBrace,
    /// `;` in the source, or a separator the lexer inserted at a line break.
    Semicolon { inserted: bool },
    Colon,

    // Keywords
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Kind {
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Kind::Break
                | Kind::Case
                | Kind::Chan
                | Kind::Const
                | Kind::Continue
                | Kind::Default
                | Kind::Defer
                | Kind::Else
                | Kind::Fallthrough
                | Kind::For
                | Kind::Func
                | Kind::Go
                | Kind::Goto
                | Kind::If
                | Kind::Import
                | Kind::Interface
                | Kind::Map
                | Kind::Package
                | Kind::Range
                | Kind::Return
                | Kind::Select
                | Kind::Struct
                | Kind::Switch
                | Kind::Type
                | Kind::Var
        )
    }

    /// Identifiers and basic literals.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Kind::Ident | Kind::Int | Kind::Float | Kind::Imag | Kind::Char | Kind::String
        )
    }

    /// Operators and delimiters.
    #[must_use]
    pub fn is_operator(self) -> bool {
        !self.is_keyword()
            && !self.is_literal()
            && !matches!(self, Kind::Illegal | Kind::Eof | Kind::Comment)
    }

    /// A newline after a token of this kind terminates the statement.
    fn ends_statement(self) -> bool {
        matches!(
            self,
            Kind::Ident
                | Kind::Int
                | Kind::Float
                | Kind::Imag
                | Kind::Char
                | Kind::String
                | Kind::Break
                | Kind::Continue
                | Kind::Fallthrough
                | Kind::Return
                | Kind::Inc
                | Kind::Dec
                | Kind::RParen
                | Kind::RBrack
                | Kind::RBrace
        )
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, Kind>> = LazyLock::new(|| {
    [
        ("break", Kind::Break),
        ("case", Kind::Case),
        ("chan", Kind::Chan),
        ("const", Kind::Const),
        ("continue", Kind::Continue),
        ("default", Kind::Default),
        ("defer", Kind::Defer),
        ("else", Kind::Else),
        ("fallthrough", Kind::Fallthrough),
        ("for", Kind::For),
        ("func", Kind::Func),
        ("go", Kind::Go),
        ("goto", Kind::Goto),
        ("if", Kind::If),
        ("import", Kind::Import),
        ("interface", Kind::Interface),
        ("map", Kind::Map),
        ("package", Kind::Package),
        ("range", Kind::Range),
        ("return", Kind::Return),
        ("select", Kind::Select),
        ("struct", Kind::Struct),
        ("switch", Kind::Switch),
        ("type", Kind::Type),
        ("var", Kind::Var),
    ]
    .into_iter()
    .collect()
});

/// A scanned token: byte offset and byte length into the source, plus its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub offset: usize,
    pub len: usize,
    pub kind: Kind,
}

impl Token {
    #[must_use]
    pub fn new(offset: usize, len: usize, kind: Kind) -> Self {
        Token { offset, len, kind }
    }

    /// End offset, saturating for tokens handed in with absurd lengths.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }
}

const BOM: char = '\u{FEFF}';

/// Go scanner. Holds a cursor, so use one instance per source.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    insert_semi: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let pos = if input.starts_with(BOM) { BOM.len_utf8() } else { 0 };
        Lexer { input, pos, insert_semi: false }
    }

    /// Scan the whole input. The last token is always `Kind::Eof` at `input.len()`.
    /// Malformed input never fails: stray characters become `Kind::Illegal`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                tokens.push(Token::new(self.input.len(), 0, Kind::Eof));
                break;
            }

            let start = self.pos;
            let ch = self.peek_byte(0);

            if ch == b'\n' {
                // Only reached when a separator is due; skip_whitespace eats the rest.
                self.pos += 1;
                self.insert_semi = false;
                tokens.push(Token::new(start, 1, Kind::Semicolon { inserted: true }));
                continue;
            }

            if ch == b'/' && matches!(self.peek_byte(1), b'/' | b'*') {
                if self.read_comment() {
                    // Ends the statement, but the separator has no text of its own.
                    self.insert_semi = false;
                }
                tokens.push(Token::new(start, self.pos - start, Kind::Comment));
                continue;
            }

            let kind = match ch {
                b'"' => self.read_string(),
                b'`' => self.read_raw_string(),
                b'\'' => self.read_char(),
                b'0'..=b'9' => self.read_number(),
                b'.' if self.peek_byte(1).is_ascii_digit() => self.read_number(),
                _ => match self.peek_char() {
                    Some(c) if is_letter(c) => self.read_ident(),
                    _ => self.read_operator(),
                },
            };

            // Stray characters leave the separator state alone.
            if kind != Kind::Illegal {
                self.insert_semi = kind.ends_statement();
            }
            tokens.push(Token::new(start, self.pos - start, kind));
        }

        tokens
    }

    fn peek_byte(&self, ahead: usize) -> u8 {
        self.input.as_bytes().get(self.pos + ahead).copied().unwrap_or(0)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consume `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek_byte(0) == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() {
            match self.peek_byte(0) {
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'\n' if !self.insert_semi => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Returns true for a general comment that spans lines (or runs to the end).
    fn read_comment(&mut self) -> bool {
        self.pos += 1; // skip /
        if self.eat(b'/') {
            // The newline itself is left for the separator or whitespace.
            while self.pos < self.input.len() && self.peek_byte(0) != b'\n' {
                self.pos += 1;
            }
            return false;
        }
        self.pos += 1; // skip *
        let body_start = self.pos;
        match self.input[body_start..].find("*/") {
            Some(i) => {
                self.pos = body_start + i + 2;
                self.input[body_start..body_start + i].contains('\n')
            }
            None => {
                // Unterminated: the rest of the input is comment.
                self.pos = self.input.len();
                true
            }
        }
    }

    /// Interpreted string. An unterminated string stops before the newline.
    fn read_string(&mut self) -> Kind {
        self.read_quoted(b'"');
        Kind::String
    }

    fn read_char(&mut self) -> Kind {
        self.read_quoted(b'\'');
        Kind::Char
    }

    fn read_quoted(&mut self, quote: u8) {
        self.pos += 1; // skip opening quote
        while self.pos < self.input.len() {
            match self.peek_byte(0) {
                b'\n' => return,
                b'\\' => {
                    self.pos += 1;
                    // Escaped character may be multi-byte.
                    if let Some(c) = self.peek_char()
                        && c != '\n'
                    {
                        self.pos += c.len_utf8();
                    }
                }
                b if b == quote => {
                    self.pos += 1;
                    return;
                }
                _ => self.advance_char(),
            }
        }
    }

    fn read_raw_string(&mut self) -> Kind {
        self.pos += 1; // skip opening `
        match self.input[self.pos..].find('`') {
            Some(i) => self.pos += i + 1,
            None => self.pos = self.input.len(),
        }
        Kind::String
    }

    fn read_number(&mut self) -> Kind {
        let mut is_float = false;
        let mut hex = false;

        if self.peek_byte(0) == b'0' {
            match self.peek_byte(1) {
                b'x' | b'X' => {
                    self.pos += 2;
                    hex = true;
                    self.skip_digits(16);
                }
                b'b' | b'B' => {
                    self.pos += 2;
                    self.skip_digits(2);
                }
                b'o' | b'O' => {
                    self.pos += 2;
                    self.skip_digits(8);
                }
                _ => self.skip_digits(10),
            }
        } else {
            self.skip_digits(10);
        }

        if self.peek_byte(0) == b'.' {
            is_float = true;
            self.pos += 1;
            self.skip_digits(if hex { 16 } else { 10 });
        }

        let exponent = if hex { [b'p', b'P'] } else { [b'e', b'E'] };
        if exponent.contains(&self.peek_byte(0)) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek_byte(0), b'+' | b'-') {
                self.pos += 1;
            }
            self.skip_digits(10);
        }

        if self.eat(b'i') {
            Kind::Imag
        } else if is_float {
            Kind::Float
        } else {
            Kind::Int
        }
    }

    /// Digits of the given base and `_` separators. Decimal digits are
    /// accepted for octal and binary too; the compiler rejects them, not us.
    fn skip_digits(&mut self, base: u32) {
        let radix = base.max(10);
        while self.pos < self.input.len() {
            let b = self.peek_byte(0);
            if b == b'_' || (b as char).is_digit(radix) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn read_ident(&mut self) -> Kind {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if is_letter(c) || c.is_ascii_digit() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        KEYWORDS
            .get(&self.input[start..self.pos])
            .copied()
            .unwrap_or(Kind::Ident)
    }

    fn read_operator(&mut self) -> Kind {
        let ch = self.peek_byte(0);
        if !ch.is_ascii() {
            self.advance_char();
            return Kind::Illegal;
        }
        self.pos += 1;
        match ch {
            b'(' => Kind::LParen,
            b')' => Kind::RParen,
            b'[' => Kind::LBrack,
            b']' => Kind::RBrack,
            b'{' => Kind::LBrace,
            b'}' => Kind::RBrace,
            b',' => Kind::Comma,
            b';' => Kind::Semicolon { inserted: false },
            b'~' => Kind::Tilde,
            b'.' => {
                if self.peek_byte(0) == b'.' && self.peek_byte(1) == b'.' {
                    self.pos += 2;
                    Kind::Ellipsis
                } else {
                    Kind::Period
                }
            }
            b':' => {
                if self.eat(b'=') { Kind::Define } else { Kind::Colon }
            }
            b'+' => {
                if self.eat(b'=') {
                    Kind::AddAssign
                } else if self.eat(b'+') {
                    Kind::Inc
                } else {
                    Kind::Add
                }
            }
            b'-' => {
                if self.eat(b'=') {
                    Kind::SubAssign
                } else if self.eat(b'-') {
                    Kind::Dec
                } else {
                    Kind::Sub
                }
            }
            b'*' => {
                if self.eat(b'=') { Kind::MulAssign } else { Kind::Mul }
            }
            b'/' => {
                if self.eat(b'=') { Kind::QuoAssign } else { Kind::Quo }
            }
            b'%' => {
                if self.eat(b'=') { Kind::RemAssign } else { Kind::Rem }
            }
            b'^' => {
                if self.eat(b'=') { Kind::XorAssign } else { Kind::Xor }
            }
            b'=' => {
                if self.eat(b'=') { Kind::Eql } else { Kind::Assign }
            }
            b'!' => {
                if self.eat(b'=') { Kind::Neq } else { Kind::Not }
            }
            b'|' => {
                if self.eat(b'=') {
                    Kind::OrAssign
                } else if self.eat(b'|') {
                    Kind::LOr
                } else {
                    Kind::Or
                }
            }
            b'&' => {
                if self.eat(b'^') {
                    if self.eat(b'=') { Kind::AndNotAssign } else { Kind::AndNot }
                } else if self.eat(b'=') {
                    Kind::AndAssign
                } else if self.eat(b'&') {
                    Kind::LAnd
                } else {
                    Kind::And
                }
            }
            b'<' => {
                if self.eat(b'-') {
                    Kind::Arrow
                } else if self.eat(b'<') {
                    if self.eat(b'=') { Kind::ShlAssign } else { Kind::Shl }
                } else if self.eat(b'=') {
                    Kind::Leq
                } else {
                    Kind::Lss
                }
            }
            b'>' => {
                if self.eat(b'>') {
                    if self.eat(b'=') { Kind::ShrAssign } else { Kind::Shr }
                } else if self.eat(b'=') {
                    Kind::Geq
                } else {
                    Kind::Gtr
                }
            }
            _ => Kind::Illegal,
        }
    }

    fn advance_char(&mut self) {
        self.pos += self.peek_char().map_or(1, char::len_utf8);
    }
}

fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

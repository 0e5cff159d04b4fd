use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A command letter such as `M` or `c`, case preserved.
    Command(char),
    Number(f32),
    Comma,
    // Sentinel
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    /// 1-based column of the token's first character.
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let col = self.col;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        self.col += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut n = 0;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
            n += 1;
        }
        n
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ',' => { self.advance(); Ok(Token::Comma) }
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.lex_number(),
            c if c.is_ascii_alphabetic() && c != 'e' && c != 'E' => {
                self.advance();
                Ok(Token::Command(c))
            }
            other => Err(ParseError::new(format!("unexpected character {:?}", other), self.col)),
        }
    }

    /// SVG number grammar: `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`.
    ///
    /// Numbers may abut without separators: `10-5` is two numbers and so is
    /// `1.5.5` (`1.5` then `.5`).
    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let col = self.col;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        let mut digits = self.eat_digits();
        if self.peek() == Some('.') {
            self.advance();
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(ParseError::new(
                format!("invalid number {:?}", &self.src[start..self.pos]),
                col,
            ));
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exp_digit = match self.peek_second() {
                Some(c) if c.is_ascii_digit() => true,
                Some('-' | '+') => matches!(
                    self.src[self.pos..].chars().nth(2),
                    Some(c) if c.is_ascii_digit()
                ),
                _ => false,
            };
            if !exp_digit {
                return Err(ParseError::new("exponent without digits", self.col));
            }
            self.advance();
            if matches!(self.peek(), Some('-' | '+')) {
                self.advance();
            }
            self.eat_digits();
        }
        let s = &self.src[start..self.pos];
        match s.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Token::Number(v)),
            _ => Err(ParseError::new(format!("invalid number {:?}", s), col)),
        }
    }
}

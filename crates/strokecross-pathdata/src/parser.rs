use crate::ast::{PathData, Point, Segment};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Parses an SVG path-data string into absolute segments.
///
/// Supported commands: `M m L l H h V v Q q C c Z z`, each with implicit
/// repetition. Extra coordinate pairs after a moveto are linetos of the same
/// relativity. Whitespace-only input parses to an empty [`PathData`].
pub fn parse_str(src: &str) -> Result<PathData, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_path()
}

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    current: Point,
    subpath_start: Point,
    segments: Vec<Segment>,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self {
            tokens,
            pos: 0,
            current: Point::default(),
            subpath_start: Point::default(),
            segments: Vec::new(),
        }
    }

    fn current_col(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| t.col)
            .unwrap_or(1)
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.current_col())
    }

    fn skip_comma(&mut self) {
        if self.peek() == &Token::Comma {
            self.advance();
        }
    }

    fn at_number(&self) -> bool {
        matches!(self.peek(), Token::Number(_))
    }

    fn expect_number(&mut self) -> Result<f32, ParseError> {
        self.skip_comma();
        match self.peek() {
            Token::Number(v) => {
                let v = *v;
                self.advance();
                Ok(v)
            }
            tok => Err(self.err(format!("expected number, got {:?}", tok))),
        }
    }

    fn expect_point(&mut self, relative: bool) -> Result<Point, ParseError> {
        let x = self.expect_number()?;
        let y = self.expect_number()?;
        Ok(self.resolve(Point::new(x, y), relative))
    }

    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative {
            Point::new(self.current.x + p.x, self.current.y + p.y)
        } else {
            p
        }
    }

    /// After one argument group, another follows if the next token (past an
    /// optional comma) is a number.
    fn repeats(&mut self) -> Result<bool, ParseError> {
        if self.peek() == &Token::Comma {
            self.advance();
            if !self.at_number() {
                return Err(self.err("trailing comma"));
            }
        }
        Ok(self.at_number())
    }

    // ── Path ──────────────────────────────────────────────────────────────

    pub fn parse_path(mut self) -> Result<PathData, ParseError> {
        match self.peek() {
            Token::Eof => return Ok(PathData::default()),
            Token::Command('M' | 'm') => {}
            _ => return Err(self.err("path data must begin with a moveto")),
        }

        loop {
            match self.advance() {
                Token::Eof => break,
                Token::Command(c) => self.parse_command(c)?,
                tok => {
                    self.pos -= 1;
                    return Err(self.err(format!("expected command, got {:?}", tok)));
                }
            }
        }

        Ok(PathData { segments: self.segments })
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn parse_command(&mut self, cmd: char) -> Result<(), ParseError> {
        let relative = cmd.is_ascii_lowercase();
        match cmd.to_ascii_uppercase() {
            'M' => self.parse_move(relative),
            'L' => self.parse_repeated(|p| {
                let to = p.expect_point(relative)?;
                p.push(Segment::LineTo(to), to);
                Ok(())
            }),
            'H' => self.parse_repeated(|p| {
                let x = p.expect_number()?;
                let x = if relative { p.current.x + x } else { x };
                let to = Point::new(x, p.current.y);
                p.push(Segment::LineTo(to), to);
                Ok(())
            }),
            'V' => self.parse_repeated(|p| {
                let y = p.expect_number()?;
                let y = if relative { p.current.y + y } else { y };
                let to = Point::new(p.current.x, y);
                p.push(Segment::LineTo(to), to);
                Ok(())
            }),
            'Q' => self.parse_repeated(|p| {
                let ctrl = p.expect_point(relative)?;
                let to = p.expect_point(relative)?;
                p.push(Segment::QuadTo { ctrl, to }, to);
                Ok(())
            }),
            'C' => self.parse_repeated(|p| {
                let ctrl1 = p.expect_point(relative)?;
                let ctrl2 = p.expect_point(relative)?;
                let to = p.expect_point(relative)?;
                p.push(Segment::CubicTo { ctrl1, ctrl2, to }, to);
                Ok(())
            }),
            'Z' => {
                self.segments.push(Segment::Close);
                self.current = self.subpath_start;
                Ok(())
            }
            'A' | 'S' | 'T' => {
                self.pos -= 1;
                Err(self.err(format!("unsupported command '{}'", cmd)))
            }
            _ => {
                self.pos -= 1;
                Err(self.err(format!("unknown command '{}'", cmd)))
            }
        }
    }

    fn parse_move(&mut self, relative: bool) -> Result<(), ParseError> {
        let to = self.expect_point(relative)?;
        self.segments.push(Segment::MoveTo(to));
        self.current = to;
        self.subpath_start = to;
        while self.repeats()? {
            let to = self.expect_point(relative)?;
            self.push(Segment::LineTo(to), to);
        }
        Ok(())
    }

    fn parse_repeated(
        &mut self,
        mut group: impl FnMut(&mut Self) -> Result<(), ParseError>,
    ) -> Result<(), ParseError> {
        group(self)?;
        while self.repeats()? {
            group(self)?;
        }
        Ok(())
    }

    fn push(&mut self, segment: Segment, end: Point) {
        self.segments.push(segment);
        self.current = end;
    }
}

//! Apple `.strings` codec
//!
//! Reads `"key" = "value";` entries with `/* */` and `//` comments. The
//! comment directly above an entry becomes its translator context. Input may
//! be UTF-8 or UTF-16 (BOM-detected); output is always UTF-8.

use std::fmt::Write as _;

/// One `key = value` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub comment: Option<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }
}

/// Syntax error with a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// Decode raw file bytes, honouring a UTF-8 or UTF-16 byte order mark.
pub fn decode(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "Replaced malformed sequences while decoding");
    }
    text.into_owned()
}

/// Parse `.strings` content into entries, in file order.
pub fn parse(content: &str) -> Result<Vec<Entry>, ParseError> {
    Parser::new(content).parse()
}

/// Render entries as `.strings` text.
pub fn render<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
    let mut out = String::new();
    for entry in entries {
        if let Some(comment) = entry.comment.as_deref().filter(|c| !c.is_empty()) {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "/* {} */", comment.replace("*/", "* /"));
        }
        let _ = writeln!(out, "\"{}\" = \"{}\";", escape(&entry.key), escape(&entry.value));
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(content: &str) -> Self {
        Self {
            chars: content.trim_start_matches('\u{feff}').chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn parse(mut self) -> Result<Vec<Entry>, ParseError> {
        let mut entries = Vec::new();
        let mut comment: Option<String> = None;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('/') if self.peek_at(1) == Some('*') => {
                    comment = Some(self.block_comment()?);
                }
                Some('/') if self.peek_at(1) == Some('/') => {
                    comment = Some(self.line_comment());
                }
                Some(_) => {
                    let mut entry = self.entry()?;
                    entry.comment = comment.take().filter(|c| !c.is_empty());
                    entries.push(entry);
                }
            }
        }

        Ok(entries)
    }

    fn entry(&mut self) -> Result<Entry, ParseError> {
        let key = self.token()?;
        self.skip_trivia()?;
        match self.bump() {
            // `"key";` is shorthand for `"key" = "key";`
            Some(';') => Ok(Entry::new(key.clone(), key)),
            Some('=') => {
                self.skip_trivia()?;
                let value = self.token()?;
                self.skip_trivia()?;
                match self.bump() {
                    Some(';') => Ok(Entry::new(key, value)),
                    other => Err(self.unexpected(other, "';'")),
                }
            }
            other => Err(self.unexpected(other, "'=' or ';'")),
        }
    }

    fn token(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some('"') => self.quoted(),
            Some(c) if is_bare(c) => {
                let mut out = String::new();
                while let Some(c) = self.peek().filter(|c| is_bare(*c)) {
                    out.push(c);
                    self.pos += 1;
                }
                Ok(out)
            }
            other => Err(self.unexpected(other, "a quoted string")),
        }
    }

    fn quoted(&mut self) -> Result<String, ParseError> {
        let start_line = self.line;
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ParseError {
                        line: start_line,
                        message: "unterminated string".into(),
                    });
                }
                Some('"') => return Ok(out),
                Some('\\') => out.push(self.escape_sequence()?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape_sequence(&mut self) -> Result<char, ParseError> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some('u') | Some('U') => {
                let unit = self.code_unit()?;
                // A high surrogate must be followed by its low half
                let units = if (0xD800..0xDC00).contains(&unit) {
                    match (self.bump(), self.bump()) {
                        (Some('\\'), Some('u' | 'U')) => vec![unit, self.code_unit()?],
                        _ => return Err(self.error("unpaired surrogate in \\u escape")),
                    }
                } else {
                    vec![unit]
                };
                match char::decode_utf16(units).collect::<Vec<_>>().as_slice() {
                    [Ok(c)] => Ok(*c),
                    _ => Err(self.error("invalid \\u code point")),
                }
            }
            Some(c) => Ok(c),
            None => Err(self.error("unterminated escape")),
        }
    }

    /// Four hex digits of a `\u` escape.
    fn code_unit(&mut self) -> Result<u16, ParseError> {
        let mut unit = 0u16;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid \\u escape"))?;
            unit = unit * 16 + digit as u16;
        }
        Ok(unit)
    }

    fn block_comment(&mut self) -> Result<String, ParseError> {
        let start_line = self.line;
        self.pos += 2;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ParseError {
                        line: start_line,
                        message: "unterminated comment".into(),
                    });
                }
                Some('*') if self.peek() == Some('/') => {
                    self.pos += 1;
                    return Ok(out.trim().to_string());
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn line_comment(&mut self) -> String {
        self.pos += 2;
        let mut out = String::new();
        while let Some(c) = self.peek().filter(|c| *c != '\n') {
            out.push(c);
            self.pos += 1;
        }
        out.trim().to_string()
    }

    /// Whitespace and comments between the parts of one entry.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            self.skip_whitespace();
            match (self.peek(), self.peek_at(1)) {
                (Some('/'), Some('*')) => {
                    self.block_comment()?;
                }
                (Some('/'), Some('/')) => {
                    self.line_comment();
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            if c == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError {
            line: self.line,
            message: message.to_string(),
        }
    }

    fn unexpected(&self, found: Option<char>, expected: &str) -> ParseError {
        match found {
            Some(c) => self.error(&format!("expected {expected}, found '{c}'")),
            None => self.error(&format!("expected {expected}, found end of file")),
        }
    }
}

fn is_bare(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '$' | ':' | '/')
}

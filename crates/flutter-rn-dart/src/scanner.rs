//! Character cursor over a byte range of the source.
//!
//! There is no token stream: the parser works directly on the text and uses
//! [`find_close`] to delimit nested argument lists before descending into them.

// ── Scanner ───────────────────────────────────────────────────────────────

/// A cursor bounded to `src[..end]`. Positions are absolute byte offsets into
/// the full source so errors can always be reported against it.
pub(crate) struct Scanner<'s> {
    src: &'s str,
    pos: usize,
    end: usize,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str, start: usize, end: usize) -> Self {
        Self { src, pos: start, end: end.min(src.len()) }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.end);
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    pub fn rest(&self) -> &'s str {
        &self.src[self.pos..self.end]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the next one.
    pub fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `word` only if it is a whole identifier (not a prefix of one).
    pub fn eat_keyword(&mut self, word: &str) -> bool {
        let rest = self.rest();
        if !rest.starts_with(word) {
            return false;
        }
        if rest[word.len()..].chars().next().is_some_and(is_ident_continue) {
            return false;
        }
        self.pos += word.len();
        true
    }

    /// Skip whitespace and `//` / `/* */` comments.
    pub fn skip_trivia(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            let rest = self.rest();
            if rest.starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if rest.starts_with("/*") {
                match rest[2..].find("*/") {
                    Some(i) => self.pos += 2 + i + 2,
                    None => self.pos = self.end, // unterminated, runs to the end
                }
            } else {
                break;
            }
        }
    }

    /// Skip trivia and argument-separating commas.
    pub fn skip_separators(&mut self) {
        loop {
            self.skip_trivia();
            if !self.eat(',') {
                break;
            }
        }
    }

    /// Skip an optional `const` / `new` keyword and the trivia after it.
    pub fn skip_constructor_keyword(&mut self) {
        if self.eat_keyword("const") || self.eat_keyword("new") {
            self.skip_trivia();
        }
    }

    pub fn ident(&mut self) -> Option<&'s str> {
        let start = self.pos;
        if !self.peek().is_some_and(is_ident_start) {
            return None;
        }
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }
        Some(&self.src[start..self.pos])
    }

    /// An identifier followed by any number of `.segment`s.
    pub fn path(&mut self) -> Option<&'s str> {
        let start = self.pos;
        self.ident()?;
        while self.peek() == Some('.') && self.peek_second().is_some_and(is_ident_start) {
            self.advance();
            self.ident();
        }
        Some(&self.src[start..self.pos])
    }

    /// `-?digits(.digits)?` or a hex literal `0x...`.
    pub fn number(&mut self) -> Option<&'s str> {
        let start = self.pos;
        let rest = self.rest();
        if (rest.starts_with("0x") || rest.starts_with("0X"))
            && rest[2..].chars().next().is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.pos += 2;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.advance();
            }
            return Some(&self.src[start..self.pos]);
        }
        self.eat('-');
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos = start;
            return None;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        Some(&self.src[start..self.pos])
    }

    /// True when the cursor sits on a string literal, either a bare quote or
    /// an `r` raw-string prefix directly followed by one.
    pub fn at_string(&self) -> bool {
        match self.peek() {
            Some('\'' | '"') => true,
            Some('r') => {
                matches!(self.peek_second(), Some('\'' | '"'))
                    && !self.src[..self.pos].chars().next_back().is_some_and(is_ident_continue)
            }
            _ => false,
        }
    }

    /// Read a `'` or `"` delimited string starting at the cursor, including
    /// `'''` / `"""` multi-line forms and `r'...'` raw strings.
    ///
    /// Outside raw strings a backslash is dropped and the character after it
    /// taken literally. Returns `None` if the string is unterminated.
    pub fn string(&mut self) -> Option<String> {
        let start = self.pos;
        let raw = self.at_string() && self.eat('r');
        let Some(quote) = self.peek().filter(|&c| c == '\'' || c == '"') else {
            self.pos = start;
            return None;
        };
        let triple: String = std::iter::repeat_n(quote, 3).collect();
        let is_triple = self.rest().starts_with(&triple);
        self.pos += if is_triple { 3 } else { 1 };

        let mut out = String::new();
        loop {
            if is_triple && self.rest().starts_with(&triple) {
                self.pos += 3;
                return Some(out);
            }
            match self.advance()? {
                '\\' if !raw => out.push(self.advance()?),
                c if c == quote && !is_triple => return Some(out),
                c => out.push(c),
            }
        }
    }

    /// Consume raw text up to the next top-level `,` or an unmatched closing
    /// delimiter. Nested brackets, strings and comments are stepped over.
    pub fn raw_until_separator(&mut self) -> &'s str {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                ',' if depth == 0 => break,
                '\'' | '"' | 'r' if self.at_string() => {
                    if self.string().is_none() {
                        break;
                    }
                    continue;
                }
                '/' if matches!(self.peek_second(), Some('/' | '*')) => {
                    self.skip_trivia();
                    continue;
                }
                _ => {}
            }
            self.advance();
        }
        &self.src[start..self.pos]
    }
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

// ── Balanced delimiters ───────────────────────────────────────────────────

/// Given `src[open]` is `(`, `[` or `{`, return the byte offset of its
/// matching closer within `src[..end]`.
///
/// Strings and comments are skipped. Returns `None` when the input runs out
/// first or a closer of the wrong kind appears.
pub(crate) fn find_close(src: &str, open: usize, end: usize) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut s = Scanner::new(src, open, end);

    while let Some(c) = s.peek() {
        match c {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(s.pos());
                }
            }
            '\'' | '"' | 'r' if s.at_string() => {
                s.string()?;
                continue;
            }
            '/' if matches!(s.peek_second(), Some('/' | '*')) => {
                s.skip_trivia();
                continue;
            }
            _ => {}
        }
        s.advance();
    }
    None
}

/// Given `src[open]` is `<`, return the offset of the matching `>`.
pub(crate) fn find_angle_close(src: &str, open: usize, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in src[open..end.min(src.len())].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

//! Comment token classifier
//!
//! Splits a raw comment body into a restartable sequence of classified
//! tokens: words, space runs, and newline boundaries. Newline tokens absorb
//! the boundary whitespace plus any leading `*` gutter run (and an optional
//! trailing `/`), so `"\n * "` collapses into one token carrying the image
//! needed to reconstruct it. Both javadoc rendering and block comment reflow
//! are built on this classifier.

/// Classification of one comment token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Space,
    Newline,
}

/// One classified comment token with its source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    pub kind: TokenKind,
    pub image: String,
}

impl CommentToken {
    fn word(image: String) -> Self {
        CommentToken {
            kind: TokenKind::Word,
            image,
        }
    }

    fn space(image: String) -> Self {
        CommentToken {
            kind: TokenKind::Space,
            image,
        }
    }

    fn newline(image: String) -> Self {
        CommentToken {
            kind: TokenKind::Newline,
            image,
        }
    }
}

/// Restartable tokenizer over one comment body
///
/// `next_token` past end-of-input yields a single-space token forever rather
/// than erroring; callers drive the loop with [`CommentTokenizer::has_next`].
pub struct CommentTokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl CommentTokenizer {
    #[must_use]
    pub fn new(text: &str) -> Self {
        CommentTokenizer {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Whether another token is available
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pos < self.chars.len()
    }

    /// Restart from the beginning of the input
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Produce the next token; a single space token past end-of-input
    pub fn next_token(&mut self) -> CommentToken {
        let Some(c) = self.peek() else {
            // Defensive default, never an error
            return CommentToken::space(" ".to_string());
        };

        match c {
            '\n' | '\r' => self.scan_newline(),
            ' ' | '\t' => self.scan_space(),
            _ => self.scan_word(),
        }
    }

    /// A line break plus its gutter: whitespace, a `*` run, an optional `/`
    fn scan_newline(&mut self) -> CommentToken {
        let mut image = String::new();
        if self.peek() == Some('\r') {
            image.push(self.bump().unwrap_or('\r'));
        }
        if self.peek() == Some('\n') {
            image.push(self.bump().unwrap_or('\n'));
        }
        while matches!(self.peek(), Some(' ' | '\t')) {
            image.push(self.bump().unwrap_or(' '));
        }
        let mut saw_star = false;
        while self.peek() == Some('*') {
            saw_star = true;
            image.push(self.bump().unwrap_or('*'));
        }
        // The '/' of a closing */ belongs to the boundary, not to a word
        if saw_star && self.peek() == Some('/') {
            image.push(self.bump().unwrap_or('/'));
        }
        CommentToken::newline(image)
    }

    fn scan_space(&mut self) -> CommentToken {
        let mut image = String::new();
        while matches!(self.peek(), Some(' ' | '\t')) {
            image.push(self.bump().unwrap_or(' '));
        }
        CommentToken::space(image)
    }

    /// A run of non-whitespace; a word opening with `<` is captured whole
    /// through its closing `>` (crossing spaces, so attribute-bearing tags
    /// like `<table border="1">` stay single tokens)
    fn scan_word(&mut self) -> CommentToken {
        let mut image = String::new();
        if self.peek() == Some('<') {
            if let Some(close) = self.find_tag_close() {
                while self.pos <= close {
                    image.push(self.chars[self.pos]);
                    self.pos += 1;
                }
                return CommentToken::word(image);
            }
            // A bare '<' with no closer in sight is an ordinary word char
            image.push('<');
            self.pos += 1;
        }
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '<' {
                break;
            }
            image.push(c);
            self.pos += 1;
        }

        // Strip a trailing */ accidentally captured inside the word
        if image.len() > 2 && image.ends_with("*/") {
            image.truncate(image.len() - 2);
        } else if image == "*/" {
            return CommentToken::space(" ".to_string());
        }
        CommentToken::word(image)
    }

    /// Position of the `>` closing a tag opened at the current `<`, if one
    /// appears before the end of the line or another `<`
    fn find_tag_close(&self) -> Option<usize> {
        let mut i = self.pos + 1;
        while i < self.chars.len() {
            match self.chars[i] {
                '>' => return Some(i),
                '\n' | '\r' | '<' => return None,
                _ => i += 1,
            }
        }
        None
    }
}

impl Iterator for CommentTokenizer {
    type Item = CommentToken;

    fn next(&mut self) -> Option<CommentToken> {
        if self.has_next() {
            Some(self.next_token())
        } else {
            None
        }
    }
}

/// Whether a raw comment body has any printable content.
///
/// Strips comment delimiters, gutter asterisks, and whitespace; answers
/// whether anything else remains. Used to decide whether a blank description
/// should be printed at all.
#[must_use]
pub fn has_content(raw: &str) -> bool {
    raw.chars().any(|c| c != '/' && c != '*' && !c.is_whitespace())
}

#![no_std]

/*!
Low-level scanning over a raw command-line string. Takes care of spans,
quote-aware tokens, switch introducers, and the character-class runs that
the typed matcher in `turnout` is assembled from. No type handling happens
here. Usually this is too low level to use directly.

All positions are byte offsets into the scanned `str`. Every function that
produces an offset produces one that lies on a character boundary, so the
offsets can be fed back into slicing without further checks.
*/

#[cfg(test)]
extern crate std;

/// A half-open byte range into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers.
    #[inline]
    #[must_use]
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/**
One token of a command line: either a double-quoted run (with `content`
excluding the quotes and `span` covering them) or a bare run of
non-whitespace.

A quoted token must have at least one character between its quotes and its
closing quote must actually exist; anything else falls back to a bare token,
quote characters included. `""` is therefore a bare two-character token, and
`"abc` with no closing quote is a bare token of four characters.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    pub content: &'t str,
    pub span: Span,
    pub quoted: bool,
}

/// Iterate the tokens of `text`, quote-aware, left to right.
#[inline]
#[must_use]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Token<'t>> {
        let start = whitespace_run(self.text, self.pos);
        if start >= self.text.len() {
            self.pos = start;
            return None;
        }

        let token = match quoted_run(self.text, start) {
            Some((inner, end)) => Token {
                content: inner.slice(self.text),
                span: Span::new(start, end),
                quoted: true,
            },
            None => {
                let end = bare_run(self.text, start);
                Token {
                    content: &self.text[start..end],
                    span: Span::new(start, end),
                    quoted: false,
                }
            }
        };

        self.pos = token.span.end;
        Some(token)
    }
}

/// True when `at` is the start of the text or the previous character is
/// whitespace.
#[inline]
#[must_use]
pub fn boundary_before(text: &str, at: usize) -> bool {
    text.get(..at).is_some_and(|head| {
        head.chars().next_back().map_or(true, char::is_whitespace)
    })
}

/// True when `at` is the end of the text or the character at `at` is
/// whitespace.
#[inline]
#[must_use]
pub fn boundary_after(text: &str, at: usize) -> bool {
    text.get(at..).is_some_and(|tail| {
        tail.chars().next().map_or(true, char::is_whitespace)
    })
}

/// If a switch introducer (`--`, `-`, or `/`) starts at `at`, the offset
/// just past it.
#[inline]
#[must_use]
pub fn introducer(text: &str, at: usize) -> Option<usize> {
    match text.as_bytes().get(at)? {
        b'/' => Some(at + 1),
        b'-' => match text.as_bytes().get(at + 1) {
            Some(b'-') => Some(at + 2),
            _ => Some(at + 1),
        },
        _ => None,
    }
}

/// A position where a switch could begin: an introducer at a token
/// boundary. `name_start` is the offset just past the introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub start: usize,
    pub name_start: usize,
}

/// The first candidate switch site at or after `from`.
#[must_use]
pub fn next_site(text: &str, from: usize) -> Option<Site> {
    let bytes = text.as_bytes();
    let mut pos = from;

    while pos < bytes.len() {
        let found = memchr::memchr2(b'-', b'/', &bytes[pos..])? + pos;
        if boundary_before(text, found) {
            if let Some(name_start) = introducer(text, found) {
                return Some(Site {
                    start: found,
                    name_start,
                });
            }
        }
        pos = found + 1;
    }

    None
}

/// Match `word` at `at`, ASCII case-insensitively, returning the offset
/// just past it.
#[inline]
#[must_use]
pub fn keyword_ignore_case(text: &str, at: usize, word: &str) -> Option<usize> {
    let end = at.checked_add(word.len())?;
    let window = text.as_bytes().get(at..end)?;
    window.eq_ignore_ascii_case(word.as_bytes()).then_some(end)
}

/// Match `word` at `at` exactly, returning the offset just past it.
#[inline]
#[must_use]
pub fn keyword(text: &str, at: usize, word: &str) -> Option<usize> {
    let end = at.checked_add(word.len())?;
    let window = text.as_bytes().get(at..end)?;
    (window == word.as_bytes()).then_some(end)
}

/// The end of the whitespace run starting at `at` (which may be empty).
#[must_use]
pub fn whitespace_run(text: &str, at: usize) -> usize {
    text[at..]
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(i, _)| at + i)
}

/// The end of the non-whitespace run starting at `at` (which may be empty).
#[must_use]
pub fn bare_run(text: &str, at: usize) -> usize {
    text[at..]
        .char_indices()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(text.len(), |(i, _)| at + i)
}

/// The end of the ASCII digit run starting at `at` (which may be empty).
#[must_use]
pub fn digit_run(text: &str, at: usize) -> usize {
    let bytes = &text.as_bytes()[at..];
    at + bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len())
}

/**
A double-quoted run starting at `at`: the span of its content (quotes
excluded) and the offset just past the closing quote.

The content must be at least one character; an empty pair of quotes or an
unterminated quote is not a quoted run.
*/
#[must_use]
pub fn quoted_run(text: &str, at: usize) -> Option<(Span, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(at) != Some(&b'"') {
        return None;
    }

    let close = memchr::memchr(b'"', bytes.get(at + 1..)?)?;
    (close >= 1).then(|| (Span::new(at + 1, at + 1 + close), at + close + 2))
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    #[test]
    fn tokens_split_on_whitespace_and_quotes() {
        let collected: Vec<Token<'_>> = tokens(r#"  one two "three four" five"#).collect();
        let contents: Vec<&str> = collected.iter().map(|token| token.content).collect();

        assert_eq!(contents, ["one", "two", "three four", "five"]);
        assert!(collected[2].quoted);
        assert!(!collected[0].quoted);
        assert_eq!(collected[0].span, Span::new(2, 5));
        assert_eq!(collected[2].span, Span::new(10, 22));
    }

    #[test]
    fn unterminated_quote_is_a_bare_token() {
        let collected: Vec<Token<'_>> = tokens(r#""abc def"#).collect();
        assert_eq!(collected[0].content, "\"abc");
        assert!(!collected[0].quoted);
        assert_eq!(collected[1].content, "def");
    }

    #[test]
    fn empty_quotes_are_a_bare_token() {
        let collected: Vec<Token<'_>> = tokens(r#""" x"#).collect();
        assert_eq!(collected[0].content, "\"\"");
        assert!(!collected[0].quoted);
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        assert_eq!(tokens("   ").count(), 0);
        assert_eq!(tokens("").count(), 0);
    }

    #[test]
    fn introducers() {
        assert_eq!(introducer("-v", 0), Some(1));
        assert_eq!(introducer("--verbose", 0), Some(2));
        assert_eq!(introducer("/help", 0), Some(1));
        assert_eq!(introducer("verbose", 0), None);
        assert_eq!(introducer("-", 1), None);
    }

    #[test]
    fn sites_require_a_token_boundary() {
        // the dash inside "a-b" is not a site
        let site = next_site("a-b -v", 0).unwrap();
        assert_eq!(site.start, 4);
        assert_eq!(site.name_start, 5);

        let site = next_site(" --long", 0).unwrap();
        assert_eq!((site.start, site.name_start), (1, 3));

        assert!(next_site("plain words", 0).is_none());
    }

    #[test]
    fn runs() {
        assert_eq!(whitespace_run("  ab", 0), 2);
        assert_eq!(whitespace_run("ab", 0), 0);
        assert_eq!(bare_run("ab cd", 0), 2);
        assert_eq!(bare_run("ab", 1), 2);
        assert_eq!(digit_run("123x", 0), 3);
        assert_eq!(digit_run("x", 0), 0);
    }

    #[test]
    fn keywords() {
        assert_eq!(keyword_ignore_case("-VERBOSE ", 1, "verbose"), Some(8));
        assert_eq!(keyword_ignore_case("-verb", 1, "verbose"), None);
        assert_eq!(keyword("High", 0, "High"), Some(4));
        assert_eq!(keyword("high", 0, "High"), None);
    }

    #[test]
    fn quoted_runs() {
        let (inner, end) = quoted_run(r#""ab" rest"#, 0).unwrap();
        assert_eq!(inner, Span::new(1, 3));
        assert_eq!(end, 4);

        assert!(quoted_run(r#""""#, 0).is_none());
        assert!(quoted_run(r#""open"#, 0).is_none());
        assert!(quoted_run("bare", 0).is_none());
    }

    #[test]
    fn boundaries() {
        assert!(boundary_before("-v", 0));
        assert!(boundary_before("a -v", 2));
        assert!(!boundary_before("a-v", 1));
        assert!(boundary_after("-v", 2));
        assert!(boundary_after("-v x", 2));
        assert!(!boundary_after("-vx", 2));
    }
}

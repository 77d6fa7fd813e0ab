use crate::format::directives;

/// Role of a playlist line, decided by its prefix only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// `#EXTM3U` or `#EXT-X-SESSION-DATA`
    Header,
    /// `#EXTINF`, searched for keywords
    EntryMetadata,
    /// Anything not starting with `#`, a locator when it follows an entry
    Reference,
    /// Any other directive or comment
    Other,
}

impl LineRole {
    pub fn of(line: &str) -> Self {
        if directives::HEADERS.iter().any(|x| line.starts_with(x)) {
            Self::Header
        } else if line.starts_with(directives::EXTINF) {
            Self::EntryMetadata
        } else if is_marker(line) {
            Self::Other
        } else {
            Self::Reference
        }
    }
}

/// Whether the line starts with the directive marker. A marker line never
/// attaches to the entry before it.
pub fn is_marker(line: &str) -> bool {
    line.starts_with(directives::MARKER)
}

/// Splits the text into lines, each keeping its terminator. `\n`, `\r\n`
/// and a lone `\r` all end a line.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines(text)
}

pub struct SplitLines<'a>(&'a str);

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            return None;
        }

        let end = match self.0.find(['\r', '\n']) {
            Some(i) if self.0[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => self.0.len(),
        };
        let (line, rest) = self.0.split_at(end);
        self.0 = rest;
        Some(line)
    }
}

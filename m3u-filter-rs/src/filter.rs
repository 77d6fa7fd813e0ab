use std::mem::replace;

use log::{debug, warn};

use crate::{
    KeywordSet,
    format::{FilterSummary, FilteredPlaylist, LineRole, is_marker, split_lines},
};

/// Keeps the playlist entries whose `#EXTINF` line contains a keyword.
///
/// Header lines are always kept. An entry is its `#EXTINF` line plus the
/// locator line right after it, and is kept or dropped as a whole.
pub struct EntryFilter {
    keywords: KeywordSet,
}

impl EntryFilter {
    pub fn new(keywords: KeywordSet) -> Self {
        if keywords.is_empty() {
            warn!("Keyword set is empty, only header lines will be kept");
        }
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Filters the whole playlist text. Line terminators are kept verbatim.
    pub fn filter_text<'a>(&self, text: &'a str) -> FilteredPlaylist<'a> {
        self.filter_lines(split_lines(text))
    }

    pub fn filter_lines<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> FilteredPlaylist<'a> {
        let mut scanner = Scanner::new(&self.keywords);
        for line in lines {
            scanner.feed(line);
        }
        scanner.finish()
    }
}

enum ScanState<'a> {
    Scanning,
    /// An `#EXTINF` line was read, the next line decides whether it has a locator
    InsideEntry { metadata: &'a str, matched: bool },
}

struct Scanner<'a, 'k> {
    keywords: &'k KeywordSet,
    state: ScanState<'a>,
    lines: Vec<&'a str>,
    summary: FilterSummary,
}

impl<'a, 'k> Scanner<'a, 'k> {
    fn new(keywords: &'k KeywordSet) -> Self {
        Self {
            keywords,
            state: ScanState::Scanning,
            lines: Vec::new(),
            summary: FilterSummary::default(),
        }
    }

    fn feed(&mut self, line: &'a str) {
        self.summary.input_line_count += 1;

        match replace(&mut self.state, ScanState::Scanning) {
            ScanState::Scanning => self.scan(line),
            ScanState::InsideEntry { metadata, matched } => {
                if is_marker(line) {
                    // not a locator, classify it on its own
                    self.close_entry(metadata, matched, None);
                    self.scan(line);
                } else {
                    self.close_entry(metadata, matched, Some(line));
                }
            }
        }
    }

    fn scan(&mut self, line: &'a str) {
        match LineRole::of(line) {
            LineRole::Header => self.lines.push(line),
            LineRole::EntryMetadata => {
                self.state = ScanState::InsideEntry {
                    metadata: line,
                    matched: self.keywords.is_match(line),
                };
            }
            LineRole::Reference | LineRole::Other => {}
        }
    }

    fn close_entry(&mut self, metadata: &'a str, matched: bool, reference: Option<&'a str>) {
        if !matched {
            return;
        }

        debug!("Matched entry: {}", metadata.trim_end());
        self.summary.matched_entry_count += 1;
        self.lines.push(metadata);
        match reference {
            Some(reference) => self.lines.push(reference),
            None => warn!("Matched entry has no locator: {}", metadata.trim_end()),
        }
    }

    fn finish(mut self) -> FilteredPlaylist<'a> {
        if let ScanState::InsideEntry { metadata, matched } =
            replace(&mut self.state, ScanState::Scanning)
        {
            self.close_entry(metadata, matched, None);
        }

        self.summary.output_line_count = self.lines.len();
        debug!("Filter finished: {}", self.summary);

        FilteredPlaylist {
            lines: self.lines,
            summary: self.summary,
        }
    }
}

/// Counts reported after a filtering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub input_line_count: usize,
    pub output_line_count: usize,
    pub matched_entry_count: usize,
}

/// Lines retained by a filtering pass, borrowed from the input text
#[derive(Debug)]
pub struct FilteredPlaylist<'a> {
    /// Retained lines in their original order, terminators included
    pub lines: Vec<&'a str>,
    pub summary: FilterSummary,
}

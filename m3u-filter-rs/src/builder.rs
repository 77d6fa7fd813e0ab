use std::fmt::Display;

use crate::format::{FilterSummary, FilteredPlaylist};

impl Display for FilteredPlaylist<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // lines already carry their terminators
        for line in self.lines.iter() {
            f.write_str(line)?;
        }

        Ok(())
    }
}

impl Display for FilterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines in, {} lines out, {} entries matched",
            self.input_line_count, self.output_line_count, self.matched_entry_count
        )
    }
}

use std::{fmt::Display, path::PathBuf};

use m3u_filter_rs::format::FilterSummary;

/// What a finished job hands to the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    pub output_path: PathBuf,
    pub summary: FilterSummary,
}

impl Display for FilterReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Filtered playlist written to: {}", self.output_path.display())?;
        writeln!(f, "Total lines in original: {}", self.summary.input_line_count)?;
        writeln!(f, "Total lines in filtered: {}", self.summary.output_line_count)?;
        write!(f, "Channels matched: {}", self.summary.matched_entry_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_text() {
        let report = FilterReport {
            output_path: PathBuf::from("out.m3u"),
            summary: FilterSummary {
                input_line_count: 5,
                output_line_count: 3,
                matched_entry_count: 1,
            },
        };

        assert_eq!(
            report.to_string(),
            "Filtered playlist written to: out.m3u\n\
             Total lines in original: 5\n\
             Total lines in filtered: 3\n\
             Channels matched: 1"
        );
    }
}

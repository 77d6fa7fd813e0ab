//! # m3u-filter-rs
//! A library for filtering m3u playlist entries by keyword
//!
//! # Example
//! ```rust
//! use m3u_filter_rs::{EntryFilter, KeywordSet};
//!
//! // 1. Filter
//! let filter = EntryFilter::new(KeywordSet::new(["arsenal"]).unwrap());
//! let result = filter.filter_text(r#"#EXTM3U
//! #EXTINF:-1 tvg-id="a" group-title="News",Some News
//! http://example.com/A.m3u8
//! #EXTINF:-1 tvg-id="b" group-title="Sport",Arsenal TV
//! http://example.com/B.m3u8
//! "#);
//! assert_eq!(result.summary.matched_entry_count, 1);
//!
//! // 2. Generate
//! print!("{}", result);
//! ```

mod builder;
mod filter;
pub mod format;
mod keywords;
pub use filter::*;
pub use keywords::*;

mod line;
mod playlist;
pub use line::*;
pub use playlist::*;

pub mod directives {
    /// Prefix shared by every directive line
    pub const MARKER: char = '#';

    pub const EXTM3U: &str = "#EXTM3U";
    pub const SESSION_DATA: &str = "#EXT-X-SESSION-DATA";
    pub const EXTINF: &str = "#EXTINF";

    /// Directives kept in the output no matter what
    pub const HEADERS: [&str; 2] = [EXTM3U, SESSION_DATA];
}

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, info};
use m3u_filter_rs::{EntryFilter, format::FilteredPlaylist};
use tempfile::NamedTempFile;

use crate::{Config, FilterReport, errors::FilterJobError};

/// Reads the input playlist, filters it and writes the result.
///
/// The input is read in full before anything is written, so a read or
/// encoding failure leaves the output path untouched.
pub fn run(config: &Config) -> Result<FilterReport, FilterJobError> {
    let output_path = config.output_path();
    let filter = EntryFilter::new(config.keyword_set()?);
    info!(
        "Filtering {} with {} keywords",
        config.input_path.display(),
        filter.keywords().keywords().len()
    );

    let text = read_playlist(&config.input_path)?;
    let playlist = filter.filter_text(&text);
    write_playlist(&output_path, &playlist)?;

    info!("Wrote {}: {}", output_path.display(), playlist.summary);
    Ok(FilterReport {
        output_path,
        summary: playlist.summary,
    })
}

pub fn read_playlist(path: impl AsRef<Path>) -> Result<String, FilterJobError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FilterJobError::Read(path.to_owned(), e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|e| FilterJobError::Encoding(path.to_owned(), e))
}

/// Writes into a temporary file next to `path`, then persists it over `path`.
/// The temporary file is removed on drop when anything fails.
pub fn write_playlist(
    path: impl AsRef<Path>,
    playlist: &FilteredPlaylist,
) -> Result<(), FilterJobError> {
    let path = path.as_ref();
    write_lines(path, playlist).map_err(|e| FilterJobError::Write(path.to_owned(), e))
}

fn write_lines(path: &Path, playlist: &FilteredPlaylist) -> io::Result<()> {
    let dir = match path.parent() {
        Some(v) if !v.as_os_str().is_empty() => v,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        for line in playlist.lines.iter() {
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    debug!("Persisting {} to {}", file.path().display(), path.display());

    file.persist(path)?;
    Ok(())
}

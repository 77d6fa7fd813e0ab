use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;
use m3u_filter_rs::{KeywordError, KeywordSet};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub input_path: PathBuf,
    /// Defaults to the input path with `_filtered` before the extension
    pub output_path: Option<PathBuf>,
    /// Defaults to [`m3u_filter_rs::DEFAULT_KEYWORDS`]
    pub keywords: Option<Vec<String>>,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            keywords: None,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_keywords<S: Into<String>>(mut self, keywords: impl IntoIterator<Item = S>) -> Self {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output_path {
            Some(v) => v.clone(),
            None => filtered_path(&self.input_path),
        }
    }

    pub fn keyword_set(&self) -> Result<KeywordSet, KeywordError> {
        match &self.keywords {
            Some(v) => KeywordSet::new(v),
            None => Ok(KeywordSet::default()),
        }
    }
}

/// `list.m3u` -> `list_filtered.m3u`
fn filtered_path(input_path: &Path) -> PathBuf {
    let mut file_name = input_path.file_stem().unwrap_or_default().to_owned();
    file_name.push("_filtered");
    if let Some(extension) = input_path.extension() {
        file_name.push(".");
        file_name.push(extension);
    }

    input_path.with_file_name(file_name)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = serde_yaml::from_str(
            r"
inputPath: playlist.m3u
outputPath: out/sports.m3u
keywords:
  - sports
  - Arsenal
",
        )
        .unwrap();

        assert_eq!(config.input_path, PathBuf::from("playlist.m3u"));
        assert_eq!(config.output_path(), PathBuf::from("out/sports.m3u"));
        let keywords = config.keyword_set().unwrap();
        assert_eq!(keywords.keywords().len(), 2);
        assert!(keywords.is_match("#EXTINF:-1,ARSENAL"));
    }

    #[test]
    fn test_config_defaults() {
        let config: Config = serde_yaml::from_str("inputPath: lists/playlist_plus.m3u").unwrap();

        assert_eq!(
            config.output_path(),
            PathBuf::from("lists/playlist_plus_filtered.m3u")
        );
        assert!(config.keyword_set().unwrap().is_match("#EXTINF:-1,Peacock"));
    }

    #[test]
    fn test_filtered_path_without_extension() {
        assert_eq!(
            Config::new("playlist").output_path(),
            PathBuf::from("playlist_filtered")
        );
    }

    #[test]
    fn test_builder() {
        let config = Config::new("a.m3u8")
            .with_output_path("b.m3u8")
            .with_keywords(["news"]);
        assert_eq!(config.output_path(), PathBuf::from("b.m3u8"));
        assert!(config.keyword_set().unwrap().is_match("#EXTINF:-1,World NEWS"));
    }

    #[test]
    fn test_missing_input_path() {
        assert!(serde_yaml::from_str::<Config>("keywords: [a]").is_err());
    }
}

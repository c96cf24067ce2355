//! Settings for a conversion.

use std::path::PathBuf;
use std::str::FromStr;

use crate::graph::KnownTags;
use crate::Error;

/// Image format produced by the rendering engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Png,
}

impl Format {
    /// File extension of the output image.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
        }
    }

    /// Engine flag selecting the format and its rendering back-end.
    pub fn engine_flag(self) -> String {
        let backend = match self {
            Format::Png => "cairo",
        };
        format!("-T{}:{backend}", self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Format::Png),
            other => Err(Error::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// How to render a single expression.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tags shown without angle brackets.
    pub known_tags: KnownTags,
    /// Base name of the output image, without extension.
    pub output_name: String,
    pub format: Format,
    /// Graph layout executable, looked up on PATH.
    pub engine: String,
    /// Where the temporary graph file and the output image are written.
    pub directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            known_tags: KnownTags::new(),
            output_name: "output".to_owned(),
            format: Format::default(),
            engine: "dot".to_owned(),
            directory: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn with_known_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.known_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Path of the image the engine is asked to write.
    pub fn output_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.output_name, self.format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_uses_cairo() -> Result<(), Error> {
        let format: Format = "png".parse()?;
        assert_eq!(format, Format::Png);
        assert_eq!(format.engine_flag(), "-Tpng:cairo");
        Ok(())
    }

    #[test]
    fn reject_unwired_formats() {
        match "svg".parse::<Format>() {
            Err(Error::UnsupportedFormat(f)) => assert_eq!(f, "svg"),
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn output_path_from_name_and_format() {
        let config = Config::default()
            .with_directory("/tmp/graphs")
            .with_output_name("tree");
        assert_eq!(config.output_path(), PathBuf::from("/tmp/graphs/tree.png"));
        assert_eq!(Config::default().output_path(), PathBuf::from("./output.png"));
    }

    #[test]
    fn known_tags_from_any_strings() {
        let config = Config::default().with_known_tags(["S", "NP"]);
        assert!(config.known_tags.contains("S"));
        assert!(!config.known_tags.contains("VP"));
    }
}

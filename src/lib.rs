//! Render S-expressions (e.g. parse trees) as images, via Graphviz.
//!
//! The pipeline is: [`reader::read`] the text into a [`data::Tree`],
//! flatten it into graph entries with [`graph::build`],
//! then write Graphviz and run the layout engine with the `render` module.

pub mod config;
pub mod data;
pub mod graph;
pub mod reader;
#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "render")]
use std::path::PathBuf;

pub use config::{Config, Format};
pub use data::Tree;
pub use reader::{read, ReadErr};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bad S-expression: {0}")]
    Read(#[from] ReadErr),
    #[error("unsupported output format {0:?}")]
    UnsupportedFormat(String),
    #[error("failed to launch {engine}: {source}")]
    Spawn {
        engine: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convert an S-expression into an image, as described by the config.
///
/// Returns the path the engine was asked to write.
#[cfg(feature = "render")]
pub fn sexp2png(sexpr: &str, config: &Config) -> Result<PathBuf, Error> {
    let tree = reader::read(sexpr)?;
    let entries = graph::build(&tree, &config.known_tags);
    let gv = render::to_dot(&entries);
    render::render_image(&gv, config)
}

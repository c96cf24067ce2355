//! Render graph entries as Graphviz, and Graphviz as an image.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use dot_writer::Attributes;
use dot_writer::DotWriter;

use crate::config::Config;
use crate::graph::Entry;
use crate::Error;

/// Escape a string for use inside a quoted DOT attribute.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '"' => out.push_str(r#"\""#),
            '\n' => out.push_str(r"\n"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Write the entries as a Graphviz digraph, in order.
pub fn to_dot(entries: &[Entry]) -> Vec<u8> {
    let mut outbuf = Vec::new();
    {
        let mut writer = DotWriter::from(&mut outbuf);
        let mut graph = writer.digraph();
        for entry in entries {
            match entry {
                Entry::Node {
                    id,
                    label,
                    attributes,
                } => {
                    let mut node = graph.node_named(id.to_string());
                    node.set("label", &escape(label), true);
                    for (key, value) in attributes {
                        node.set(key, &escape(value), true);
                    }
                }
                Entry::Edge {
                    from,
                    to,
                    attributes,
                } => {
                    let mut edge = graph.edge(from.to_string(), to.to_string());
                    let mut edge_attributes = edge.attributes();
                    for (key, value) in attributes {
                        edge_attributes.set(key, &escape(value), true);
                    }
                }
            }
        }
    }
    outbuf
}

/// Render Graphviz source into an image, per the config.
///
/// The source is written to a randomly-named file in the config's directory,
/// which is removed once the engine exits (or fails to start).
/// An engine that runs but fails is logged, not reported as an error;
/// the returned path may then not exist.
pub fn render_image(gv: &[u8], config: &Config) -> Result<PathBuf, Error> {
    let output = config.output_path();

    let mut source = tempfile::Builder::new()
        .prefix("temp_")
        .suffix(".gv")
        .rand_bytes(10)
        .tempfile_in(&config.directory)?;
    source.write_all(gv)?;
    source.flush()?;
    tracing::debug!("DOT source in {}", source.path().display());

    let status = Command::new(&config.engine)
        .arg(config.format.engine_flag())
        .arg(source.path())
        .arg("-o")
        .arg(&output)
        .status()
        .map_err(|e| Error::Spawn {
            engine: config.engine.clone(),
            source: e,
        })?;
    if status.success() {
        tracing::info!("wrote {}", output.display());
    } else {
        tracing::warn!(
            "{} failed ({status}); {} may be missing",
            config.engine,
            output.display()
        );
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build, KnownTags};
    use crate::reader::read;

    fn dot_for(input: &str, known: &[&str]) -> Result<String, Error> {
        let known: KnownTags = known.iter().map(|t| t.to_string()).collect();
        let entries = build(&read(input)?, &known);
        Ok(String::from_utf8_lossy(&to_dot(&entries)).into_owned())
    }

    #[test]
    fn escape_quotes_and_backslashes() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("line\nbreak\u{7}"), r"line\nbreak");
        assert_eq!(escape("<NP=H>"), "<NP=H>");
    }

    #[test]
    fn emits_digraph() -> Result<(), Error> {
        let dot = dot_for("(foo (bar x))", &["foo"])?;
        assert!(dot.trim_start().starts_with("digraph"), "got: {dot}");
        assert!(dot.trim_end().ends_with('}'), "got: {dot}");
        assert!(dot.contains(r#"label="foo""#), "got: {dot}");
        assert!(dot.contains(r#"label="<bar>""#), "got: {dot}");
        assert!(dot.contains(r#"shape="box""#), "got: {dot}");
        assert!(dot.contains(r#"shape="none""#), "got: {dot}");
        assert!(dot.contains(r#"arrowhead="none""#), "got: {dot}");
        assert!(dot.contains("0 -> 1"), "got: {dot}");
        assert!(dot.contains("1 -> 2"), "got: {dot}");
        Ok(())
    }

    #[test]
    fn statements_follow_entry_order() -> Result<(), Error> {
        let dot = dot_for("(a b c)", &[])?;
        let position = |needle: &str| {
            dot.find(needle)
                .unwrap_or_else(|| panic!("{needle} missing from {dot}"))
        };
        let first = position(r#"label="b""#);
        let edge = position("0 -> 1");
        let second = position(r#"label="c""#);
        assert!(first < edge && edge < second, "got: {dot}");
        Ok(())
    }

    #[test]
    fn quoted_atoms_stay_inside_label() -> Result<(), Error> {
        let dot = dot_for(r#"(say "hi")"#, &["say"])?;
        assert!(dot.contains(r#"label="\"hi\"""#), "got: {dot}");
        Ok(())
    }

    #[test]
    fn bold_head_edge() -> Result<(), Error> {
        let dot = dot_for("(S (NP=H x) (VP y))", &[])?;
        assert_eq!(dot.matches(r#"style="bold""#).count(), 1, "got: {dot}");
        Ok(())
    }
}

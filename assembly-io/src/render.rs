use crate::error::Result;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders a sequence of items separated by single spaces.
pub fn render_path<Item: Display>(path: impl IntoIterator<Item = Item>) -> String {
    path.into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders an adjacency list with one line `node: neighbor neighbor ...` per node.
/// Lines are sorted by node label, neighbors keep their order.
pub fn render_adjacency_list<Node, Neighbors>(
    adjacency_list: impl IntoIterator<Item = (Node, Neighbors)>,
) -> String
where
    Node: Display,
    Neighbors: IntoIterator,
    Neighbors::Item: Display,
{
    let mut lines: Vec<_> = adjacency_list
        .into_iter()
        .map(|(node, neighbors)| (node.to_string(), render_path(neighbors)))
        .collect();
    lines.sort_by(|(node_a, _), (node_b, _)| node_a.cmp(node_b));

    lines
        .into_iter()
        .map(|(node, neighbors)| {
            if neighbors.is_empty() {
                format!("{}:", node)
            } else {
                format!("{}: {}", node, neighbors)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes a rendered result to a file, followed by a newline.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", content)?;
    writer.flush()?;

    debug!("Wrote {} bytes to {:?}", content.len() + 1, path);
    Ok(())
}

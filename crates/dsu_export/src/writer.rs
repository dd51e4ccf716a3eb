use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::{ExportError, Graph};

fn sanitize_filename(input: &str) -> String {
    let mut out = String::new();
    for c in input.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' => out.push(c),
            ' ' => out.push('_'),
            _ => {}
        }
    }
    if out.is_empty() { "dsu".to_string() } else { out }
}

/// Writes `graph` to `<output_base>.json` in the working directory and
/// returns the path.
pub fn write_graph(graph: &Graph, output_base: &str) -> Result<PathBuf, ExportError> {
    let filename = format!("{}.json", sanitize_filename(output_base));
    let path = PathBuf::from(filename);
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DemoConfig, run_demo};

    #[test]
    fn strips_unsafe_filename_characters() {
        assert_eq!(sanitize_filename("de mo/graph"), "de_mograph");
        assert_eq!(sanitize_filename("///"), "dsu");
    }

    #[test]
    fn written_file_reads_back_as_the_same_graph() {
        let graph = run_demo(&DemoConfig::default()).unwrap();
        let path = write_graph(&graph, "dsu_writer_test").unwrap();
        assert_eq!(path, PathBuf::from("dsu_writer_test.json"));
        let contents = std::fs::read_to_string(&path).unwrap();
        let read_back: Graph = serde_json::from_str(&contents).unwrap();
        assert_eq!(graph, read_back);
        std::fs::remove_file(&path).unwrap();
    }
}

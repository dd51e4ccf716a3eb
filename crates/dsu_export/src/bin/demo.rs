use dsu_export::{DemoConfig, run_demo, write_graph};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::default();
    let graph = run_demo(&config)?;
    let path = write_graph(&graph, "dsu_graph")?;
    println!(
        "wrote {} ({} nodes, {} links, seed {})",
        path.display(),
        graph.nodes.len(),
        graph.links.len(),
        config.seed
    );
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use day8::{BoundedCLIArgs, JunctionBoxes};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = BoundedCLIArgs::parse();
    let points = day8::read_points(&args.input_path).with_context(|| {
        format!(
            "Failed to read junction boxes from given file({}).",
            args.input_path.display()
        )
    })?;
    let boxes = JunctionBoxes::new(points)
        .context("Failed to compute distances between junction boxes.")?;
    info!(
        "Loaded {} junction box(es), {} possible connection(s).",
        boxes.points().len(),
        boxes.connections().len()
    );

    let connections_n = args
        .connections_n
        .unwrap_or(day8::DEFAULT_CONNECTIONS_N);
    let (sizes, product) = boxes
        .largest_circuits_product(connections_n, 3)
        .with_context(|| {
            format!(
                "Failed to find the 3 largest circuits after connecting the {} shortest pair(s).",
                connections_n
            )
        })?;
    println!(
        "After connecting the {} shortest pair(s), the 3 largest circuits have {} junction boxes, their product is {}.",
        connections_n,
        sizes
            .iter()
            .map(|size| size.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        product
    );

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use day8::{CLIArgs, JunctionBoxes};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CLIArgs::parse();
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

    let connection = boxes
        .critical_connection()
        .context("Failed to connect all junction boxes into a single circuit.")?;
    let from_point = boxes.point(connection.from_ind());
    let to_point = boxes.point(connection.to_ind());
    println!(
        "The last connection joins {} and {}, the product of their X coordinates({} * {}) is {}.",
        from_point,
        to_point,
        from_point.x(),
        to_point.x(),
        boxes.x_product(&connection)
    );

    Ok(())
}

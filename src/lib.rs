pub mod circuit;
pub mod connection;
pub mod point;

use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

pub use circuit::Circuits;
pub use connection::Connection;
pub use point::Point;

pub const DEFAULT_CONNECTIONS_N: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidPointText(String),
    InvalidCoordinateText(String),
    TooFewCircuits(usize, usize), // (number of circuits found, expected number of circuits).
    NeverFullyConnected(usize),
    NoConnectionNeeded,
    DistanceOverflow(Point, Point),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPointText(s) => write!(
                f,
                "Invalid text({}) for a point, expect 3 coordinates separated by commas.",
                s
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of point.", s)
            }
            Error::TooFewCircuits(found_n, expect_n) => write!(
                f,
                "Found only {} circuit(s), expect at least {}.",
                found_n, expect_n
            ),
            Error::NeverFullyConnected(circuits_n) => write!(
                f,
                "Run out of connections with {} circuit(s) left, the junction boxes never fully connect.",
                circuits_n
            ),
            Error::NoConnectionNeeded => write!(
                f,
                "There's only one junction box, no connection is needed to form a single circuit."
            ),
            Error::DistanceOverflow(a, b) => write!(
                f,
                "Squared distance between {} and {} is too large to compute.",
                a, b
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct BoundedCLIArgs {
    pub input_path: PathBuf,
    pub connections_n: Option<usize>,
}

/// Junction boxes with every possible connection between them, shortest first.
#[derive(Debug)]
pub struct JunctionBoxes {
    points: Vec<Point>,
    connections: Vec<Connection>,
}

impl JunctionBoxes {
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        let connections = connection::sorted_connections(&points)?;
        debug!(
            "Built {} connection(s) among {} junction box(es).",
            connections.len(),
            points.len()
        );

        Ok(Self {
            points,
            connections,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, ind: usize) -> &Point {
        &self.points[ind]
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Circuits formed after applying the `connections_n` shortest connections.
    pub fn connect_shortest(&self, connections_n: usize) -> Circuits {
        let mut circuits = Circuits::new(self.points.len());
        let used_n = connections_n.min(self.connections.len());
        let merged_n = circuits.connect(&self.connections[..used_n]);
        debug!(
            "Applied {} shortest connection(s), {} of them merged circuits, {} circuit(s) left.",
            used_n,
            merged_n,
            circuits.circuits_n()
        );

        circuits
    }

    pub fn largest_circuits_product(
        &self,
        connections_n: usize,
        circuits_n: usize,
    ) -> Result<(Vec<usize>, usize), Error> {
        let sizes = self.connect_shortest(connections_n).largest_sizes(circuits_n)?;
        let product: usize = sizes.iter().product();

        Ok((sizes, product))
    }

    /// The connection which joins all junction boxes into a single circuit.
    pub fn critical_connection(&self) -> Result<Connection, Error> {
        Circuits::new(self.points.len()).connect_until_single(&self.connections)
    }

    pub fn x_product(&self, connection: &Connection) -> i128 {
        i128::from(self.point(connection.from_ind()).x())
            * i128::from(self.point(connection.to_ind()).x())
    }
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut points = Vec::new();
    let mut is_first_line = true;
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if is_first_line {
            is_first_line = false;
            if point::is_header(text) {
                debug!("Skip header line({}).", text);
                continue;
            }
        }

        let point = Point::try_from(text)
            .with_context(|| format!("Failed to parse point in line {}.", ind + 1))?;
        points.push(point);
    }

    Ok(points)
}

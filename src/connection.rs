use crate::{Error, Point};

/// A possible cable between two junction boxes, given by their indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    sq_dist: u128,
    from_ind: usize,
    to_ind: usize,
}

impl Connection {
    pub fn new(sq_dist: u128, from_ind: usize, to_ind: usize) -> Self {
        Self {
            sq_dist,
            from_ind,
            to_ind,
        }
    }

    pub fn sq_dist(&self) -> u128 {
        self.sq_dist
    }

    pub fn from_ind(&self) -> usize {
        self.from_ind
    }

    pub fn to_ind(&self) -> usize {
        self.to_ind
    }
}

/// Every unordered pair of points exactly once, in order (0, 1), (0, 2), ..., (1, 2), ...
pub fn all_connections(points: &[Point]) -> Result<Vec<Connection>, Error> {
    let points_n = points.len();
    let mut connections = Vec::with_capacity(points_n * points_n.saturating_sub(1) / 2);
    for (from_ind, from_point) in points.iter().enumerate() {
        for (to_ind, to_point) in points.iter().enumerate().skip(from_ind + 1) {
            let sq_dist = from_point
                .sq_dist(to_point)
                .ok_or(Error::DistanceOverflow(*from_point, *to_point))?;
            connections.push(Connection::new(sq_dist, from_ind, to_ind));
        }
    }

    Ok(connections)
}

/// Stable, so connections of equal length keep their enumeration order.
pub fn sort_by_distance(connections: &mut [Connection]) {
    connections.sort_by_key(Connection::sq_dist);
}

pub fn sorted_connections(points: &[Point]) -> Result<Vec<Connection>, Error> {
    let mut connections = all_connections(points)?;
    sort_by_distance(&mut connections);

    Ok(connections)
}

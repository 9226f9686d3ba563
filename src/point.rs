use std::fmt::Display;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

impl TryFrom<&str> for Point {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let coord_texts = value.split(',').map(str::trim).collect::<Vec<_>>();
        if coord_texts.len() != 3 {
            return Err(Error::InvalidPointText(value.to_string()));
        }

        let coords = coord_texts
            .iter()
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| Error::InvalidCoordinateText(s.to_string()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Point::new(coords[0], coords[1], coords[2]))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Point {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    /// None if the squared distance doesn't fit in a `u128`.
    pub fn sq_dist(&self, other: &Point) -> Option<u128> {
        let sq_diff = |a: i64, b: i64| u128::from(a.abs_diff(b)).pow(2);
        sq_diff(self.x, other.x)
            .checked_add(sq_diff(self.y, other.y))?
            .checked_add(sq_diff(self.z, other.z))
    }
}

// A header line starts with a letter, e.g. "x,y,z".
pub(crate) fn is_header(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_alphabetic())
}

use std::fmt;

use crate::roster::Roster;

pub const HEADER: &str = "Selected Class Representatives:";

/// The chosen names, kept in the order they were drawn.
pub struct Selection<'a> {
    names: Vec<&'a str>,
}

impl<'a> Selection<'a> {
    pub fn new(roster: &'a Roster, indices: &[usize]) -> Self {
        let names = indices.iter().map(|&index| roster.names()[index].as_str()).collect();
        Self { names }
    }
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{HEADER}")?;
        for name in &self.names {
            writeln!(f, "{name}")?;
        }
        Ok(())
    }
}

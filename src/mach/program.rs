use super::Listing;
use crate::lang::{data_items, Line};
use std::rc::Rc;

/// Indexed snapshot of the listing taken for execution.
///
/// Addresses into a program are positions, not line numbers, so the
/// snapshot is rebuilt whenever the listing changes.
#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new(listing: &Listing) -> Program {
        Program {
            lines: listing.lines().cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Position of a line number. First match wins.
    pub fn find(&self, number: u16) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.number() == Some(number))
    }

    /// Every `DATA` item in line order.
    pub fn data(&self) -> Vec<Rc<str>> {
        self.lines
            .iter()
            .flat_map(|line| line.statements().iter())
            .filter_map(|statement| data_items(statement))
            .flatten()
            .collect()
    }
}

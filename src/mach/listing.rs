use crate::error;
use crate::lang::{Error, Line, LineNumber, MaxValue};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::RangeInclusive;
use std::rc::Rc;

/// Longest line accepted from a file or the keyboard.
pub const MAX_LINE_LEN: usize = 255;

/// The stored program, ordered by line number.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Rc<BTreeMap<u16, Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Rc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Stores a numbered line, replacing any line with the same number.
    /// A line with an empty body deletes instead.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let number = line.number()?;
        if line.is_empty() {
            return self.remove(number);
        }
        Rc::make_mut(&mut self.source).insert(number, line)
    }

    pub fn remove(&mut self, number: u16) -> Option<Line> {
        if !self.source.contains_key(&number) {
            return None;
        }
        Rc::make_mut(&mut self.source).remove(&number)
    }

    pub fn line(&self, num: usize) -> Option<String> {
        if num > LineNumber::max_value() as usize {
            return None;
        }
        self.source.get(&(num as u16)).map(|line| line.to_string())
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }

    pub fn list(&self, range: RangeInclusive<u16>) -> impl Iterator<Item = String> + '_ {
        self.source.range(range).map(|(_, line)| line.to_string())
    }

    /// Used for loading a new Listing from a file.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(line)?;
        if line.is_direct() {
            if line.is_empty() {
                return Ok(());
            }
            return Err(error!(DirectStatementInFile));
        }
        self.insert(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(lines: &[&str]) -> Listing {
        let mut listing = Listing::default();
        for line in lines {
            listing.load_str(line).unwrap();
        }
        listing
    }

    #[test]
    fn test_ordered_and_replaced() {
        let listing = listing(&["20 PRINT 2", "10 PRINT 1", "20 PRINT 3"]);
        let lines: Vec<String> = listing.lines().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["10 PRINT 1", "20 PRINT 3"]);
    }

    #[test]
    fn test_empty_body_deletes() {
        let mut listing = listing(&["10 PRINT 1", "20 PRINT 2"]);
        listing.load_str("10").unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.line(20), Some("20 PRINT 2".to_string()));
        assert_eq!(listing.line(10), None);
    }

    #[test]
    fn test_list_range() {
        let listing = listing(&["10 A=1", "20 B=2", "30 C=3"]);
        let lines: Vec<String> = listing.list(15..=30).collect();
        assert_eq!(lines, vec!["20 B=2", "30 C=3"]);
    }

    #[test]
    fn test_direct_statement_in_file() {
        let mut listing = Listing::default();
        let e = listing.load_str("PRINT 1").unwrap_err();
        assert_eq!(e.to_string(), "DIRECT STATEMENT IN FILE");
        assert!(listing.load_str("   ").is_ok());
    }

    #[test]
    fn test_line_too_long() {
        let mut listing = Listing::default();
        let long = format!("10 PRINT \"{}\"", "X".repeat(MAX_LINE_LEN));
        let e = listing.load_str(&long).unwrap_err();
        assert_eq!(e.to_string(), "LINE BUFFER OVERFLOW");
        assert!(listing.is_empty());
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let mut listing = listing(&["10 A=1"]);
        let saved = listing.clone();
        listing.load_str("20 B=2").unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(listing.len(), 2);
    }
}

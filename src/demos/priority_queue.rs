use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::io::{self, Write};

use super::SEPARATOR;

/// A grade with a total order, so that it can be kept in a [`BinaryHeap`].
#[derive(Debug, Clone, Copy)]
struct Grade(f64);

impl PartialEq for Grade {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Grade {}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

const GRADES: [f64; 5] = [3.0, 2.5, 4.0, 1.5, 2.0];

/// Serves the highest priority first, regardless of insertion order.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut grades_priority: BinaryHeap<Grade> = GRADES.into_iter().map(Grade).collect();

    writeln!(out, "PRIORITY QUEUE")?;
    writeln!(out, "Size: {}", grades_priority.len())?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "PRIORITY QUEUE INVERSED")?;

    // The same values wrapped in Reverse turn the max-heap into a min-heap.
    let mut ascending: BinaryHeap<Reverse<Grade>> =
        grades_priority.iter().copied().map(Reverse).collect();
    while let Some(Reverse(Grade(grade))) = ascending.pop() {
        writeln!(out, "{grade}")?;
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "BACK TO DESCENDING PRIORITY QUEUE")?;

    while let Some(Grade(grade)) = grades_priority.pop() {
        writeln!(out, "{grade}")?;
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "NORMAL QUEUE")?;

    let mut grades: VecDeque<f64> = GRADES.into_iter().collect();
    writeln!(out, "Size: {}", grades.len())?;
    while let Some(grade) = grades.pop_front() {
        writeln!(out, "{grade}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::capture;

    #[test]
    fn test_output() {
        let output = capture(run);
        let sections: Vec<_> = output.split(SEPARATOR).map(str::trim).collect();

        assert_eq!(
            sections,
            [
                "PRIORITY QUEUE\nSize: 5",
                "PRIORITY QUEUE INVERSED\n1.5\n2\n2.5\n3\n4",
                "BACK TO DESCENDING PRIORITY QUEUE\n4\n3\n2.5\n2\n1.5",
                "NORMAL QUEUE\nSize: 5\n3\n2.5\n4\n1.5\n2",
            ]
        );
    }

    #[test]
    fn test_grade_order() {
        assert!(Grade(1.5) < Grade(2.0));
        assert_eq!(Grade(2.5), Grade(2.5));
        assert_eq!(
            Grade(-0.0).cmp(&Grade(0.0)),
            Ordering::Less,
            "Grades use the IEEE total order."
        );
    }
}

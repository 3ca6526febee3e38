//! Console demonstrations, one per linear data structure. Each section writes to the provided
//! output rather than straight to stdout so that the expected output can be checked in tests.

use std::fmt::Display;
use std::io::{self, Write};

mod doubly_linked_list;
mod graph;
mod priority_queue;
mod queue;
mod singly_linked_list;
mod stack;

const SEPARATOR: &str = "-------------------------------------------";

pub fn run_all<W: Write>(out: &mut W) -> io::Result<()> {
    section(out, "Singly Linked List", singly_linked_list::run)?;
    section(out, "Queue", queue::run)?;
    section(out, "Stack", stack::run)?;
    section(out, "Priority Queue", priority_queue::run)?;
    section(out, "Doubly Linked List", doubly_linked_list::run)?;
    section(out, "Graph Algorithms", graph::run)
}

fn section<W: Write>(
    out: &mut W,
    title: &str,
    run: fn(&mut W) -> io::Result<()>,
) -> io::Result<()> {
    writeln!(out, "\n[{title}]\n")?;
    run(out)
}

/// Writes `label` followed by every item separated by a single space.
fn write_items<W, I>(out: &mut W, label: &str, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    write!(out, "{label}")?;
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        write!(out, "{first}")?;
    }
    for item in items {
        write!(out, " {item}")?;
    }
    writeln!(out)
}

#[cfg(test)]
fn capture(run: fn(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut out = Vec::new();
    run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_order() {
        let output = capture(run_all);
        let titles: Vec<_> = output
            .lines()
            .filter(|line| line.starts_with('['))
            .collect();

        assert_eq!(
            titles,
            [
                "[Singly Linked List]",
                "[Queue]",
                "[Stack]",
                "[Priority Queue]",
                "[Doubly Linked List]",
                "[Graph Algorithms]",
            ]
        );
    }

    #[test]
    fn test_write_items() {
        let mut out = Vec::new();
        write_items(&mut out, "List: ", [1, 2, 3]).unwrap();
        write_items(&mut out, "Empty:", Vec::<u8>::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "List: 1 2 3\nEmpty:\n");
    }
}

use std::collections::LinkedList;
use std::io::{self, Write};

use super::{SEPARATOR, write_items};

/// Inserts `value` so that it ends up at `index`, shifting the rest of the list back.
fn insert_at<T>(list: &mut LinkedList<T>, index: usize, value: T) {
    let mut rest = list.split_off(index);
    list.push_back(value);
    list.append(&mut rest);
}

/// The standard library's list has links in both directions, but no stable cursor API, so the
/// higher-level operations below go through splitting and collecting.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut list: LinkedList<i32> = (1..=5).collect();

    list.push_front(0);
    list.push_back(6);
    // 0 1 2 3 4 5 6

    insert_at(&mut list, 3, 99);
    // 0 1 2 99 3 4 5 6

    insert_at(&mut list, 6, 4);
    insert_at(&mut list, 7, 5);
    // 0 1 2 99 3 4 4 5 5 6

    writeln!(out, "INSERT 99 BEFORE INDEX 3 & INSERT 4 BEFORE 5")?;
    write_items(out, "List: ", &list)?;

    // Removes every 4, not just the first one.
    list = list.into_iter().filter(|&item| item != 4).collect();

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "REVERSED LIST")?;
    list = list.into_iter().rev().collect();
    write_items(out, "List: ", &list)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "LIST AFTER SORTING")?;
    let mut sorted: Vec<_> = list.into_iter().collect();
    sorted.sort_unstable();
    write_items(out, "List ", &sorted)?;

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "LIST AFTER REMOVING DUPLICATES")?;
    // dedup only collapses neighbouring duplicates, so it has to come after sorting.
    sorted.dedup();
    list = sorted.into_iter().collect();
    write_items(out, "List: ", &list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::capture;

    #[test]
    fn test_output() {
        assert_eq!(
            capture(run),
            "INSERT 99 BEFORE INDEX 3 & INSERT 4 BEFORE 5\n\
             List: 0 1 2 99 3 4 4 5 5 6\n\
             -------------------------------------------\n\
             REVERSED LIST\n\
             List: 6 5 5 3 99 2 1 0\n\
             -------------------------------------------\n\
             LIST AFTER SORTING\n\
             List 0 1 2 3 5 5 6 99\n\
             -------------------------------------------\n\
             LIST AFTER REMOVING DUPLICATES\n\
             List: 0 1 2 3 5 6 99\n"
        );
    }

    #[test]
    fn test_insert_at() {
        let mut list: LinkedList<_> = [1, 3].into_iter().collect();
        insert_at(&mut list, 1, 2);
        insert_at(&mut list, 3, 4);
        insert_at(&mut list, 0, 0);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }
}

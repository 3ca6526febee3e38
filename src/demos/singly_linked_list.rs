use std::io::{self, Write};

use linear_collections::collections::linked::SinglyLinkedList;

pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut list = SinglyLinkedList::new();

    list.push_front(10); // 10
    list.push_back(20); // 10 -> 20
    list.push_front(5); // 5 -> 10 -> 20
    list.write_to(out)?;

    list.remove(&10); // 5 -> 20
    list.write_to(out)?;

    list.pop_front(); // 20
    list.write_to(out)?;

    list.extend([30, 40]);
    list.insert_after(0, 25);
    writeln!(out, "After insert: {}", list.display_with(" -> "))?;

    list.reverse();
    writeln!(out, "Reversed: {}", list.display_with(" -> "))?;

    if let (Some(front), Some(back)) = (list.front(), list.back()) {
        writeln!(out, "Front: {front}, Back: {back}, Length: {}", list.len())?;
    }

    list.clear();
    writeln!(out, "Cleared, is empty: {}", list.is_empty())?;
    list.write_to(out)
}

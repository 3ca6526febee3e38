use std::io::{self, Write};

/// Reports how far below the top `target` sits, searched without popping anything off the stack.
fn write_search<W: Write>(out: &mut W, stack: &[&str], target: &str) -> io::Result<()> {
    match stack.iter().rev().position(|item| *item == target) {
        Some(index) => writeln!(out, "{target} found at index: {index}"),
        None => writeln!(out, "{target} was not found in the Stack."),
    }
}

/// Last in, first out. Every operation works on the top element.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut languages = Vec::new();

    languages.push("C++"); // C++
    languages.push("Java"); // Java - C++
    languages.push("Python"); // Python - Java - C++

    if let Some(top) = languages.last() {
        writeln!(out, "Top element: {top}")?;
    }

    write_search(out, &languages, "C++")?;

    while let Some(language) = languages.pop() {
        writeln!(out, "Popping: {language}")?;
    }

    if languages.is_empty() {
        writeln!(out, "Stack is now empty")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::capture;

    #[test]
    fn test_output() {
        assert_eq!(
            capture(run),
            "Top element: Python\n\
             C++ found at index: 2\n\
             Popping: Python\n\
             Popping: Java\n\
             Popping: C++\n\
             Stack is now empty\n"
        );
    }

    #[test]
    fn test_search() {
        let mut out = Vec::new();
        let stack = ["C++", "Java", "Python"];
        write_search(&mut out, &stack, "Python").unwrap();
        write_search(&mut out, &stack, "Rust").unwrap();
        write_search(&mut out, &[], "C++").unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Python found at index: 0\n\
             Rust was not found in the Stack.\n\
             C++ was not found in the Stack.\n"
        );
    }
}

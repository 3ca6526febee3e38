use std::collections::VecDeque;
use std::io::{self, Write};

/// First in, first out. Elements join at the back and leave from the front.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let mut favourite_games = VecDeque::new();

    favourite_games.push_back("Minecraft"); // Minecraft
    favourite_games.push_back("NFS"); // Minecraft - NFS
    favourite_games.push_back("LN"); // Minecraft - NFS - LN
    favourite_games.push_back("Cuphead"); // Minecraft - NFS - LN - Cuphead

    if let (Some(front), Some(back)) = (favourite_games.front(), favourite_games.back()) {
        writeln!(out, "Front of the queue: {front}")?;
        writeln!(out, "Back of the queue: {back}")?;
    }
    writeln!(out, "The size of the queue is: {}", favourite_games.len())?;

    while let Some(game) = favourite_games.pop_front() {
        writeln!(out, "Game popped: {game}")?;
    }

    if favourite_games.is_empty() {
        writeln!(out, "The queue is empty")?;
    }
    writeln!(out, "The size of the queue is: {}", favourite_games.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::capture;

    #[test]
    fn test_output() {
        assert_eq!(
            capture(run),
            "Front of the queue: Minecraft\n\
             Back of the queue: Cuphead\n\
             The size of the queue is: 4\n\
             Game popped: Minecraft\n\
             Game popped: NFS\n\
             Game popped: LN\n\
             Game popped: Cuphead\n\
             The queue is empty\n\
             The size of the queue is: 0\n"
        );
    }
}

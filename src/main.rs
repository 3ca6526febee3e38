use std::io;

mod demos;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    demos::run_all(&mut stdout.lock())
}

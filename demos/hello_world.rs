//! Hello World Example
//!
//! Prints `new` and `Hello world!` once, then spins silently.

use console_demo::prelude::*;

fn main() -> Result<(), DemoError> {
    let mut demo = DemoLoop::new(StdoutConsole::new(), OneShot::<DefaultConfig>::new());
    demo.initialize()?;

    match demo.run_forever()? {}
}

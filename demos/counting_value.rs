//! Counting Value Example
//!
//! Prints `i = 0`, `i = 1`, ... until interrupted.

use console_demo::prelude::*;

fn main() -> Result<(), DemoError> {
    let mut demo = DemoLoop::new(StdoutConsole::new(), CountingValue::<DefaultConfig>::new());
    demo.initialize()?;

    match demo.run_forever()? {}
}

//! Static Value Example
//!
//! Prints `value = 1234` forever. Change `STATIC_VALUE` in the config and
//! rebuild to see it change.

use console_demo::prelude::*;

fn main() -> Result<(), DemoError> {
    let mut demo = DemoLoop::new(StdoutConsole::new(), StaticValue::<DefaultConfig>::new());
    demo.initialize()?;

    match demo.run_forever()? {}
}

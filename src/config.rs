//! Startup configuration.
//!
//! Built from command-line arguments: `gesture-demo [DEMO]`.
//! Log filtering goes through `RUST_LOG` (env_logger).

use std::time::Duration;

use crate::demo::{Demo, DemoParseError};
use crate::gesture::press::DEFAULT_LONG_PRESS;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub demo: Demo,
    /// Window size in logical pixels, phone-shaped
    pub window_size: [f32; 2],
    pub long_press: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: Demo::default(),
            window_size: [480.0, 800.0],
            long_press: DEFAULT_LONG_PRESS,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(DemoConfig),
    Help,
}

impl DemoConfig {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I, S>(args: I) -> Result<Command, DemoParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = DemoConfig::default();
        let mut demo_given = false;

        for arg in args {
            match arg.as_ref() {
                "-h" | "--help" => return Ok(Command::Help),
                name if !demo_given => {
                    config.demo = name.parse()?;
                    demo_given = true;
                }
                extra => {
                    return Err(DemoParseError {
                        message: format!("Unexpected argument '{}'", extra),
                    })
                }
            }
        }

        Ok(Command::Run(config))
    }
}

pub fn usage() -> String {
    let mut text = String::from("Usage: gesture-demo [DEMO]\n\nDemos:\n");
    for demo in Demo::ALL {
        let marker = if demo == Demo::default() { " (default)" } else { "" };
        text.push_str(&format!("  {:<14} {}{}\n", demo.name(), demo.title(), marker));
    }
    text
}

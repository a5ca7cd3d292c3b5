// Adapters layer: concrete narrators that write the transcript somewhere.

pub mod console;

pub use console::ConsoleNarrator;

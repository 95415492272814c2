//! State Module - Runtime input handling
//!
//! - **Keyboard** - Key bindings from terminal keys to navigation commands
//! - **Input** - crossterm event conversion, polling, command routing

mod input;
mod keyboard;

pub use input::*;
pub use keyboard::*;

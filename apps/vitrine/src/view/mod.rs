//! # View Layer
//!
//! A terminal front end over the commands. It owns the active category
//! filter and nothing else; every other piece of state lives in the store.
//!
//! ```text
//! view/
//! ├── mod.rs      ◄─── You are here
//! ├── command.rs  ◄─── "add 3 2" → ShellCommand::Add { .. }
//! ├── render.rs   ◄─── DTO → text
//! └── shell.rs    ◄─── line → command → DTO → text
//! ```

pub mod command;
pub mod render;
pub mod shell;

pub use command::{ParseError, ShellCommand};
pub use render::Renderer;
pub use shell::{Outcome, Shell};

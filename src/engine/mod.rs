mod errors;
mod renderer;
mod session;
#[cfg(test)]
mod tests;

pub use errors::SessionError;
pub use renderer::{Renderer, TerminalRenderer};
pub use session::{ImportSummary, Session};

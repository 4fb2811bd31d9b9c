pub mod helpers;
pub mod index;
pub mod operations;
pub mod scaffold;
pub mod types;

use minijinja::{AutoEscape, Environment};

/// A template environment with the settings every emitter shares.
fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_: &str| AutoEscape::None);
    env
}

//! Process-wide password hashing state.

use argon2::Argon2;
use once_cell::sync::OnceCell;

static ARGON2: OnceCell<Argon2<'static>> = OnceCell::new();

/// Initialize module state. Safe to call more than once.
pub fn init() {
    get_argon2();
}

pub fn get_argon2() -> &'static Argon2<'static> {
    ARGON2.get_or_init(Argon2::default)
}

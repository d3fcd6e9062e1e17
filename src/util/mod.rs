/// Debug-only invariant checkers, meant to be used inside `debug_assert!` macros
pub mod assertions;

//! Context-aware music selection.
//!
//! Stable import path for listening context. Only the names in [`EXPORTS`]
//! are part of the contract; everything else under `temporal` and `mood`
//! is internal and may change.

pub mod mood;
pub mod temporal;

use crate::error::ContextError;

/// Declared public surface of the `context` namespace.
pub const EXPORTS: [&str; 2] = ["TemporalContext", "MoodContext"];

// Binds each item and records its name from the same token, so `surface()`
// cannot disagree with what is actually re-exported.
macro_rules! reexport {
    ($($module:ident::$name:ident),+ $(,)?) => {
        $(pub use $module::$name;)+

        /// Names actually bound by the re-exports of this module.
        pub fn surface() -> &'static [&'static str] {
            &[$(stringify!($name)),+]
        }
    };
}

reexport!(temporal::TemporalContext, mood::MoodContext);

/// Check a declared export list against [`surface`].
///
/// Order does not matter. A name listed twice counts as unexpected.
pub fn verify_exports(declared: &[&str]) -> Result<(), ContextError> {
    let bound = surface();

    let missing: Vec<String> = bound
        .iter()
        .filter(|name| !declared.contains(*name))
        .map(|name| name.to_string())
        .collect();

    let mut seen: Vec<&str> = Vec::with_capacity(declared.len());
    let mut extra = Vec::new();
    for &name in declared {
        if !bound.iter().any(|b| *b == name) || seen.contains(&name) {
            extra.push(name.to_string());
        }
        seen.push(name);
    }

    if missing.is_empty() && extra.is_empty() {
        Ok(())
    } else {
        Err(ContextError::ExportDrift { missing, extra })
    }
}

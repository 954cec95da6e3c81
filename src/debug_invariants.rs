use crate::cursor_error::CursorError;

/// Trait for validating container and cursor invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), CursorError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            log::warn!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

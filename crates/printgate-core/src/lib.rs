//! printgate-core: a stateful gate that caps cumulative print arguments.
//!
//! [`PrintGate`] wraps an output sink and enforces a fixed budget on the
//! total number of positional values written through it over its lifetime.
//! Calls that fit the remaining budget pass through unchanged; the first
//! call that would overflow it is truncated to the values that still fit
//! and fails with [`GateError::BudgetExceeded`].
//!
//! A gate is driven through `&mut self`, so one gate cannot be invoked from
//! two threads at once; sharing a gate across threads requires external
//! synchronization.

pub mod error;
pub mod gate;
pub mod sink;

pub use error::GateError;
pub use gate::PrintGate;
pub use sink::{PrintOptions, PrintSink};

/// Stable crate label used by bootstrap smoke tests.
pub fn crate_label() -> &'static str {
    "printgate-core"
}

//! The bounded output gate.

use serde_json::Value;

use crate::error::GateError;
use crate::sink::{PrintOptions, PrintSink};

/// Stateful wrapper around a [`PrintSink`] that caps the cumulative number
/// of positional values written through it.
///
/// The limit is fixed at construction and the running count never exceeds
/// it. While a call fits the remaining budget it is forwarded whole,
/// preceded by a `Call <n> of '<name>'` diagnostic line written straight to
/// the sink. The first call that would overflow the budget is truncated to
/// the values that still fit, the count does not advance, and the call
/// fails with [`GateError::BudgetExceeded`]. Failure is per call, not
/// sticky: a later call that fits the remaining budget is still accepted,
/// and a zero-value call always succeeds.
///
/// There is no reset and no way to raise the limit after construction.
#[derive(Debug)]
pub struct PrintGate<S> {
    limit: usize,
    counter: usize,
    name: String,
    sink: S,
}

impl<S: PrintSink> PrintGate<S> {
    /// Wrap `sink` with a cumulative argument budget of `limit`. The
    /// diagnostic label defaults to `"print"`.
    pub fn new(limit: usize, sink: S) -> Self {
        Self::with_name(limit, sink, "print")
    }

    /// Like [`PrintGate::new`] with an explicit diagnostic label for the
    /// wrapped operation.
    pub fn with_name(limit: usize, sink: S, name: &str) -> Self {
        Self {
            limit,
            counter: 0,
            name: name.to_string(),
            sink,
        }
    }

    /// Write `args` through the gate with default rendering options.
    pub fn invoke(&mut self, args: &[Value]) -> Result<(), GateError> {
        self.invoke_with(args, &PrintOptions::default())
    }

    /// Write `args` through the gate, honoring the caller's separator and
    /// terminator.
    ///
    /// On overflow the first `remaining()` values are still written (a bare
    /// terminator when nothing fits), the count stays where it was, and
    /// `BudgetExceeded` is returned.
    pub fn invoke_with(&mut self, args: &[Value], opts: &PrintOptions) -> Result<(), GateError> {
        let n = args.len();
        if self.counter + n <= self.limit {
            self.counter += n;
            let diag = format!("Call {} of '{}'", self.counter, self.name);
            self.sink
                .write_values(&[Value::String(diag)], &PrintOptions::default())?;
            self.sink.write_values(args, opts)?;
            Ok(())
        } else {
            let remaining = self.limit.saturating_sub(self.counter);
            self.sink.write_values(&args[..remaining], opts)?;
            Err(GateError::BudgetExceeded { limit: self.limit })
        }
    }

    /// The configured budget.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Total values accepted so far.
    pub fn count(&self) -> usize {
        self.counter
    }

    /// Values the budget still admits.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.counter)
    }

    /// Borrow the wrapped sink, e.g. to inspect captured output.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the gate and recover the wrapped sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

//! Reusable observers for rootscope solvers.
//!
//! Every observer here implements [`Observer<Iteration>`] and works with any
//! method, either registered on a solver or scoped to a single run.
//!
//! - [`TimeObserver`] — elapsed time per iteration, read from an injected
//!   [`Timer`]; [`MonotonicTimer`] is the stock clock
//! - [`Recorder`] — a shared log of every iteration
//! - [`TracingObserver`] — one structured `tracing` event per iteration
//!
//! [`Observer<Iteration>`]: rootscope_core::Observer
//! [`Timer`]: rootscope_core::Timer

mod record;
mod time;
mod trace;

pub use record::Recorder;
pub use time::{MonotonicTimer, TimeObserver};
pub use trace::TracingObserver;

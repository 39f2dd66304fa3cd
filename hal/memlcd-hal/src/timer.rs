//! Periodic timer abstraction
//!
//! Drives VCOM inversion. The implementation owns the interrupt vector and
//! calls the registered handler from interrupt context on every period.

/// Handler invoked from the timer interrupt
pub type TickHandler = fn();

/// Periodic interrupt source
pub trait PeriodicTimer {
    /// Start firing `handler` every `period_ms` milliseconds
    ///
    /// Restarting an already running timer replaces the period and handler.
    fn start(&mut self, period_ms: u32, handler: TickHandler);

    /// Stop the timer; no further handler calls after this returns
    fn stop(&mut self);

    /// Whether the timer is currently running
    fn is_running(&self) -> bool;
}

//! Throttle Gate
//!
//! At most one pending bottom check per loader. Single-threaded, so a
//! `Cell` is all the synchronisation needed.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct ThrottleGate {
    pending: Cell<bool>,
}

impl ThrottleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns false if a timer is already pending.
    pub fn try_arm(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called when the pending timer fires
    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pending_timer() {
        let gate = ThrottleGate::new();
        assert!(gate.try_arm());
        assert!(!gate.try_arm());
        assert!(!gate.try_arm());
        assert!(gate.is_pending());

        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.try_arm());
    }
}

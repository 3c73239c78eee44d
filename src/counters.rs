use std::cmp::max;

/// Stack frame size assumed by the memory model of the recursive strategies.
pub const FRAME_BYTES: u64 = 32;

/// Instrumentation of one top-down distance computation.
///
/// Passed by `&mut` through the recursion. Reset at the start of every
/// computation.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostCounters {
    /// Number of (possibly cached) subproblem evaluations.
    pub calls: u64,
    /// Frames currently on the (real or simulated) call stack.
    pub depth: u64,
    /// Largest `depth` seen.
    pub max_depth: u64,
}

impl CostCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a call and push its frame.
    #[inline]
    pub fn enter(&mut self) {
        self.calls += 1;
        self.depth += 1;
        self.max_depth = max(self.max_depth, self.depth);
    }

    /// Pop the frame of the innermost call.
    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "leave() without matching enter()");
        self.depth -= 1;
    }

    /// Modelled stack usage at the deepest point of the computation.
    pub fn stack_bytes(&self) -> u64 {
        self.max_depth * FRAME_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_tracks_nesting() {
        let mut c = CostCounters::new();
        c.enter();
        c.enter();
        c.leave();
        c.enter();
        c.enter();
        c.leave();
        c.leave();
        c.leave();
        assert_eq!(c.calls, 4);
        assert_eq!(c.depth, 0);
        assert_eq!(c.max_depth, 3);
        assert_eq!(c.stack_bytes(), 3 * FRAME_BYTES);
    }

    #[test]
    fn reset_clears_everything() {
        let mut c = CostCounters::new();
        c.enter();
        c.reset();
        assert_eq!(c, CostCounters::default());
    }
}

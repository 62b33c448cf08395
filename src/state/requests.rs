//! Request Tracking
//!
//! Primitives for taming overlapping fetches: a per-operation generation
//! counter so only the latest issued request's completion is applied, and
//! an in-flight counter backing the global loading indicator.

use leptos::*;

/// Generation counter for one family of fetches.
///
/// Each call takes a ticket; the completion is applied only while its ticket
/// is still the current generation. Starting a newer call invalidates every
/// older ticket, so a superseded request that resolves late is discarded
/// instead of overwriting fresher state.
#[derive(Clone, Copy)]
pub struct FetchGate {
    generation: RwSignal<u64>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self {
            generation: create_rw_signal(0),
        }
    }

    /// Start a new request and return its ticket
    pub fn begin(&self) -> u64 {
        self.generation.update(|g| *g += 1);
        self.generation.get_untracked()
    }

    /// Whether this ticket still owns the slot
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get_untracked() == ticket
    }
}

impl Default for FetchGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Count of tracked fetches currently in flight.
///
/// The loading indicator derives from this count rather than a single shared
/// boolean, so one fetch finishing cannot mask another still in flight.
#[derive(Clone, Copy)]
pub struct InFlight {
    pending: RwSignal<u32>,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(0),
        }
    }

    pub fn enter(&self) {
        self.pending.update(|n| *n += 1);
    }

    pub fn exit(&self) {
        self.pending.update(|n| *n = n.saturating_sub(1));
    }

    /// Reactive read: true while any tracked fetch is outstanding
    pub fn active(&self) -> bool {
        self.pending.get() > 0
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_current_until_superseded() {
        let runtime = create_runtime();

        let gate = FetchGate::new();
        let first = gate.begin();
        assert!(gate.is_current(first));

        let second = gate.begin();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));

        runtime.dispose();
    }

    #[test]
    fn in_flight_counts_overlapping_requests() {
        let runtime = create_runtime();

        let in_flight = InFlight::new();
        assert!(!in_flight.active());

        in_flight.enter();
        in_flight.enter();
        in_flight.exit();
        // One of two overlapping fetches finished; still loading.
        assert!(in_flight.active());

        in_flight.exit();
        assert!(!in_flight.active());

        runtime.dispose();
    }

    #[test]
    fn exit_saturates_at_zero() {
        let runtime = create_runtime();

        let in_flight = InFlight::new();
        in_flight.exit();
        assert!(!in_flight.active());

        runtime.dispose();
    }
}

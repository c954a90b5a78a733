//! Button debounce guard.
//!
//! A press is accepted only if at least the debounce window has passed since
//! the previous *accepted* press. Rejected edges leave no trace, so a burst
//! of contact bounce cannot stretch the window.

use crate::config::DEBOUNCE_WINDOW_US;
use crate::mode::{Mode, ModeState};

/// Outcome of [`debounce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub accept: bool,
    /// Timestamp of the last accepted edge after this decision.
    pub last_accepted: Option<u64>,
}

/// Decides whether an edge at `now_us` is a genuine press.
///
/// `last_accepted` is `None` until the first press, which is therefore always
/// accepted whatever the absolute value of `now_us`. A timestamp older than
/// `last_accepted` counts as inside the window, so the state never rewinds.
pub fn debounce(now_us: u64, last_accepted: Option<u64>, window_us: u64) -> Decision {
    let accept = match last_accepted {
        None => true,
        Some(last) => now_us.checked_sub(last).is_some_and(|d| d >= window_us),
    };

    Decision {
        accept,
        last_accepted: if accept { Some(now_us) } else { last_accepted },
    }
}

/// Filters raw button edges and toggles the shared [`ModeState`].
///
/// Owned by the button task; it is the only writer of the mode flag. `on_edge`
/// never blocks or allocates, so it is fine to call straight from the edge
/// wake-up.
pub struct DebounceGuard<'a> {
    mode: &'a ModeState,
    last_accepted: Option<u64>,
    window_us: u64,
}

impl<'a> DebounceGuard<'a> {
    pub fn new(mode: &'a ModeState) -> Self {
        Self::with_window(mode, DEBOUNCE_WINDOW_US)
    }

    pub fn with_window(mode: &'a ModeState, window_us: u64) -> Self {
        Self {
            mode,
            last_accepted: None,
            window_us,
        }
    }

    /// Handles one edge seen at `now_us` (monotonic microseconds).
    ///
    /// Returns the new mode if the edge was accepted.
    pub fn on_edge(&mut self, now_us: u64) -> Option<Mode> {
        let decision = debounce(now_us, self.last_accepted, self.window_us);
        self.last_accepted = decision.last_accepted;

        if !decision.accept {
            #[cfg(feature = "defmt")]
            defmt::trace!("edge at {} us ignored", now_us);
            return None;
        }

        Some(self.mode.toggle())
    }

    pub fn last_accepted(&self) -> Option<u64> {
        self.last_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000;

    #[test]
    fn first_edge_is_always_accepted() {
        for t0 in [0, 1, 299 * MS, u64::MAX] {
            let decision = debounce(t0, None, DEBOUNCE_WINDOW_US);
            assert!(decision.accept, "t0 = {t0}");
            assert_eq!(decision.last_accepted, Some(t0));
        }
    }

    #[test]
    fn edge_inside_window_is_rejected() {
        let decision = debounce(1_000 * MS + 299 * MS, Some(1_000 * MS), DEBOUNCE_WINDOW_US);
        assert!(!decision.accept);
        assert_eq!(decision.last_accepted, Some(1_000 * MS));
    }

    #[test]
    fn edge_exactly_at_window_is_accepted() {
        let decision = debounce(1_300 * MS, Some(1_000 * MS), DEBOUNCE_WINDOW_US);
        assert!(decision.accept);
        assert_eq!(decision.last_accepted, Some(1_300 * MS));
    }

    #[test]
    fn older_timestamp_never_rewinds() {
        let decision = debounce(10 * MS, Some(5_000 * MS), DEBOUNCE_WINDOW_US);
        assert!(!decision.accept);
        assert_eq!(decision.last_accepted, Some(5_000 * MS));
    }

    #[test]
    fn bounce_burst_toggles_once() {
        let state = ModeState::new();
        let mut guard = DebounceGuard::new(&state);

        assert_eq!(guard.on_edge(2_000 * MS), Some(Mode::Night));
        // contact bounce over the next 250 ms
        for offset in (5..=250).step_by(5) {
            assert_eq!(guard.on_edge(2_000 * MS + offset * MS), None);
        }

        assert_eq!(state.mode(), Mode::Night);
        assert_eq!(guard.last_accepted(), Some(2_000 * MS));
    }

    #[test]
    fn rejected_edges_do_not_extend_the_window() {
        let state = ModeState::new();
        let mut guard = DebounceGuard::new(&state);

        guard.on_edge(0);
        assert_eq!(guard.on_edge(200 * MS), None);
        // 300 ms after the accepted edge, only 100 ms after the rejected one
        assert_eq!(guard.on_edge(300 * MS), Some(Mode::Normal));
    }

    #[test]
    fn spaced_edges_alternate_from_normal() {
        let state = ModeState::new();
        let mut guard = DebounceGuard::new(&state);
        let spacings = [300, 450, 1_000, 301, 5_000, 300, 777];

        let mut now = 42 * MS;
        let mut expected = Mode::Normal;
        for spacing in spacings {
            expected = expected.toggled();
            assert_eq!(guard.on_edge(now), Some(expected));
            assert_eq!(state.mode(), expected);
            assert_eq!(guard.last_accepted(), Some(now));
            now += spacing * MS;
        }
    }

    #[test]
    fn mixed_sequence_only_counts_spaced_edges() {
        let state = ModeState::new();
        let mut guard = DebounceGuard::new(&state);
        // (timestamp in ms, accepted?)
        let edges = [
            (100, true),
            (150, false),
            (399, false),
            (400, true),
            (650, false),
            (1_200, true),
            (1_499, false),
        ];

        let mut accepted = 0;
        for (at, expect_accept) in edges {
            let before = guard.last_accepted();
            let result = guard.on_edge(at * MS);
            assert_eq!(result.is_some(), expect_accept, "edge at {at} ms");
            if result.is_some() {
                accepted += 1;
            } else {
                assert_eq!(guard.last_accepted(), before);
            }
        }

        assert_eq!(accepted, 3);
        assert_eq!(state.mode(), Mode::Night);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Gaps between consecutive edges in microseconds, biased around the
    /// window so both sides of the boundary come up often.
    fn arb_gaps() -> impl Strategy<Value = Vec<u64>> {
        proptest::collection::vec(
            prop_oneof![
                0u64..DEBOUNCE_WINDOW_US,
                DEBOUNCE_WINDOW_US - 2..DEBOUNCE_WINDOW_US + 2,
                DEBOUNCE_WINDOW_US..10 * DEBOUNCE_WINDOW_US,
            ],
            1..200,
        )
    }

    proptest! {
        #[test]
        fn any_edge_sequence_matches_reference_model(
            start in 0u64..1_000_000_000,
            gaps in arb_gaps(),
        ) {
            let state = ModeState::new();
            let mut guard = DebounceGuard::new(&state);

            let mut model_last: Option<u64> = None;
            let mut accepted = 0usize;
            let mut now = start;

            for gap in gaps {
                now += gap;
                let expect_accept =
                    model_last.map_or(true, |last| now - last >= DEBOUNCE_WINDOW_US);

                let before = guard.last_accepted();
                let result = guard.on_edge(now);

                prop_assert_eq!(result.is_some(), expect_accept);
                if expect_accept {
                    accepted += 1;
                    model_last = Some(now);
                    prop_assert_eq!(guard.last_accepted(), Some(now));
                } else {
                    prop_assert_eq!(guard.last_accepted(), before);
                }

                // Alternates from Normal: odd accepted count means Night
                let expected_mode = if accepted % 2 == 1 { Mode::Night } else { Mode::Normal };
                prop_assert_eq!(state.mode(), expected_mode);
                if let Some(mode) = result {
                    prop_assert_eq!(mode, expected_mode);
                }
            }
        }

        #[test]
        fn first_edge_accepted_for_any_timestamp(t0 in any::<u64>()) {
            let state = ModeState::new();
            let mut guard = DebounceGuard::new(&state);

            prop_assert_eq!(guard.on_edge(t0), Some(Mode::Night));
            prop_assert_eq!(guard.last_accepted(), Some(t0));
        }

        #[test]
        fn earlier_timestamp_never_rewinds(
            last in 1u64..u64::MAX,
            back in 1u64..u64::MAX,
        ) {
            let now = last.saturating_sub(back);
            let decision = debounce(now, Some(last), DEBOUNCE_WINDOW_US);

            prop_assert!(!decision.accept);
            prop_assert_eq!(decision.last_accepted, Some(last));
        }
    }
}

// ABOUTME: Armed/Fired de-duplication state machine for a single alert kind.
// ABOUTME: Pure transitions over poll results, with no I/O, so they can be driven by literal bool sequences.

use crate::alert::types::AlertKind;

/// De-duplication state of one alert kind.
///
/// ```text
///            poll(true) / notify
///   Armed ──────────────────────► Fired
///     ▲                            │  poll(true): suppressed
///     └────────────────────────────┘
///        poll(false) or session stop
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArmState {
    /// Ready to notify on the next true reading.
    #[default]
    Armed,
    /// Already notified for the ongoing true episode.
    Fired,
}

/// What a poll result did to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmTransition {
    /// Rising edge: the caller must notify the user and then acknowledge.
    Fire,
    /// Condition still true and already notified.
    Suppressed,
    /// Condition reported false; the kind is armed again.
    Rearmed,
}

/// Per-kind arming flag plus a running count of notifications fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertArm {
    state: ArmState,
    fired_count: u64,
}

impl AlertArm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ArmState {
        self.state
    }

    /// Whether a notification has been delivered for the current episode.
    pub fn shown(&self) -> bool {
        self.state == ArmState::Fired
    }

    pub fn fired_count(&self) -> u64 {
        self.fired_count
    }

    /// Apply one poll result.
    ///
    /// | state | alert_active | result |
    /// |-------|--------------|--------|
    /// | Armed | true | `Fire`, state becomes Fired |
    /// | Fired | true | `Suppressed` |
    /// | any | false | `Rearmed`, state becomes Armed |
    pub fn on_poll_result(&mut self, alert_active: bool) -> ArmTransition {
        match (self.state, alert_active) {
            (ArmState::Armed, true) => {
                self.state = ArmState::Fired;
                self.fired_count += 1;
                ArmTransition::Fire
            }
            (ArmState::Fired, true) => ArmTransition::Suppressed,
            (_, false) => {
                self.state = ArmState::Armed;
                ArmTransition::Rearmed
            }
        }
    }

    /// Force the kind back to Armed regardless of the remote condition.
    pub fn reset(&mut self) {
        self.state = ArmState::Armed;
    }
}

/// The two independent per-kind arming states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertArming {
    pub strain: AlertArm,
    pub fatigue: AlertArm,
}

impl AlertArming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: AlertKind) -> &AlertArm {
        match kind {
            AlertKind::Strain => &self.strain,
            AlertKind::Fatigue => &self.fatigue,
        }
    }

    pub fn get_mut(&mut self, kind: AlertKind) -> &mut AlertArm {
        match kind {
            AlertKind::Strain => &mut self.strain,
            AlertKind::Fatigue => &mut self.fatigue,
        }
    }

    pub fn on_poll_result(&mut self, kind: AlertKind, alert_active: bool) -> ArmTransition {
        self.get_mut(kind).on_poll_result(alert_active)
    }

    /// Reset barrier applied when a session stops.
    pub fn reset_all(&mut self) {
        self.strain.reset();
        self.fatigue.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a sequence of poll results and return the 1-based positions that fired.
    fn fire_positions(readings: &[bool]) -> Vec<usize> {
        let mut arm = AlertArm::new();
        readings
            .iter()
            .enumerate()
            .filter(|(_, r)| arm.on_poll_result(**r) == ArmTransition::Fire)
            .map(|(i, _)| i + 1)
            .collect()
    }

    #[test]
    fn initial_state_is_armed() {
        let arm = AlertArm::new();
        assert_eq!(arm.state(), ArmState::Armed);
        assert!(!arm.shown());
        assert_eq!(arm.fired_count(), 0);
    }

    #[test]
    fn fires_on_rising_edges_only() {
        assert_eq!(fire_positions(&[false, true, true, false, true]), vec![2, 5]);
    }

    #[test]
    fn first_true_reading_fires() {
        assert_eq!(fire_positions(&[true, true, true]), vec![1]);
    }

    #[test]
    fn sustained_false_never_fires() {
        assert!(fire_positions(&[false, false, false]).is_empty());
    }

    #[test]
    fn flapping_signal_fires_on_every_rise() {
        assert_eq!(fire_positions(&[true, false, true, false, true]), vec![1, 3, 5]);
    }

    #[test]
    fn sustained_true_is_suppressed() {
        let mut arm = AlertArm::new();
        assert_eq!(arm.on_poll_result(true), ArmTransition::Fire);
        assert_eq!(arm.on_poll_result(true), ArmTransition::Suppressed);
        assert_eq!(arm.on_poll_result(true), ArmTransition::Suppressed);
        assert!(arm.shown());
        assert_eq!(arm.fired_count(), 1);
    }

    #[test]
    fn false_rearms_from_either_state() {
        let mut arm = AlertArm::new();
        assert_eq!(arm.on_poll_result(false), ArmTransition::Rearmed);
        arm.on_poll_result(true);
        assert_eq!(arm.on_poll_result(false), ArmTransition::Rearmed);
        assert_eq!(arm.state(), ArmState::Armed);
    }

    #[test]
    fn reset_rearms_without_a_false_reading() {
        let mut arm = AlertArm::new();
        arm.on_poll_result(true);
        arm.reset();
        assert_eq!(arm.on_poll_result(true), ArmTransition::Fire);
        assert_eq!(arm.fired_count(), 2);
    }

    #[test]
    fn kinds_are_independent() {
        let mut arming = AlertArming::new();
        assert_eq!(arming.on_poll_result(AlertKind::Strain, true), ArmTransition::Fire);
        assert_eq!(arming.on_poll_result(AlertKind::Fatigue, false), ArmTransition::Rearmed);
        assert!(arming.strain.shown());
        assert!(!arming.fatigue.shown());

        assert_eq!(arming.on_poll_result(AlertKind::Fatigue, true), ArmTransition::Fire);
        assert_eq!(arming.on_poll_result(AlertKind::Strain, true), ArmTransition::Suppressed);
    }

    #[test]
    fn reset_all_rearms_both_kinds() {
        let mut arming = AlertArming::new();
        arming.on_poll_result(AlertKind::Strain, true);
        arming.on_poll_result(AlertKind::Fatigue, true);
        arming.reset_all();
        assert_eq!(arming.get(AlertKind::Strain).state(), ArmState::Armed);
        assert_eq!(arming.get(AlertKind::Fatigue).state(), ArmState::Armed);
    }
}

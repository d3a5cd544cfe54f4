//! Scheduled gain automation with exponential approach segments.

/// Exponential approach towards `target` beginning at `start_s`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetEvent {
    pub target: f32,
    pub start_s: f64,
    pub time_constant_s: f64,
}

impl TargetEvent {
    /// Value at `at_s` given the value `from` held when the event started
    fn approach(&self, from: f32, at_s: f64) -> f32 {
        if self.time_constant_s <= 0.0 {
            return self.target;
        }
        let elapsed = (at_s - self.start_s).max(0.0);
        let decay = (-elapsed / self.time_constant_s).exp() as f32;
        self.target + (from - self.target) * decay
    }
}

/// Gain parameter driven by a timeline of target events
#[derive(Debug, Clone)]
pub struct GainParam {
    /// Value held before the first pending event
    base: f32,
    /// Pending events, sorted by start time
    events: Vec<TargetEvent>,
}

impl GainParam {
    pub fn new(initial: f32) -> Self {
        Self {
            base: initial,
            events: Vec::new(),
        }
    }

    /// Scheduled events, oldest first
    pub fn events(&self) -> &[TargetEvent] {
        &self.events
    }

    /// Gain value at time `t_s` (seconds on the audio clock)
    pub fn value_at(&self, t_s: f64) -> f32 {
        let mut from = self.base;
        let mut active: Option<&TargetEvent> = None;

        for event in self.events.iter().take_while(|e| e.start_s <= t_s) {
            if let Some(previous) = active {
                from = previous.approach(from, event.start_s);
            }
            active = Some(event);
        }

        active.map_or(self.base, |event| event.approach(from, t_s))
    }

    /// Drop every scheduled change, holding the value reached at `t_s`
    pub fn cancel_scheduled_values(&mut self, t_s: f64) {
        self.base = self.value_at(t_s);
        self.events.clear();
    }

    /// Start approaching `target` at `start_s` with time constant `tau_s`
    pub fn set_target_at_time(&mut self, target: f32, start_s: f64, tau_s: f64) {
        let event = TargetEvent {
            target,
            start_s,
            time_constant_s: tau_s,
        };
        let index = self.events.partition_point(|e| e.start_s <= start_s);
        self.events.insert(index, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_initial_value_without_events() {
        let gain = GainParam::new(0.0);
        assert_eq!(gain.value_at(0.0), 0.0);
        assert_eq!(gain.value_at(100.0), 0.0);
    }

    #[test]
    fn test_exponential_approach() {
        let mut gain = GainParam::new(0.0);
        gain.set_target_at_time(0.1, 2.0, 1.0);

        // Nothing happens before the event starts
        assert_eq!(gain.value_at(1.0), 0.0);

        // One time constant covers ~63% of the distance
        let one_tau = gain.value_at(3.0);
        assert!((one_tau - 0.1 * (1.0 - (-1.0f32).exp())).abs() < 1e-6);

        // Converges to the target
        assert!((gain.value_at(20.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_cancel_holds_current_value() {
        let mut gain = GainParam::new(0.0);
        gain.set_target_at_time(0.1, 0.0, 1.0);
        let at_half = gain.value_at(0.5);

        gain.cancel_scheduled_values(0.5);

        assert!(gain.events().is_empty());
        assert!((gain.value_at(0.5) - at_half).abs() < 1e-7);
        assert!((gain.value_at(10.0) - at_half).abs() < 1e-7);
    }

    #[test]
    fn test_chained_events_continue_from_reached_value() {
        let mut gain = GainParam::new(0.0);
        gain.set_target_at_time(0.1, 0.0, 1.0);
        gain.set_target_at_time(0.0, 1.0, 0.5);

        let reached = 0.1 * (1.0 - (-1.0f32).exp());
        assert!((gain.value_at(1.0) - reached).abs() < 1e-6);
        assert!((gain.value_at(1.5) - reached * (-1.0f32).exp()).abs() < 1e-6);
    }

    #[test]
    fn test_events_kept_sorted() {
        let mut gain = GainParam::new(0.0);
        gain.set_target_at_time(0.3, 5.0, 1.0);
        gain.set_target_at_time(0.1, 1.0, 1.0);

        let starts: Vec<f64> = gain.events().iter().map(|e| e.start_s).collect();
        assert_eq!(starts, vec![1.0, 5.0]);
    }
}

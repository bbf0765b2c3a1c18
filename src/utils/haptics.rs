//! Haptic feedback dispatch
//!
//! Every call site treats haptic feedback as fire-and-forget enhancement:
//! triggering must never block, fail, or alter application state, because
//! many hosts lack the capability entirely. The engine therefore swallows
//! device errors (logging them) and degrades to a silent no-op when no
//! device is present.

use std::sync::Arc;

use tracing::warn;

/// Symbolic intensity for a haptic cue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HapticIntensity {
    #[default]
    Light,
    Medium,
    Heavy,
    Success,
    Warning,
    Error,
}

impl HapticIntensity {
    /// Fixed vibration pattern for this intensity: alternating vibrate and
    /// pause durations in milliseconds.
    pub fn pattern(self) -> &'static [u64] {
        match self {
            HapticIntensity::Light => &[10],
            HapticIntensity::Medium => &[20],
            HapticIntensity::Heavy => &[30],
            HapticIntensity::Success => &[10, 50, 10],
            HapticIntensity::Warning => &[15, 100, 15],
            HapticIntensity::Error => &[30, 100, 30, 100, 30],
        }
    }
}

/// Host vibration transport. Implementations request that the device play
/// the given pattern; a zero-duration pattern means "stop now".
pub trait VibrationDevice: Send + Sync {
    fn vibrate(&self, pattern: &[u64]) -> Result<(), String>;
}

/// Dispatcher over an optional [`VibrationDevice`].
#[derive(Clone)]
pub struct HapticEngine {
    device: Option<Arc<dyn VibrationDevice>>,
}

impl HapticEngine {
    /// Probe the host for a vibration transport. Desktop terminals expose
    /// none, so interactive sessions run with an unavailable engine and
    /// every trigger is a silent no-op.
    pub fn detect() -> Self {
        Self::unavailable()
    }

    pub fn unavailable() -> Self {
        Self { device: None }
    }

    pub fn with_device(device: Arc<dyn VibrationDevice>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Request the pattern for `intensity`. Unsupported hosts are a silent
    /// no-op; a device failure is logged and swallowed, never surfaced.
    pub fn trigger(&self, intensity: HapticIntensity) {
        let Some(device) = &self.device else {
            return;
        };
        if let Err(e) = device.vibrate(intensity.pattern()) {
            warn!(error = %e, ?intensity, "haptic feedback failed");
        }
    }

    /// Request an immediate stop of any ongoing pattern.
    pub fn cancel(&self) {
        let Some(device) = &self.device else {
            return;
        };
        if let Err(e) = device.vibrate(&[0]) {
            warn!(error = %e, "haptic cancel failed");
        }
    }

    /// Capability probe, no side effect.
    pub fn is_supported(&self) -> bool {
        self.device.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{FailingVibration, RecordingVibration};

    #[test]
    fn every_intensity_maps_to_its_documented_pattern() {
        assert_eq!(HapticIntensity::Light.pattern(), &[10]);
        assert_eq!(HapticIntensity::Medium.pattern(), &[20]);
        assert_eq!(HapticIntensity::Heavy.pattern(), &[30]);
        assert_eq!(HapticIntensity::Success.pattern(), &[10, 50, 10]);
        assert_eq!(HapticIntensity::Warning.pattern(), &[15, 100, 15]);
        assert_eq!(
            HapticIntensity::Error.pattern(),
            &[30, 100, 30, 100, 30]
        );
    }

    #[test]
    fn default_intensity_is_light() {
        assert_eq!(HapticIntensity::default(), HapticIntensity::Light);
    }

    #[test]
    fn trigger_forwards_pattern_to_the_device() {
        let device = Arc::new(RecordingVibration::default());
        let engine = HapticEngine::with_device(device.clone());
        engine.trigger(HapticIntensity::Success);
        assert_eq!(device.requests(), vec![vec![10, 50, 10]]);
        assert!(engine.is_supported());
    }

    #[test]
    fn cancel_requests_a_zero_duration_pattern() {
        let device = Arc::new(RecordingVibration::default());
        let engine = HapticEngine::with_device(device.clone());
        engine.cancel();
        assert_eq!(device.requests(), vec![vec![0]]);
    }

    #[test]
    fn unavailable_engine_is_a_silent_no_op() {
        let engine = HapticEngine::unavailable();
        engine.trigger(HapticIntensity::Error);
        engine.cancel();
        assert!(!engine.is_supported());
    }

    #[test]
    fn device_failures_are_swallowed() {
        let engine = HapticEngine::with_device(Arc::new(FailingVibration));
        engine.trigger(HapticIntensity::Heavy);
        engine.cancel();
    }

    #[test]
    fn detected_engine_reports_unsupported_on_desktop() {
        assert!(!HapticEngine::detect().is_supported());
    }
}

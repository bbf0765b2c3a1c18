#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::app::{App, SessionContext};
#[cfg(test)]
use crate::utils::clipboard::Clipboard;
#[cfg(test)]
use crate::utils::haptics::{HapticEngine, VibrationDevice};

/// Vibration double that records every requested pattern.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingVibration {
    requests: Mutex<Vec<Vec<u64>>>,
}

#[cfg(test)]
impl RecordingVibration {
    pub fn requests(&self) -> Vec<Vec<u64>> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl VibrationDevice for RecordingVibration {
    fn vibrate(&self, pattern: &[u64]) -> Result<(), String> {
        self.requests.lock().unwrap().push(pattern.to_vec());
        Ok(())
    }
}

/// Vibration double whose host always rejects the request.
#[cfg(test)]
pub struct FailingVibration;

#[cfg(test)]
impl VibrationDevice for FailingVibration {
    fn vibrate(&self, _pattern: &[u64]) -> Result<(), String> {
        Err("vibration rejected by host".to_string())
    }
}

/// Clipboard double that records every successful write.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard double whose write always rejects.
#[cfg(test)]
pub struct FailingClipboard;

#[cfg(test)]
#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), String> {
        Err("clipboard rejected by host".to_string())
    }
}

#[cfg(test)]
pub fn create_test_session(model: &str) -> SessionContext {
    SessionContext::new(
        model,
        false,
        HapticEngine::unavailable(),
        Arc::new(RecordingClipboard::default()),
    )
}

#[cfg(test)]
pub fn create_test_app() -> App {
    App::new(
        "gpt-4",
        false,
        HapticEngine::unavailable(),
        Arc::new(RecordingClipboard::default()),
    )
}

#[cfg(test)]
pub fn create_test_app_with(
    haptics: HapticEngine,
    clipboard: Arc<dyn Clipboard>,
) -> App {
    App::new("gpt-4", false, haptics, clipboard)
}

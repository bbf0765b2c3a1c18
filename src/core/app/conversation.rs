use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::core::app::composer::OutgoingDraft;
use crate::core::app::session::SessionContext;
use crate::core::app::ui_state::{ShellEvent, UiState};
use crate::core::constants::COPY_INDICATOR_TTL;
use crate::core::message::Message;
use crate::utils::haptics::HapticIntensity;

/// Conversation-facing operations on the session and transcript.
pub struct ConversationController<'a> {
    session: &'a mut SessionContext,
    ui: &'a mut UiState,
}

impl<'a> ConversationController<'a> {
    pub fn new(session: &'a mut SessionContext, ui: &'a mut UiState) -> Self {
        Self { session, ui }
    }

    /// Submit the composer draft. Blank drafts are silently ignored. An
    /// accepted draft fires the send boundary (currently a structured log
    /// event), appends the user message to the transcript, and clears the
    /// composer.
    pub fn submit_draft(&mut self) -> Option<OutgoingDraft> {
        let draft = self.ui.composer.take_submission()?;
        let model = self.session.current_model();

        self.session.haptics.trigger(HapticIntensity::Medium);
        dispatch_send(&draft, &model.id);

        let id = self.ui.next_id();
        self.ui.push_message(Message::user(id, draft.text.clone()));
        self.ui.auto_scroll = true;
        Some(draft)
    }

    /// Copy a message's content to the system clipboard. Success sets the
    /// copied indicator and schedules its revert; failure fires the
    /// error-class haptic exactly once and leaves the indicator unset.
    pub async fn copy_message_to_clipboard(
        &mut self,
        message_id: &str,
        tx: UnboundedSender<ShellEvent>,
    ) {
        let Some(content) = self
            .ui
            .messages
            .iter()
            .find(|m| m.id == message_id)
            .map(|m| m.content.clone())
        else {
            return;
        };

        let clipboard = self.session.clipboard.clone();
        match clipboard.write_text(&content).await {
            Ok(()) => {
                self.session.haptics.trigger(HapticIntensity::Success);
                let token = self.ui.mark_copied(message_id);
                schedule_copy_reset(message_id.to_string(), token, tx);
                self.ui.set_status("Copied message");
            }
            Err(e) => {
                warn!(error = %e, message_id, "clipboard write failed");
                self.session.haptics.trigger(HapticIntensity::Error);
                self.ui.set_status("Clipboard error");
            }
        }
    }
}

/// Send boundary stub. A real backend integration would hand
/// `{text, attachments, model_id}` to a model-invocation service here and
/// feed assistant messages back into the transcript.
fn dispatch_send(draft: &OutgoingDraft, model_id: &str) {
    let payload = serde_json::json!({
        "text": draft.text,
        "attachments": draft.attachments,
        "aspect_ratio": draft.aspect_ratio,
        "model_id": model_id,
    });
    info!(target: "omnidev::send", %payload, "dispatching message");
}

/// Revert the copied indicator after its fixed lifetime, unless a newer
/// copy of the same message cancelled this task first.
pub fn schedule_copy_reset(
    message_id: String,
    token: CancellationToken,
    tx: UnboundedSender<ShellEvent>,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(COPY_INDICATOR_TTL) => {
                let _ = tx.send(ShellEvent::CopyExpired { message_id });
            }
            _ = token.cancelled() => {}
        }
    });
}

//! Composer draft state
//!
//! The composer owns the multi-line input, the pending attachment list,
//! and the selected aspect ratio. Submission is all-or-nothing: a draft
//! with no visible text and no attachments is silently ignored, and an
//! accepted draft clears both the text and the attachments.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tui_textarea::{CursorMove, TextArea};

/// Output aspect ratio hint attached to a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum AspectRatio {
    #[default]
    Square,
    Widescreen,
    Vertical,
    Standard,
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Widescreen,
        AspectRatio::Vertical,
        AspectRatio::Standard,
        AspectRatio::Portrait,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    pub fn next(self) -> AspectRatio {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> AspectRatio {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.as_str().to_string()
    }
}

/// A file staged for the next submission. Only the display name and the
/// path handle are kept; nothing is read until a real backend consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub name: String,
    pub path: PathBuf,
}

impl Attachment {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// Advisory accepted-type check mirroring the file picker filter: images,
/// video, audio, PDF, and common document/text formats. Not enforced;
/// callers only use it to warn.
pub fn is_supported_attachment(name: &str) -> bool {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    matches!(
        ext.as_deref(),
        Some(
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "mp4" | "mov" | "webm" | "mkv"
                | "mp3" | "wav" | "ogg" | "flac" | "pdf" | "doc" | "docx" | "txt" | "md"
        )
    )
}

/// An accepted submission, handed to the send boundary.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingDraft {
    pub text: String,
    pub attachments: Vec<Attachment>,
    pub aspect_ratio: AspectRatio,
}

pub struct ComposerState {
    textarea: TextArea<'static>,
    pub attachments: Vec<Attachment>,
    pub aspect_ratio: AspectRatio,
    pub show_aspect_selector: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposerState {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            attachments: Vec::new(),
            aspect_ratio: AspectRatio::default(),
            show_aspect_selector: false,
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn set_input_text(&mut self, text: &str) {
        let mut textarea = TextArea::from(text.lines().map(|l| l.to_string()));
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }

    pub fn insert_str(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    /// Shift+Enter path: add a line break without submitting.
    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        if index < self.attachments.len() {
            Some(self.attachments.remove(index))
        } else {
            None
        }
    }

    pub fn remove_last_attachment(&mut self) -> Option<Attachment> {
        self.attachments.pop()
    }

    pub fn select_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.aspect_ratio = ratio;
        self.show_aspect_selector = false;
    }

    pub fn has_content(&self) -> bool {
        !self.input_text().trim().is_empty() || !self.attachments.is_empty()
    }

    /// Take the draft for submission. Returns `None` (leaving all state
    /// untouched) when the trimmed text is empty and no attachments are
    /// pending; otherwise clears the message and attachments.
    pub fn take_submission(&mut self) -> Option<OutgoingDraft> {
        let text = self.input_text();
        if text.trim().is_empty() && self.attachments.is_empty() {
            return None;
        }
        self.textarea = TextArea::default();
        Some(OutgoingDraft {
            text,
            attachments: std::mem::take(&mut self.attachments),
            aspect_ratio: self.aspect_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_not_submittable() {
        let mut composer = ComposerState::new();
        assert!(composer.take_submission().is_none());
    }

    #[test]
    fn whitespace_only_draft_is_not_submittable() {
        let mut composer = ComposerState::new();
        composer.set_input_text("  ");
        assert!(composer.take_submission().is_none());
        // The inert submission must not clear the draft either.
        assert_eq!(composer.input_text(), "  ");
    }

    #[test]
    fn accepted_submission_clears_text_and_attachments() {
        let mut composer = ComposerState::new();
        composer.set_input_text("hello");
        composer.add_attachment(Attachment::from_path("/tmp/a.png"));
        composer.add_attachment(Attachment::from_path("/tmp/b.pdf"));

        let draft = composer.take_submission().expect("draft");
        assert_eq!(draft.text, "hello");
        assert_eq!(draft.attachments.len(), 2);
        assert_eq!(composer.input_text(), "");
        assert!(composer.attachments.is_empty());
    }

    #[test]
    fn attachments_alone_are_submittable() {
        let mut composer = ComposerState::new();
        composer.add_attachment(Attachment::from_path("/tmp/clip.mp4"));
        let draft = composer.take_submission().expect("draft");
        assert_eq!(draft.text, "");
        assert_eq!(draft.attachments[0].name, "clip.mp4");
    }

    #[test]
    fn newline_insertion_does_not_submit() {
        let mut composer = ComposerState::new();
        composer.set_input_text("hello");
        composer.insert_newline();
        composer.insert_str("world");
        assert_eq!(composer.input_text(), "hello\nworld");
        assert!(composer.has_content());
    }

    #[test]
    fn attachments_are_removed_individually_in_order() {
        let mut composer = ComposerState::new();
        composer.add_attachment(Attachment::from_path("/tmp/a.png"));
        composer.add_attachment(Attachment::from_path("/tmp/b.png"));
        composer.add_attachment(Attachment::from_path("/tmp/c.png"));

        let removed = composer.remove_attachment(1).expect("middle entry");
        assert_eq!(removed.name, "b.png");
        let names: Vec<&str> = composer.attachments.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
        assert!(composer.remove_attachment(5).is_none());
    }

    #[test]
    fn aspect_ratio_defaults_to_square_and_cycles() {
        let mut composer = ComposerState::new();
        assert_eq!(composer.aspect_ratio, AspectRatio::Square);
        assert_eq!(composer.aspect_ratio.as_str(), "1:1");

        composer.show_aspect_selector = true;
        composer.select_aspect_ratio(AspectRatio::Vertical);
        assert_eq!(composer.aspect_ratio.as_str(), "9:16");
        assert!(!composer.show_aspect_selector);

        // Full cycle returns to the start.
        let mut ratio = AspectRatio::Square;
        for _ in 0..AspectRatio::ALL.len() {
            ratio = ratio.next();
        }
        assert_eq!(ratio, AspectRatio::Square);
        assert_eq!(AspectRatio::Square.prev(), AspectRatio::Portrait);
    }

    #[test]
    fn advisory_type_filter_classifies_common_formats() {
        assert!(is_supported_attachment("photo.PNG"));
        assert!(is_supported_attachment("notes.pdf"));
        assert!(is_supported_attachment("take.mov"));
        assert!(!is_supported_attachment("binary.exe"));
        assert!(!is_supported_attachment("no_extension"));
    }
}

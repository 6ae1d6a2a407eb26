//! Form submission handling.
//!
//! The page is reached only through [`FormSource`] (reading input values) and
//! [`ResultView`] (writing the outcome). [`FormHandler`] ties a submission to a
//! single call on an [`ImageGenerator`](crate::service::ImageGenerator).

pub mod handler;
pub mod memory;
pub mod terminal;

pub use handler::{FormHandler, Outcome, SubmissionState};
pub use memory::{MemoryForm, RecordingView};
pub use terminal::TerminalView;

pub const TITLE_FIELD: &str = "title";
pub const SUBTITLE_FIELD: &str = "subtitle";
pub const CATEGORY_FIELD: &str = "category";
pub const BACKGROUND_URL_FIELD: &str = "background_url";
pub const KEYWORDS_FIELD: &str = "keywords";

pub const IMAGE_ELEMENT: &str = "generatedImage";
pub const CONTAINER_ELEMENT: &str = "generatedImageContainer";

/// Read access to the form's input elements.
pub trait FormSource {
    /// Current value of the element with this id, or `None` if the page has
    /// no such element.
    fn value(&self, id: &str) -> Option<String>;
}

/// Write access to the elements that display the result.
pub trait ResultView {
    fn set_image_source(&mut self, id: &str, src: &str);
    fn set_display(&mut self, id: &str, display: &str);
    /// Blocking, user-facing message.
    fn alert(&mut self, message: &str);
}

/// A submit event whose default navigation can be suppressed.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

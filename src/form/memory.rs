use super::{FormSource, ResultView, CONTAINER_ELEMENT, IMAGE_ELEMENT};
use std::collections::HashMap;

/// Form backed by a plain map of element id to value.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: HashMap<String, String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(id.into(), value.into());
        self
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }
}

impl FormSource for MemoryForm {
    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }
}

/// View that remembers every write, for inspection after a submission.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    image_sources: HashMap<String, String>,
    displays: HashMap<String, String>,
    alerts: Vec<String>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image_source(&self) -> Option<&str> {
        self.image_sources.get(IMAGE_ELEMENT).map(String::as_str)
    }

    pub fn container_visible(&self) -> bool {
        self.displays
            .get(CONTAINER_ELEMENT)
            .map_or(false, |d| d != "none")
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl ResultView for RecordingView {
    fn set_image_source(&mut self, id: &str, src: &str) {
        self.image_sources.insert(id.to_string(), src.to_string());
    }

    fn set_display(&mut self, id: &str, display: &str) {
        self.displays.insert(id.to_string(), display.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_hidden_until_displayed() {
        let mut view = RecordingView::new();
        assert!(!view.container_visible());
        view.set_display(CONTAINER_ELEMENT, "none");
        assert!(!view.container_visible());
        view.set_display(CONTAINER_ELEMENT, "block");
        assert!(view.container_visible());
    }

    #[test]
    fn form_reports_absent_fields() {
        let mut form = MemoryForm::new().with_value("title", "A");
        form.set("title", "B");
        assert_eq!(form.value("title").as_deref(), Some("B"));
        assert_eq!(form.value("keywords"), None);
    }
}

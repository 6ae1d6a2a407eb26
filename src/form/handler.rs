use super::{
    FormSource, ResultView, SubmitEvent, BACKGROUND_URL_FIELD, CATEGORY_FIELD, CONTAINER_ELEMENT,
    IMAGE_ELEMENT, KEYWORDS_FIELD, SUBTITLE_FIELD, TITLE_FIELD,
};
use crate::{
    error::{FormError, Result},
    models::ImageRequest,
    service::ImageGenerator,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
}

#[derive(Debug)]
pub enum Outcome {
    Displayed(String),
    Failed(FormError),
}

impl Outcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, Outcome::Displayed(_))
    }

    pub fn error(&self) -> Option<&FormError> {
        match self {
            Outcome::Failed(e) => Some(e),
            Outcome::Displayed(_) => None,
        }
    }
}

pub struct FormHandler<G> {
    generator: G,
    in_flight: AtomicUsize,
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<G: ImageGenerator> FormHandler<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::SeqCst) == 0 {
            SubmissionState::Idle
        } else {
            SubmissionState::InFlight
        }
    }

    /// Handles one submit: suppresses default navigation, sends the fields,
    /// and either shows the image or alerts. Failures end here; nothing is
    /// retried.
    pub async fn handle_submit<F, V>(
        &self,
        event: &mut SubmitEvent,
        form: &F,
        view: &mut V,
    ) -> Outcome
    where
        F: FormSource + ?Sized,
        V: ResultView + ?Sized,
    {
        event.prevent_default();

        let submission = Uuid::new_v4();
        log::debug!("[submission:{}] form submitted", submission);

        match self.submit(form).await {
            Ok(image_url) => {
                view.set_image_source(IMAGE_ELEMENT, &image_url);
                view.set_display(CONTAINER_ELEMENT, "block");
                log::info!("[submission:{}] displaying {}", submission, image_url);
                Outcome::Displayed(image_url)
            }
            Err(error) => {
                log::error!(
                    "[submission:{}] There has been a problem with your fetch operation: {}",
                    submission,
                    error
                );
                if let Some(detail) = error.server_message() {
                    log::error!("[submission:{}] server said: {}", submission, detail);
                }
                view.alert(&format!("Error: {}", error.message()));
                Outcome::Failed(error)
            }
        }
    }

    async fn submit<F>(&self, form: &F) -> Result<String>
    where
        F: FormSource + ?Sized,
    {
        let request = read_request(form)?;

        let _guard = InFlightGuard::enter(&self.in_flight);
        let response = self.generator.generate(&request).await?;
        log::debug!("{:?}", response);

        Ok(response.image_url)
    }
}

fn read_request<F: FormSource + ?Sized>(form: &F) -> Result<ImageRequest> {
    let field = |id: &str| form.value(id).ok_or_else(|| FormError::MissingField(id.into()));

    Ok(ImageRequest::from_fields(
        field(TITLE_FIELD)?,
        field(SUBTITLE_FIELD)?,
        field(CATEGORY_FIELD)?,
        field(BACKGROUND_URL_FIELD)?,
        &field(KEYWORDS_FIELD)?,
    ))
}

//! Receipt submission form: the search fields plus up to
//! [`MAX_IMAGES`](crate::MAX_IMAGES) attached images.

use chrono::NaiveDate;

use super::{Diagnostic, Effect, FormPhase, ReceiptFields};
use crate::services::PreviewStore;
use crate::{
    FormAction, Image, Notification, ReceiptSubmission, SelectedFile, ValidationError, MAX_IMAGES,
};

/// State of the submission form.
///
/// Owns one preview handle per attached image and releases them on
/// removal and on drop.
pub struct SubmissionForm<P: PreviewStore> {
    fields: ReceiptFields,
    images: Vec<Image<P::Source>>,
    next_image_id: u64,
    phase: FormPhase,
    previews: P,
}

impl<P: PreviewStore> SubmissionForm<P> {
    pub fn new(previews: P) -> Self {
        Self {
            fields: ReceiptFields::default(),
            images: Vec::new(),
            next_image_id: 0,
            phase: FormPhase::Empty,
            previews,
        }
    }

    pub fn receipt_id(&self) -> &str {
        &self.fields.receipt_id
    }

    pub fn transaction_date(&self) -> Option<NaiveDate> {
        self.fields.transaction_date
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Attached images, in selection order.
    pub fn images(&self) -> &[Image<P::Source>] {
        &self.images
    }

    /// Preview handles currently held.
    pub fn live_previews(&self) -> usize {
        self.images.iter().filter(|image| image.preview.is_some()).count()
    }

    pub fn set_receipt_id(&mut self, receipt_id: impl Into<String>) {
        self.fields.receipt_id = receipt_id.into();
        self.phase = FormPhase::Editing;
    }

    pub fn set_transaction_date(&mut self, date: Option<NaiveDate>) {
        self.fields.transaction_date = date;
        self.phase = FormPhase::Editing;
    }

    /// Admit a batch of picked files.
    ///
    /// Non-image files are dropped with one notification. The remaining
    /// images are admitted all together or not at all: a batch that would
    /// push the form past the cap is refused entirely.
    pub fn add_images(&mut self, batch: Vec<SelectedFile<P::Source>>) -> Vec<Effect> {
        let mut effects = Vec::new();
        let (valid, rejected): (Vec<_>, Vec<_>) =
            batch.into_iter().partition(|file| file.is_image());

        if !rejected.is_empty() {
            let error = ValidationError::InvalidFileType {
                rejected: rejected.into_iter().map(|file| file.name).collect(),
            };
            effects.push(Effect::Notify(error.to_notification(FormAction::Submit)));
        }

        if self.images.len() + valid.len() > MAX_IMAGES {
            let error = ValidationError::TooManyImages {
                current: self.images.len(),
                incoming: valid.len(),
                limit: MAX_IMAGES,
            };
            log::debug!("Image batch rejected: {:?}", error);
            effects.push(Effect::Notify(error.to_notification(FormAction::Submit)));
            return effects;
        }

        if valid.is_empty() {
            return effects;
        }

        let count = valid.len();
        for file in valid {
            let preview = self.previews.create(&file.source);
            self.images.push(Image {
                id: self.next_image_id,
                name: file.name,
                mime_type: file.mime_type,
                size: file.size,
                source: file.source,
                preview,
            });
            self.next_image_id += 1;
        }
        self.phase = FormPhase::Editing;

        effects.push(Effect::Notify(Notification::info(
            "Images Uploaded",
            format!("{} added successfully.", count_images(count)),
        )));
        effects
    }

    /// Remove the image at `index`, releasing its preview.
    ///
    /// Out-of-range indices leave the form untouched.
    pub fn remove_image(&mut self, index: usize) -> Option<Image<P::Source>> {
        if index >= self.images.len() {
            log::debug!("No image at index {} ({} attached)", index, self.images.len());
            return None;
        }

        let mut image = self.images.remove(index);
        if let Some(preview) = image.preview.take() {
            self.previews.revoke(&preview);
        }
        self.phase = FormPhase::Editing;
        Some(image)
    }

    /// Position of the image with the given id.
    pub fn image_index(&self, id: u64) -> Option<usize> {
        self.images.iter().position(|image| image.id == id)
    }

    /// Remove an image by id, for callers that hold on to ids across removals.
    pub fn remove_image_by_id(&mut self, id: u64) -> Option<Image<P::Source>> {
        let index = self.image_index(id)?;
        self.remove_image(index)
    }

    /// Validate and announce the submission. No request is sent.
    pub fn submit_receipt(&mut self) -> Vec<Effect> {
        let date = match self.fields.validate() {
            Ok(date) => date,
            Err(e) => {
                log::debug!("Submission rejected: {}", e);
                self.phase = FormPhase::ValidationFailed;
                return vec![Effect::Notify(e.to_notification(FormAction::Submit))];
            }
        };

        self.phase = FormPhase::Submitted;
        let submission = ReceiptSubmission {
            receipt_id: self.fields.receipt_id.clone(),
            transaction_date: date,
            images: self.images.iter().map(Image::summary).collect(),
        };

        vec![
            Effect::Notify(Notification::info(
                "Receipt Submitted",
                format!(
                    "Receipt {} submitted with {}.",
                    submission.receipt_id,
                    count_images(submission.images.len())
                ),
            )),
            Effect::Record(Diagnostic::Submission(submission)),
        ]
    }

    fn release_previews(&mut self) {
        for image in &mut self.images {
            if let Some(preview) = image.preview.take() {
                self.previews.revoke(&preview);
            }
        }
    }
}

impl<P: PreviewStore> Drop for SubmissionForm<P> {
    fn drop(&mut self) {
        self.release_previews();
    }
}

fn count_images(count: usize) -> String {
    match count {
        1 => "1 image".to_string(),
        n => format!("{} images", n),
    }
}

//! Post-item wizard
//!
//! Three steps: basic info (title, category, condition), details
//! (description, price, location, contact, images) and confirmation. A
//! successful submission resets the wizard to an empty first step.

use std::path::Path;

use crate::config::MediaSettings;
use crate::domain::{Condition, NewItem, Price};

use super::images::{self, ImageAttachment, ImageError};

/// Category choices offered by the post page, as sent to the API.
pub const CATEGORIES: [&str; 9] = [
    "phone",
    "computer",
    "clothing",
    "sports",
    "beauty",
    "furniture",
    "books",
    "games",
    "other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Basic,
    Detail,
    Confirm,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Basic => 1,
            WizardStep::Detail => 2,
            WizardStep::Confirm => 3,
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            WizardStep::Basic => "post.steps.basic",
            WizardStep::Detail => "post.steps.detail",
            WizardStep::Confirm => "post.steps.confirm",
        }
    }
}

/// Raw field values as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub condition: String,
    pub is_barter: bool,
    pub allow_barter: bool,
    pub desired_item: String,
    pub location: String,
    pub contact_phone: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WizardError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Category is required")]
    CategoryRequired,

    #[error("Contact information is required")]
    ContactRequired,

    #[error("Price must be a non-negative number")]
    PriceInvalid,

    #[error("At most {0} images per listing")]
    ImageLimit(usize),

    #[error(transparent)]
    Image(#[from] ImageError),
}

impl WizardError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            WizardError::TitleRequired => "post.titleRequired",
            WizardError::CategoryRequired => "post.categoryRequired",
            WizardError::ContactRequired => "post.contactRequired",
            WizardError::PriceInvalid => "post.priceInvalid",
            WizardError::ImageLimit(_) => "post.imageLimit",
            WizardError::Image(e) => e.i18n_key(),
        }
    }
}

pub struct PostWizard {
    step: WizardStep,
    draft: ItemDraft,
    images: Vec<ImageAttachment>,
    media: MediaSettings,
}

impl PostWizard {
    pub fn new(media: MediaSettings) -> Self {
        Self {
            step: WizardStep::Basic,
            draft: ItemDraft::default(),
            images: Vec::new(),
            media,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ItemDraft {
        &mut self.draft
    }

    pub fn images(&self) -> &[ImageAttachment] {
        &self.images
    }

    /// Advance one step if the current step's required fields are filled.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.step = match self.step {
            WizardStep::Basic => {
                self.check_basic()?;
                WizardStep::Detail
            }
            WizardStep::Detail => {
                self.check_detail()?;
                WizardStep::Confirm
            }
            WizardStep::Confirm => WizardStep::Confirm,
        };
        Ok(self.step)
    }

    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Confirm => WizardStep::Detail,
            _ => WizardStep::Basic,
        };
        self.step
    }

    /// Attach an image file from disk.
    pub fn attach(&mut self, path: &Path) -> Result<&ImageAttachment, WizardError> {
        self.check_image_room()?;
        let image = images::load(path, self.media.max_image_bytes)?;
        Ok(self.push_image(image))
    }

    /// Attach an image already in memory.
    pub fn attach_bytes(
        &mut self,
        name: &str,
        mime: &str,
        bytes: &[u8],
    ) -> Result<&ImageAttachment, WizardError> {
        self.check_image_room()?;
        let image = images::encode(name, mime, bytes, self.media.max_image_bytes)?;
        Ok(self.push_image(image))
    }

    pub fn remove_image(&mut self, index: usize) -> Option<ImageAttachment> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    /// Build the request body, re-checking every step.
    pub fn build(&self) -> Result<NewItem, WizardError> {
        self.check_basic()?;
        self.check_detail()?;

        let price = match self.draft.price.trim() {
            "" => None,
            raw => Some(raw.parse::<Price>().map_err(|_| WizardError::PriceInvalid)?),
        };

        let condition = Condition::from_str(&self.draft.condition).unwrap_or_default();
        let image_urls: Vec<String> = self.images.iter().map(|i| i.data_url.clone()).collect();

        Ok(NewItem {
            title: self.draft.title.trim().to_string(),
            description: self.draft.description.trim().to_string(),
            price,
            category: self.draft.category.trim().to_string(),
            condition,
            image_url: image_urls.first().cloned(),
            image_urls,
            is_barter: self.draft.is_barter,
            allow_barter: self.draft.allow_barter,
            desired_item: self.draft.desired_item.trim().to_string(),
            location: self.draft.location.trim().to_string(),
            contact_phone: self.draft.contact_phone.trim().to_string(),
        })
    }

    /// Back to an empty first step.
    pub fn reset(&mut self) {
        self.step = WizardStep::Basic;
        self.draft = ItemDraft::default();
        self.images.clear();
    }

    fn check_basic(&self) -> Result<(), WizardError> {
        if self.draft.title.trim().is_empty() {
            return Err(WizardError::TitleRequired);
        }
        if self.draft.category.trim().is_empty() {
            return Err(WizardError::CategoryRequired);
        }
        Ok(())
    }

    fn check_detail(&self) -> Result<(), WizardError> {
        if self.draft.contact_phone.trim().is_empty() {
            return Err(WizardError::ContactRequired);
        }
        Ok(())
    }

    fn check_image_room(&self) -> Result<(), WizardError> {
        if self.images.len() >= self.media.max_images {
            return Err(WizardError::ImageLimit(self.media.max_images));
        }
        Ok(())
    }

    fn push_image(&mut self, image: ImageAttachment) -> &ImageAttachment {
        self.images.push(image);
        &self.images[self.images.len() - 1]
    }
}

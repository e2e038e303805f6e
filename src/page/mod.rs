//! Handles to the page elements the controllers drive.
//!
//! Controllers never look elements up themselves; whoever owns the page
//! passes the handles in. Every handle takes `&self` so one element can be
//! shared between several controllers.

pub mod memory;

use crate::models::CallbackRequest;

pub use memory::{MemoryCallbackForm, MemoryInput, MemoryListing, MemoryModal, Recorder};

/// The region vendor cards are rendered into.
pub trait ListingArea: Send + Sync {
    fn set_html(&self, html: String);
}

/// A text input or select element.
pub trait InputField: Send + Sync {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Blocking user notice (`alert`).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

pub trait Modal: Send + Sync {
    fn hide(&self);
}

/// The callback-request form.
pub trait CallbackForm: Send + Sync {
    /// Snapshot of the current field set.
    fn fields(&self) -> CallbackRequest;
    fn set_vendor_phone(&self, phone: &str);
    fn reset(&self);
}

/// The element that opened the callback modal, carrying its `data-phone`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalTrigger {
    pub phone: Option<String>,
}

impl ModalTrigger {
    pub fn for_phone(phone: impl Into<String>) -> Self {
        Self { phone: Some(phone.into()) }
    }
}

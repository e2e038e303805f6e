use std::sync::{Mutex, MutexGuard};
use crate::models::CallbackRequest;
use crate::page::{CallbackForm, InputField, ListingArea, Modal, Navigator, Notifier};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned page handle still holds usable state.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Listing area that keeps every write, newest last.
#[derive(Debug, Default)]
pub struct MemoryListing {
    writes: Mutex<Vec<String>>,
}

impl MemoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content, empty before the first write.
    pub fn html(&self) -> String {
        lock(&self.writes).last().cloned().unwrap_or_default()
    }

    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }
}

impl ListingArea for MemoryListing {
    fn set_html(&self, html: String) {
        lock(&self.writes).push(html);
    }
}

#[derive(Debug, Default)]
pub struct MemoryInput {
    value: Mutex<String>,
}

impl MemoryInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: Mutex::new(value.into()) }
    }
}

impl InputField for MemoryInput {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }

    fn set_value(&self, value: &str) {
        *lock(&self.value) = value.to_string();
    }
}

/// Records notices or navigations in order.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Mutex<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    pub fn last(&self) -> Option<String> {
        lock(&self.entries).last().cloned()
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        lock(&self.entries).push(message.to_string());
    }
}

impl Navigator for Recorder {
    fn navigate(&self, url: &str) {
        lock(&self.entries).push(url.to_string());
    }
}

#[derive(Debug)]
pub struct MemoryModal {
    open: Mutex<bool>,
}

impl MemoryModal {
    pub fn open() -> Self {
        Self { open: Mutex::new(true) }
    }

    pub fn is_open(&self) -> bool {
        *lock(&self.open)
    }
}

impl Modal for MemoryModal {
    fn hide(&self) {
        *lock(&self.open) = false;
    }
}

#[derive(Debug, Default)]
pub struct MemoryCallbackForm {
    fields: Mutex<CallbackRequest>,
}

impl MemoryCallbackForm {
    pub fn new(fields: CallbackRequest) -> Self {
        Self { fields: Mutex::new(fields) }
    }
}

impl CallbackForm for MemoryCallbackForm {
    fn fields(&self) -> CallbackRequest {
        lock(&self.fields).clone()
    }

    fn set_vendor_phone(&self, phone: &str) {
        lock(&self.fields).vendor_phone = phone.to_string();
    }

    fn reset(&self) {
        *lock(&self.fields) = CallbackRequest::default();
    }
}

//! "Request a callback" modal form.

use std::sync::Arc;
use tracing::{error, info, warn};
use crate::page::{CallbackForm, Modal, ModalTrigger, Notifier};
use crate::services::CallbackSink;

pub const TERMS_NOTICE: &str = "Please accept Terms & Conditions";
pub const SERVER_ERROR_NOTICE: &str = "Server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Terms not accepted; nothing was sent.
    Blocked,
    /// Accepted by the server; form reset and modal closed.
    Submitted(String),
    /// The server answered with an error message; form kept for a retry.
    Rejected(String),
    /// Transport or parse failure; form kept for a retry.
    Failed,
}

pub struct CallbackFormHandler<K> {
    sink: K,
    form: Arc<dyn CallbackForm>,
    modal: Arc<dyn Modal>,
    notifier: Arc<dyn Notifier>,
}

impl<K: CallbackSink> CallbackFormHandler<K> {
    pub fn new(
        sink: K,
        form: Arc<dyn CallbackForm>,
        modal: Arc<dyn Modal>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self { sink, form, modal, notifier }
    }

    /// Attributes the upcoming request to the vendor whose button opened the modal.
    pub fn on_modal_show(&self, trigger: Option<&ModalTrigger>) {
        if let Some(phone) = trigger.and_then(|t| t.phone.as_deref()) {
            self.form.set_vendor_phone(phone);
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let request = self.form.fields();

        if !request.terms_accepted {
            self.notifier.notify(TERMS_NOTICE);
            return SubmitOutcome::Blocked;
        }

        match self.sink.submit_callback(&request).await {
            Ok(reply) if reply.is_success() => {
                info!(
                    vendor_phone = %request.vendor_phone,
                    "Callback request submitted"
                );
                self.notifier.notify(&reply.message);
                self.form.reset();
                self.modal.hide();
                SubmitOutcome::Submitted(reply.message)
            }
            Ok(reply) => {
                warn!(
                    vendor_phone = %request.vendor_phone,
                    message = %reply.message,
                    "Callback request rejected"
                );
                self.notifier.notify(&reply.message);
                SubmitOutcome::Rejected(reply.message)
            }
            Err(e) => {
                error!(
                    error = %e,
                    vendor_phone = %request.vendor_phone,
                    "Failed to submit callback request"
                );
                self.notifier.notify(SERVER_ERROR_NOTICE);
                SubmitOutcome::Failed
            }
        }
    }
}

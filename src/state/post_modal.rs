//! New-post dialog state.
//!
//! DESIGN
//! ======
//! Transitions: hidden -> visible on `open`; visible -> hidden on `close`
//! or a successful submit. An inline error stays up across re-submits and
//! is only cleared by `close`, which also resets the form fields.

#[cfg(test)]
#[path = "post_modal_test.rs"]
mod post_modal_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostModalState {
    pub visible: bool,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
    /// A submission is awaiting the server.
    pub busy: bool,
}

impl PostModalState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the dialog, reset the form and clear any error.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Mark a submission as started. Returns `false` if one is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Show `message` inline; the dialog stays open.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.error = Some(message.into());
    }

    /// Submission ended without changing what the dialog shows.
    pub fn settle(&mut self) {
        self.busy = false;
    }
}

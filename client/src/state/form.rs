//! Submit/banner state shared by every form.
//!
//! DESIGN
//! ======
//! A form disables its submit control while `submitting` is set and shows at
//! most one banner after completion. Field values live in the page, never
//! here, so an error cannot wipe them.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::error::ApiError;

/// Inline banner shown above a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    None,
    Success(String),
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    pub banner: Banner,
}

impl FormStatus {
    /// Enter the submitting state. Returns `false` if a submission is
    /// already outstanding, in which case nothing changes.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.banner = Banner::None;
        true
    }

    /// Leave the submitting state with a banner for `result`.
    pub fn finish<T>(&mut self, result: &Result<T, ApiError>, success: &str) {
        self.submitting = false;
        self.banner = match result {
            Ok(_) => Banner::Success(success.to_owned()),
            Err(err) => Banner::Error(err.message.clone()),
        };
    }

    /// Leave the submitting state showing only errors.
    pub fn finish_quiet<T>(&mut self, result: &Result<T, ApiError>) {
        self.submitting = false;
        self.banner = match result {
            Ok(_) => Banner::None,
            Err(err) => Banner::Error(err.message.clone()),
        };
    }

    /// Reject with a local validation message. Ignored while a submission
    /// is outstanding; that request's outcome decides the banner.
    pub fn reject(&mut self, message: &str) {
        if self.submitting {
            return;
        }
        self.banner = Banner::Error(message.to_owned());
    }

    pub fn dismiss(&mut self) {
        self.banner = Banner::None;
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The contact screen: field validation and async form submission.

pub mod component;
pub mod form;
pub mod pane;

pub use component::{Message, State};
pub use form::{is_valid_email, FieldErrors, SubmitStatus};

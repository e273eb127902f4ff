// SPDX-License-Identifier: MPL-2.0
//! Contact screen component: field buffers, validation, and submission.

use crate::contact::form::{FieldErrors, SubmitStatus};
use crate::error::Result;
use iced::Task;

/// Messages handled by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    SubmitFinished(Result<()>),
}

/// Complete contact screen state.
pub struct State {
    endpoint: String,

    pub name: String,
    pub email: String,
    pub message: String,

    errors: FieldErrors,
    status: SubmitStatus,
}

impl State {
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            name: String::new(),
            email: String::new(),
            message: String::new(),
            errors: FieldErrors::default(),
            status: SubmitStatus::default(),
        }
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    #[must_use]
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn handle(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Task::none()
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Task::none()
            }
            Message::Submit => self.submit(),
            Message::SubmitFinished(result) => {
                match result {
                    Ok(()) => {
                        self.status = SubmitStatus::Sent;
                        self.name.clear();
                        self.email.clear();
                        self.message.clear();
                    }
                    Err(_) => {
                        // Field contents are kept so nothing typed is lost.
                        self.status = SubmitStatus::Failed(
                            "Something went wrong. Please try again later.".to_owned(),
                        );
                    }
                }
                Task::none()
            }
        }
    }

    fn submit(&mut self) -> Task<Message> {
        if matches!(self.status, SubmitStatus::Sending) {
            return Task::none();
        }

        self.errors = FieldErrors::validate(&self.name, &self.email, &self.message);
        if !self.errors.is_clear() {
            return Task::none();
        }

        self.status = SubmitStatus::Sending;

        let endpoint = self.endpoint.clone();
        let name = self.name.clone();
        let email = self.email.clone();
        let message = self.message.clone();

        Task::perform(
            submit_form(endpoint, name, email, message),
            Message::SubmitFinished,
        )
    }
}

/// POSTs the form fields urlencoded to the configured endpoint.
///
/// # Errors
///
/// Returns [`Error::Http`](crate::error::Error::Http) on transport failure
/// or a non-success status.
async fn submit_form(
    endpoint: String,
    name: String,
    email: String,
    message: String,
) -> Result<()> {
    reqwest::Client::new()
        .post(&endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(&[
            ("name", name.as_str()),
            ("email", email.as_str()),
            ("message", message.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

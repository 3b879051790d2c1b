use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use kernel::{KernelError, Violation};
use std::process::{ExitCode, Termination};

use crate::response::Envelope;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// The book operation a failure happened in. Picks the wording of the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Add,
    List,
    Show,
    Update,
    Delete,
}

impl BookAction {
    fn failed(&self) -> &'static str {
        match self {
            BookAction::Add => "Gagal menambahkan buku",
            BookAction::Update => "Gagal memperbarui buku",
            BookAction::List | BookAction::Show => "Gagal menampilkan buku",
            BookAction::Delete => "Gagal menghapus buku",
        }
    }

    fn invalid(&self, violation: &Violation) -> String {
        match violation {
            Violation::MissingName => format!("{}. Mohon isi nama buku", self.failed()),
            Violation::ReadPageExceedsPageCount => format!(
                "{}. readPage tidak boleh lebih besar dari pageCount",
                self.failed()
            ),
        }
    }

    fn not_found(&self) -> String {
        match self {
            BookAction::Update => format!("{}. Id tidak ditemukan", self.failed()),
            BookAction::Delete => "Buku gagal dihapus. Id tidak ditemukan".to_string(),
            BookAction::Add | BookAction::List | BookAction::Show => {
                "Buku tidak ditemukan".to_string()
            }
        }
    }

    fn internal(&self) -> String {
        match self {
            BookAction::Add => "Buku gagal ditambahkan".to_string(),
            BookAction::Update => "Buku gagal diperbarui".to_string(),
            BookAction::Delete => "Buku gagal dihapus".to_string(),
            BookAction::List | BookAction::Show => "Buku gagal ditampilkan".to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>, BookAction),
    Rejected(JsonRejection),
}

impl ErrorStatus {
    pub fn on(action: BookAction) -> impl FnOnce(Report<KernelError>) -> Self {
        move |report| Self::Kernel(report, action)
    }

    pub fn not_found(action: BookAction) -> Self {
        Self::Kernel(Report::new(KernelError::NotFound), action)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        match self {
            ErrorStatus::Kernel(report, action) => match report.current_context() {
                KernelError::Invalid(violation) => (
                    StatusCode::BAD_REQUEST,
                    Envelope::fail(action.invalid(violation)),
                )
                    .into_response(),
                KernelError::NotFound => {
                    (StatusCode::NOT_FOUND, Envelope::fail(action.not_found())).into_response()
                }
                KernelError::Internal => {
                    tracing::error!("{report:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Envelope::error(action.internal()),
                    )
                        .into_response()
                }
            },
            ErrorStatus::Rejected(rejection) => {
                (StatusCode::BAD_REQUEST, Envelope::fail(rejection.body_text())).into_response()
            }
        }
    }
}

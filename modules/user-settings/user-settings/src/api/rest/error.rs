use axum::extract::rejection::JsonRejection;
use http::StatusCode;

use crate::domain::error::DomainError;

use super::problem::{Problem, ValidationViolation};

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

fn build_problem(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
) -> Problem {
    Problem::for_code(status, code, title, detail).traced(current_trace_id())
}

/// Map domain error to RFC 9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::Unauthenticated => build_problem(
            StatusCode::UNAUTHORIZED,
            "unauthenticated",
            "Unauthenticated",
            "Sign in to access your settings",
        ),
        DomainError::Validation {
            field,
            value,
            message,
        } => build_problem(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation",
            "Validation Failed",
            message.clone(),
        )
        .violation(ValidationViolation {
            field: field.clone(),
            value: value.clone(),
            message: message.clone(),
        }),
        DomainError::NotFound => build_problem(
            StatusCode::NOT_FOUND,
            "not_found",
            "Not Found",
            "Settings not found",
        ),
        DomainError::StoreUnavailable(_) => {
            tracing::error!(error = ?e, "Settings store unavailable");
            build_problem(
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                "Service Unavailable",
                "The settings store is temporarily unavailable",
            )
        }
        DomainError::Internal(msg) => {
            tracing::error!(error = ?e, "Internal error: {msg}");
            build_problem(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal Server Error",
                "An internal error occurred",
            )
        }
    };
    problem.at(instance)
}

/// Malformed request bodies never reach the domain.
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    tracing::debug!(error = %rejection, "Rejected request body");
    build_problem(
        StatusCode::BAD_REQUEST,
        "bad_request",
        "Bad Request",
        rejection.body_text(),
    )
    .at(instance)
}

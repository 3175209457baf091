//! JSON body extractor that also runs `validator` rules
//!
//! A body that does not parse into the target type is a 400 `bad_request`.
//! A body that parses but breaks a field rule is a 422 `validation_failed`
//! whose message lists every broken field, sorted.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::ApiError;

/// `Json<T>` plus `T::validate()`.
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    Malformed(JsonRejection),
    Invalid(ValidationErrors),
}

fn describe(errors: &ValidationErrors) -> String {
    let mut problems: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    problems.sort();

    if problems.is_empty() {
        "Validation failed".to_string()
    } else {
        problems.join("; ")
    }
}

impl From<ValidatedJsonRejection> for ApiError {
    fn from(rejection: ValidatedJsonRejection) -> Self {
        match rejection {
            ValidatedJsonRejection::Malformed(e) => {
                ApiError::bad_request(format!("Invalid JSON: {}", e.body_text()))
            }
            ValidatedJsonRejection::Invalid(errors) => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_failed",
                describe(&errors),
            ),
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Malformed)?;
        value.validate().map_err(ValidatedJsonRejection::Invalid)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::interfaces::http::modules::payments::RecordPaymentRequest;

    async fn accept(ValidatedJson(body): ValidatedJson<RecordPaymentRequest>) -> String {
        body.month_covered.to_string()
    }

    async fn post_payment(body: String) -> (StatusCode, Value) {
        let app = Router::new().route("/payments", post(accept));
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/payments")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        });
        (status, value)
    }

    fn payment(month: &str, method: &str) -> String {
        json!({
            "tenantId": "t1",
            "unitId": "un1",
            "amount": 1200,
            "status": "paid",
            "method": method,
            "monthCovered": month
        })
        .to_string()
    }

    #[tokio::test]
    async fn well_formed_payment_passes() {
        let (status, body) = post_payment(payment("2024-03", "cash")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "2024-03");
    }

    #[tokio::test]
    async fn malformed_month_is_bad_request() {
        for month in ["2024-13", "2024-3", "March"] {
            let (status, body) = post_payment(payment(month, "cash")).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{month}");
            assert_eq!(body["code"], "bad_request");
            assert_eq!(body["success"], false);
        }
    }

    #[tokio::test]
    async fn unparseable_body_is_bad_request() {
        let (status, body) = post_payment("{\"tenantId\": ".into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn empty_method_is_validation_failure() {
        let (status, body) = post_payment(payment("2024-03", "")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "validation_failed");
        assert_eq!(body["error"], "method: method is required");
    }

    #[tokio::test]
    async fn every_broken_field_is_listed() {
        let body = json!({
            "tenantId": "",
            "unitId": "un1",
            "amount": 10,
            "status": "pending",
            "method": "",
            "monthCovered": "2024-03"
        });
        let (status, body) = post_payment(body.to_string()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = body["error"].as_str().unwrap();
        let problems: Vec<&str> = message.split("; ").collect();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0], "method: method is required");
        assert!(problems[1].ends_with("tenantId is required"));
    }
}

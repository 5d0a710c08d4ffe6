//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

async fn envelope_of(error: Error) -> (StatusCode, ErrorEnvelope) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let envelope = serde_json::from_slice(&bytes).expect("envelope JSON");
    (status, envelope)
}

#[rstest]
#[case(Error::invalid_request(), 400, "bad request")]
#[case(Error::unauthorized(), 401, "unauthorized")]
#[case(Error::forbidden(), 403, "forbidden")]
#[case(Error::not_found(), 404, "resource not found")]
#[case(Error::unprocessable(), 422, "unprocessable")]
#[case(Error::service_unavailable(), 503, "service unavailable")]
#[case(Error::internal(), 500, "internal server error")]
#[actix_web::test]
async fn every_error_uses_the_envelope(
    #[case] error: Error,
    #[case] status: u16,
    #[case] message: &str,
) {
    let (actual_status, envelope) = envelope_of(error).await;

    assert_eq!(actual_status.as_u16(), status);
    assert_eq!(
        envelope,
        ErrorEnvelope {
            success: false,
            error: status,
            message: message.to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_messages_are_redacted() {
    let error = Error::new(ErrorCode::InternalError, "pool exhausted at 10.0.0.3");
    let (_, envelope) = envelope_of(error).await;
    assert_eq!(envelope.message, "internal server error");
}

#[rstest]
#[actix_web::test]
async fn client_error_messages_pass_through() {
    let error = Error::new(ErrorCode::NotFound, "no such drink");
    let (status, envelope) = envelope_of(error).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(envelope.message, "no such drink");
}

#[rstest]
fn actix_errors_become_internal() {
    let actix = actix_web::error::ErrorBadGateway("upstream");
    assert_eq!(Error::from(actix).code(), ErrorCode::InternalError);
}

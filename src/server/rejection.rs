use std::convert::Infallible;

use serde_json::json;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::error::ServerError;
use crate::http::json_response;

pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let error = if let Some(server_err) = rejection.find::<ServerError>() {
        server_err.clone()
    } else if rejection.is_not_found() {
        ServerError::not_found()
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        ServerError::method_not_allowed()
    } else {
        log::error!("unhandled rejection: {:?}", rejection);
        ServerError::internal_server_error("internal server error")
    };

    if error.is_validation_error() {
        log::warn!("{}", error);
    } else if error.is_internal() {
        log::error!("{}", error);
    }

    let status =
        StatusCode::from_u16(error.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut body = json!({
        "error": error.message,
        "status": status.as_u16()
    });
    if !error.details.is_empty() {
        body["detail"] = json!(error.details);
    }

    Ok(json_response(status, &body))
}

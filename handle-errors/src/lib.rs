use thiserror::Error;
use tracing::{event, Level};
use warp::{
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::Reject,
    Rejection, Reply,
};

/// Rejections raised by the route handlers and the store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot parse parameter: {0}")]
    ParseError(#[from] std::num::ParseIntError),
    #[error("missing parameter")]
    MissingParameters,
    #[error("question not found")]
    QuestionNotFound,
    #[error("choice not found")]
    ChoiceNotFound,
}

impl Reject for Error {}

/// Recovery handler installed at the end of the filter chain.
///
/// A question that exists but is not yet published and a question that does
/// not exist at all both reject with [`Error::QuestionNotFound`], so callers
/// see the same 404 either way.
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(error) = r.find::<Error>() {
        event!(Level::WARN, "{}", error);
        let status = match error {
            Error::QuestionNotFound | Error::ChoiceNotFound => StatusCode::NOT_FOUND,
            Error::ParseError(_) | Error::MissingParameters => StatusCode::BAD_REQUEST,
        };
        Ok(warp::reply::with_status(error.to_string(), status))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::WARN, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::FORBIDDEN,
        ))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::WARN, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else {
        Ok(warp::reply::with_status(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}

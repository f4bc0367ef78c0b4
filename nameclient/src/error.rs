use namecore::error::ApiError;

pub(crate) fn from_reqwest(e: reqwest::Error) -> ApiError {
    if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

pub(crate) fn from_status(status: reqwest::StatusCode) -> ApiError {
    ApiError::Request {
        status: status.as_u16(),
        text: status.canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

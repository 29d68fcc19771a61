use thiserror::Error;

use crate::constants::{BAD_REQUEST_MESSAGE, NO_CONTENT_MESSAGE, SERVER_UNAVAILABLE_MESSAGE};

#[derive(Error, Debug)]
pub enum WikiError {
    #[error("SPARQL endpoint unavailable: {0}")]
    ServerUnavailable(String),
    #[error("query has no letter or digit")]
    BadRequest,
    #[error("no abstract found")]
    NoContent,
}

impl From<reqwest::Error> for WikiError {
    fn from(err: reqwest::Error) -> Self {
        WikiError::ServerUnavailable(err.to_string())
    }
}

impl WikiError {
    // Slackに返信する固定メッセージ
    pub fn reply_message(&self) -> &'static str {
        match self {
            WikiError::ServerUnavailable(_) => SERVER_UNAVAILABLE_MESSAGE,
            WikiError::BadRequest => BAD_REQUEST_MESSAGE,
            WikiError::NoContent => NO_CONTENT_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_message() {
        assert_eq!(
            WikiError::ServerUnavailable("timeout".into()).reply_message(),
            "Server unavailable :confused:"
        );
        assert_eq!(WikiError::BadRequest.reply_message(), "Bad request :unamused:");
        assert_eq!(WikiError::NoContent.reply_message(), "No content.");
    }
}

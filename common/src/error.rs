use std::fmt::Display;

/// The body of an error response.
///
/// Depending on the operation, an error is reported either as a single message, or as a list of
/// messages.
// TODO: unify the two shapes once clients can deal with the "errors" form only
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ErrorInformation {
    Single {
        /// A human-readable error message
        error: String,
    },
    List {
        /// Human-readable error messages
        errors: Vec<String>,
    },
}

impl ErrorInformation {
    pub fn new(error: impl Display) -> Self {
        Self::Single {
            error: error.to_string(),
        }
    }

    pub fn list<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self::List {
            errors: errors.into_iter().map(|err| err.to_string()).collect(),
        }
    }
}

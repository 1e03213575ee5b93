/// A rejected field value.
///
/// Checks run before anything is written to the database, so a rejected value never leaves
/// partial state behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Description must be present")]
    DescriptionMissing,
    #[error("Description must be at least 20 characters long")]
    DescriptionTooShort,
    #[error("Strength must be one of: {allowed}")]
    Strength { allowed: String },
}

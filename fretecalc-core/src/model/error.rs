/// errors raised at the input boundary of the engine. the calculation
/// itself never fails: missing or non-numeric fields degrade to zero,
/// and unknown states surface as an explicit unknown classification.
/// these variants cover structurally malformed input only, which is a
/// caller contract violation rather than an expected runtime condition.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("malformed freight query: {0}")]
    MalformedQuery(String),
}

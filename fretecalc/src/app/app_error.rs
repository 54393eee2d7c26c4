#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("failure reading query file '{filename}': {source}")]
    QueryFile {
        filename: String,
        source: std::io::Error,
    },
    #[error("query file is not valid JSON: {0}")]
    JsonSyntax(#[from] serde_json::Error),
    #[error("failure writing output to '{filename}': {source}")]
    OutputFile {
        filename: String,
        source: std::io::Error,
    },
}

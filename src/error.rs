use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{count} check(s) failed\n{report}")]
    Failed { count: usize, report: String },

    #[error("unknown output format '{0}', expected 'text' or 'json'")]
    UnknownFormat(String),

    #[error("failed to render failure report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

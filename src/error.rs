use thiserror::Error;

pub type CommandResult<T> = Result<T, SiliconError>;

#[derive(Debug, Error)]
pub enum SiliconError {
    #[error("package version metadata is unavailable")]
    VersionUnavailable,
}

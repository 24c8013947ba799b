use thiserror::Error;

pub type GradeResult<T> = Result<T, GradeError>;

#[derive(Debug, Error)]
pub enum GradeError {
    #[error("unsupported checklist item: {name} (supported: title, xlabel, ylabel)")]
    UnsupportedItem { name: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown raw category '{name}'")]
    UnknownRawCategory { name: String },

    #[error("index {ordinal} overflows with the {raw} offset")]
    IndexOverflow { raw: &'static str, ordinal: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

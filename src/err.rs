use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ChainErr {
    #[error("[Num] Unable to convert `{value}` to a number")]
    NotANumber { value: String },

    #[error("[Sum] Element at position `{position}` is not a number: `{value}`")]
    SumNotANumber { position: usize, value: String },
}

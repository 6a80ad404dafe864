use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum ProfileError {
    #[error("Invalid input: energy profile is empty")]
    Empty,

    #[error("Invalid input: sample {index} is not finite (value: {value})")]
    NonFinite { index: usize, value: f64 },
}

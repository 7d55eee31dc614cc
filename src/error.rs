//! Fatal error type for the `noe` binary.
//!
//! Every failure that should stop the program is funnelled into an
//! [`AppError`] carrying the process exit code. Per-candidate numeric
//! failures during the sweep are *not* `AppError`s; they are carried by
//! `domain::Evaluation` and logged, never fatal.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Configuration or resource problem (exit 2): a bad parameter range,
    /// an unopenable or unwritable result log.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// The measured dataset is empty (exit 3).
    pub fn no_data(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// An internal contract was violated (exit 4), e.g. a theoretical
    /// curve whose length disagrees with the measured one.
    pub fn contract(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

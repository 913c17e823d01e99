use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistErrorCode {
    Io,
    Parse,
    Http,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistError {
    pub code: WishlistErrorCode,
    pub message: String,
}

impl WishlistError {
    pub fn new(code: WishlistErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for WishlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for WishlistError {}

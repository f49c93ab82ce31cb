//! Result status carried alongside every interactor success.

use std::fmt;

/// Status an interactor call resolved to.
///
/// Failures carry theirs through [`crate::error::ZoooomError::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Created,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl Status {
    /// HTTP status code equivalent.
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A successful interactor result and the status it should be reported with.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub status: Status,
    pub value: T,
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self {
            status: Status::Ok,
            value,
        }
    }

    pub fn created(value: T) -> Self {
        Self {
            status: Status::Created,
            value,
        }
    }

    pub fn into_parts(self) -> (Status, T) {
        (self.status, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_http() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::Created.code(), 201);
        assert_eq!(Status::NotFound.code(), 404);
    }

    #[test]
    fn into_parts_keeps_status() {
        let (status, value) = Outcome::created(2).into_parts();
        assert_eq!(status, Status::Created);
        assert_eq!(value, 2);
    }
}

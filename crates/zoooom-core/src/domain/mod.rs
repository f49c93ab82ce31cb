//! Core domain layer for Zoooom.
//!
//! Plain entity records and the rules they obey. No I/O, no async; storage
//! concerns are reached only through the ports in `crate::application`.

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{Tag, Template, TemplateTag};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::Uid;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn uid_rejects_blank() {
        assert!(Uid::try_new("").is_err());
        assert!(Uid::try_new("   ").is_err());
        assert!(Uid::from_str("abc").is_ok());
    }

    #[test]
    fn generated_uids_are_distinct() {
        let a = Uid::generate();
        let b = Uid::generate();
        assert!(a.is_assigned());
        assert_ne!(a, b);
    }

    #[test]
    fn validator_checks_every_tag() {
        let tags = vec![Tag::draft("ok"), Tag::draft(" ")];
        assert!(DomainValidator::validate_tags(&tags).is_err());
        assert!(DomainValidator::validate_tags(&tags[..1]).is_ok());
    }

    #[test]
    fn page_window_rejects_zero_limit() {
        assert_eq!(
            DomainValidator::validate_page_window(0, 0),
            Err(DomainError::InvalidPagination {
                field: "limit",
                value: 0
            })
        );
    }

    #[test]
    fn page_window_rejects_negative_offset() {
        assert!(DomainValidator::validate_page_window(10, -10).is_err());
        assert!(DomainValidator::validate_page_window(10, 0).is_ok());
    }

    #[test]
    fn all_domain_errors_are_validation() {
        let err = DomainError::InvalidUid("x".into());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}

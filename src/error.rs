use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectorError {
    #[error("no inspector handler registered for member '{member}' of type {type_name}")]
    UnsupportedMemberType { member: String, type_name: &'static str },
    #[error("{object_type} has no public member '{member}'")]
    MemberNotFound { object_type: String, member: String },
    #[error("member '{member}' expects a {expected} value, got {found}")]
    ValueKindMismatch { member: String, expected: &'static str, found: String },
    #[error("'{variant}' is not a unit variant of {type_name}")]
    UnknownEnumVariant { type_name: &'static str, variant: String },
    #[error("member '{member}' is read-only in the inspector")]
    ReadOnlyMember { member: String },
    #[error("inspected object for member '{member}' has been dropped")]
    TargetDropped { member: String },
    #[error("could not write member '{member}': {reason}")]
    ApplyFailed { member: String, reason: String },
}

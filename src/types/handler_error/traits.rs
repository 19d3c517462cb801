use super::HandlerError;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

impl Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} (ID: {})",
            self.severity.as_str().to_uppercase(),
            self.name,
            self.message,
            self.id
        )
    }
}

// The cause is printed by id only; following it here could loop on a cycle.
impl Debug for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerError")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("message", &self.message)
            .field("timestamp", &self.timestamp)
            .field("severity", &self.severity)
            .field("error_type", &self.error_type)
            .field("code", &self.code)
            .field("metadata", &self.metadata)
            .field("cause", &self.cause().map(|cause| cause.id))
            .finish_non_exhaustive()
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl PartialEq for HandlerError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HandlerError {}

impl Hash for HandlerError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

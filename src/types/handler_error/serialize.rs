use super::{HandlerError, Metadata};
use crate::types::{EnvironmentInfo, ErrorType, Severity, StackFrame};
use serde::{Deserialize, Serialize};

/// Plain record for one member of a serialized chain.
///
/// There is no `cause` field: the position in the surrounding sequence
/// already says which error caused which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedChainEntry {
    pub id: String,
    pub message: String,
    pub metadata: Metadata,
    pub name: String,
    pub severity: Severity,
    pub timestamp: String,
}

/// Full serialization of a single entity, with its causes nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<SerializedError>>,
    pub id: String,
    pub message: String,
    pub metadata: Metadata,
    pub name: String,
    pub severity: Severity,
    pub timestamp: String,
}

/// Every captured field of one entity, without its cause.
///
/// Absent optional fields are left out of the output. The cause is never
/// included; use [`HandlerError::serialize`] for the nested form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_info: Option<EnvironmentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
    pub message: String,
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub name: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default)]
    pub stack_trace: Vec<StackFrame>,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Metadata>,
}

impl From<&HandlerError> for ErrorRecord {
    fn from(error: &HandlerError) -> Self {
        let details = error.details.clone();
        Self {
            context: details.context,
            environment_info: error.environment.clone(),
            error_code: error.code.clone(),
            example: details.example,
            file: error.file.clone(),
            id: error.id.to_string(),
            library: details.library,
            message: error.message.clone(),
            metadata: Metadata::clone(&error.metadata),
            method: error.method.clone(),
            name: error.name.clone(),
            severity: error.severity,
            solution: details.solution,
            stack_trace: error.stack_trace.clone(),
            timestamp: error.timestamp_iso(),
            error_type: error.error_type,
            values: details.values,
        }
    }
}

impl From<&HandlerError> for SerializedChainEntry {
    fn from(error: &HandlerError) -> Self {
        Self {
            id: error.id.to_string(),
            message: error.message.clone(),
            metadata: Metadata::clone(&error.metadata),
            name: error.name.clone(),
            severity: error.severity,
            timestamp: error.timestamp_iso(),
        }
    }
}

impl SerializedError {
    fn nest(error: &HandlerError, cause: Option<Box<SerializedError>>) -> Self {
        let entry = SerializedChainEntry::from(error);
        Self {
            cause,
            id: entry.id,
            message: entry.message,
            metadata: entry.metadata,
            name: entry.name,
            severity: entry.severity,
            timestamp: entry.timestamp,
        }
    }

    /// Drops the nested cause, keeping the record fields.
    pub fn into_chain_entry(self) -> SerializedChainEntry {
        SerializedChainEntry {
            id: self.id,
            message: self.message,
            metadata: self.metadata,
            name: self.name,
            severity: self.severity,
            timestamp: self.timestamp,
        }
    }
}

impl HandlerError {
    /// Serializes this entity with its causes nested under `cause`.
    ///
    /// The nesting is built bottom-up from the cycle-safe cause walk, so a
    /// linked cycle ends the nesting instead of recursing forever.
    pub fn serialize(&self) -> SerializedError {
        let causes: Vec<&HandlerError> = self.causes().map(|cause| cause.as_ref()).collect();
        let nested = causes
            .into_iter()
            .rev()
            .fold(None, |inner, cause| Some(Box::new(SerializedError::nest(cause, inner))));
        SerializedError::nest(self, nested)
    }

    /// Full record of this entity: details, code, type, location, parsed
    /// stack frames and environment, but no cause.
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from(self)
    }
}

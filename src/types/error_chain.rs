//! Read-only views over the causal list of a [`HandlerError`].
//!
//! The walk is iterative and remembers every identity it has visited, so a
//! cause link that leads back into the chain ends the walk instead of
//! looping. Each distinct entity appears exactly once, nearest effect first
//! and deepest known cause last.

use crate::types::handler_error::{HandlerError, SerializedChainEntry};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Buffer holding the members of a chain; short chains stay inline.
pub type ChainVec = SmallVec<[Arc<HandlerError>; 4]>;

/// Iterator over the causes of an entity (the entity itself excluded).
///
/// Created by [`HandlerError::causes`].
pub struct Causes<'a> {
    current: &'a HandlerError,
    visited: HashSet<Uuid>,
    finished: bool,
}

impl<'a> Causes<'a> {
    pub(crate) fn new(start: &'a HandlerError) -> Self {
        Self { current: start, visited: HashSet::from([start.id]), finished: false }
    }
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Arc<HandlerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let Some(cause) = self.current.cause() else {
            self.finished = true;
            return None;
        };
        if !self.visited.insert(cause.id) {
            tracing::trace!(
                from = %self.current.id,
                to = %cause.id,
                "cause link points back into the chain; stopping traversal"
            );
            self.finished = true;
            return None;
        }
        self.current = cause;
        Some(cause)
    }
}

impl core::iter::FusedIterator for Causes<'_> {}

/// Chain view rooted at one entity.
///
/// The view holds the start entity only; every query walks the links again,
/// so a cause linked later is picked up by the next call.
///
/// # Examples
///
/// ```
/// use handler_error::{ErrorChain, HandlerError};
///
/// let root = HandlerError::critical("disk failure").into_shared();
/// let middle = HandlerError::builder("write failed").cause(&root).build().into_shared();
/// let top = HandlerError::info("save aborted").into_shared();
/// top.link_cause(&middle).unwrap();
///
/// let chain = ErrorChain::new(top.clone());
/// let messages = chain.map_errors(|e| e.message().to_string());
/// assert_eq!(messages, ["save aborted", "write failed", "disk failure"]);
/// assert_eq!(chain.most_severe_error().id(), root.id());
/// ```
#[derive(Debug, Clone)]
pub struct ErrorChain {
    error: Arc<HandlerError>,
}

impl ErrorChain {
    #[inline]
    pub fn new(error: Arc<HandlerError>) -> Self {
        Self { error }
    }

    /// The entity the view starts from.
    #[inline]
    pub fn start(&self) -> &Arc<HandlerError> {
        &self.error
    }

    /// Borrowing walk over the chain, start entity first.
    pub fn iter(&self) -> impl Iterator<Item = &HandlerError> + '_ {
        core::iter::once(self.error.as_ref()).chain(self.error.causes().map(|cause| cause.as_ref()))
    }

    /// Distinct entities reachable from the start, in traversal order.
    pub fn error_chain(&self) -> ChainVec {
        let mut chain = ChainVec::new();
        chain.push(Arc::clone(&self.error));
        chain.extend(self.error.causes().cloned());
        chain
    }

    /// Number of distinct entities in the chain; at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.error.causes().count()
    }

    /// Always `false`: a chain contains at least its start entity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Deepest known cause; the start entity when it has no cause.
    pub fn root_error(&self) -> Arc<HandlerError> {
        self.error.causes().last().map_or_else(|| Arc::clone(&self.error), Arc::clone)
    }

    /// Applies `mapper` to every member, left to right.
    pub fn map_errors<T, F>(&self, mapper: F) -> Vec<T>
    where
        F: FnMut(&HandlerError) -> T,
    {
        self.iter().map(mapper).collect()
    }

    /// Member with the highest severity weight.
    ///
    /// Only a strictly greater weight replaces the running maximum, so among
    /// equally severe members the one closest to the start wins.
    pub fn most_severe_error(&self) -> Arc<HandlerError> {
        self.error.causes().fold(Arc::clone(&self.error), |most, candidate| {
            if candidate.severity.weight() > most.severity.weight() {
                Arc::clone(candidate)
            } else {
                most
            }
        })
    }

    /// Flat records for every member, in chain order, without `cause` fields.
    pub fn serialize(&self) -> Vec<SerializedChainEntry> {
        self.iter().map(SerializedChainEntry::from).collect()
    }
}

impl From<Arc<HandlerError>> for ErrorChain {
    #[inline]
    fn from(error: Arc<HandlerError>) -> Self {
        Self::new(error)
    }
}

use serde::{Deserialize, Serialize};

/// Rendering switches shared by every formatter.
///
/// Every field is optional: an unset field means "keep whatever the layer
/// below says". Formatters hold a fully populated instance built from their
/// own defaults, and per-call options are layered on top with
/// [`FormatterOptions::merge`].
///
/// # Examples
///
/// ```
/// use handler_error::formatter::FormatterOptions;
///
/// let defaults = FormatterOptions::new().show_timestamp(true).show_metadata(true);
/// let call = FormatterOptions::new().show_timestamp(false);
///
/// let merged = defaults.merge(&call);
/// assert_eq!(merged.show_timestamp, Some(false));
/// assert_eq!(merged.show_metadata, Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterOptions {
    pub show_timestamp: Option<bool>,
    pub show_metadata: Option<bool>,
    pub show_stack_trace: Option<bool>,
    pub indent_size: Option<usize>,
    pub colors: Option<bool>,
}

impl FormatterOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every optional block switched on.
    #[inline]
    pub fn verbose() -> Self {
        Self {
            show_timestamp: Some(true),
            show_metadata: Some(true),
            show_stack_trace: Some(true),
            ..Default::default()
        }
    }

    /// Name and message only.
    #[inline]
    pub fn minimal() -> Self {
        Self {
            show_timestamp: Some(false),
            show_metadata: Some(false),
            show_stack_trace: Some(false),
            ..Default::default()
        }
    }

    #[inline]
    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = Some(show);
        self
    }

    #[inline]
    pub fn show_metadata(mut self, show: bool) -> Self {
        self.show_metadata = Some(show);
        self
    }

    #[inline]
    pub fn show_stack_trace(mut self, show: bool) -> Self {
        self.show_stack_trace = Some(show);
        self
    }

    #[inline]
    pub fn indent_size(mut self, size: usize) -> Self {
        self.indent_size = Some(size);
        self
    }

    #[inline]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = Some(enabled);
        self
    }

    /// Shallow merge: fields set in `overrides` win, the rest come from `self`.
    pub fn merge(&self, overrides: &FormatterOptions) -> FormatterOptions {
        FormatterOptions {
            show_timestamp: overrides.show_timestamp.or(self.show_timestamp),
            show_metadata: overrides.show_metadata.or(self.show_metadata),
            show_stack_trace: overrides.show_stack_trace.or(self.show_stack_trace),
            indent_size: overrides.indent_size.or(self.indent_size),
            colors: overrides.colors.or(self.colors),
        }
    }

    /// [`merge`](Self::merge) with optional overrides.
    #[inline]
    pub fn merged(&self, overrides: Option<&FormatterOptions>) -> FormatterOptions {
        match overrides {
            Some(overrides) => self.merge(overrides),
            None => self.clone(),
        }
    }

    #[inline]
    pub(crate) fn timestamp_enabled(&self) -> bool {
        self.show_timestamp.unwrap_or(false)
    }

    #[inline]
    pub(crate) fn metadata_enabled(&self) -> bool {
        self.show_metadata.unwrap_or(false)
    }

    #[inline]
    pub(crate) fn stack_trace_enabled(&self) -> bool {
        self.show_stack_trace.unwrap_or(false)
    }

    #[inline]
    pub(crate) fn colors_enabled(&self) -> bool {
        self.colors.unwrap_or(false)
    }
}

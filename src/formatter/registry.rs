use super::{
    AnsiFormatter, ErrorFormatter, FormatterOptions, HtmlFormatter, JsonFormatter, TextFormatter,
};
use crate::error::{Error, Result};
use core::fmt;

/// Builds a formatter from optional per-instance options.
pub type FormatterFactory =
    Box<dyn Fn(Option<&FormatterOptions>) -> Box<dyn ErrorFormatter> + Send + Sync>;

/// Name-keyed store of formatter factories.
///
/// The registry is a plain value owned by the application; it does no
/// locking of its own, so sharing it across threads for registration needs
/// external synchronization.
///
/// # Examples
///
/// ```
/// use handler_error::formatter::{FormatterOptions, FormatterRegistry};
/// use handler_error::HandlerError;
///
/// let registry = FormatterRegistry::with_defaults();
/// let formatter = registry.get("text", Some(&FormatterOptions::minimal())).unwrap();
///
/// let err = HandlerError::new("boom");
/// assert_eq!(formatter.format(&err, None), "HandlerError: boom");
/// assert!(registry.get("xml", None).is_err());
/// ```
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: Vec<(String, FormatterFactory)>,
}

impl FormatterRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `text`, `ansi`, `html` and `json` registered, in that order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert("text", |options| Box::new(TextFormatter::new(options.cloned())));
        registry.insert("ansi", |options| Box::new(AnsiFormatter::new(options.cloned())));
        registry.insert("html", |options| Box::new(HtmlFormatter::new(options.cloned())));
        registry.insert("json", |options| Box::new(JsonFormatter::new(options.cloned())));
        registry
    }

    /// Stores `factory` under `name`, replacing any earlier registration.
    ///
    /// A replaced name keeps its original position in [`list`](Self::list).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `name` is empty.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(Option<&FormatterOptions>) -> Box<dyn ErrorFormatter> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::invalid_argument("Formatter name must be a non-empty string"));
        }
        self.insert(name, factory);
        Ok(())
    }

    /// Builds a fresh formatter registered under `name`.
    ///
    /// # Errors
    ///
    /// [`Error::FormatterNotFound`] when nothing is registered under `name`.
    pub fn get(
        &self,
        name: &str,
        options: Option<&FormatterOptions>,
    ) -> Result<Box<dyn ErrorFormatter>> {
        self.formatters
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, factory)| factory(options))
            .ok_or_else(|| Error::FormatterNotFound(name.to_string()))
    }

    /// Registered names in registration order.
    pub fn list(&self) -> Vec<&str> {
        self.formatters.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.iter().any(|(registered, _)| registered == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    fn insert<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Option<&FormatterOptions>) -> Box<dyn ErrorFormatter> + Send + Sync + 'static,
    {
        let name = name.into();
        let factory: FormatterFactory = Box::new(factory);
        match self.formatters.iter_mut().find(|(registered, _)| *registered == name) {
            Some(slot) => {
                tracing::debug!(formatter = %name, "replacing registered formatter");
                slot.1 = factory;
            }
            None => {
                tracing::debug!(formatter = %name, "registering formatter");
                self.formatters.push((name, factory));
            }
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry").field("formatters", &self.list()).finish()
    }
}

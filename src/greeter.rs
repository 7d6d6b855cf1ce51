//! Greeting helper behind the `hello` and `goodbye` commands.

/// Name used when none is supplied.
pub const DEFAULT_NAME: &str = "World";

/// Formats a stored name into a greeting or a farewell.
///
/// The name is interpolated verbatim, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `Hello, {name}!`.
    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// Returns `Goodbye, {name}!`.
    pub fn farewell(&self) -> String {
        format!("Goodbye, {}!", self.name)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

// Pattern 2: Revealing Module - private functions, selectively exposed
// Only `first` and `second` are public; everything else is module-private.

use tracing::trace;

pub const EXPOSED_MESSAGE: &str = "This is a method I want to expose!";
pub const PRIVATE_MESSAGE: &str = "Inside a private method!";

#[derive(Debug)]
pub struct Exposer {
    private_variable: u32,
}

impl Exposer {
    pub fn new() -> Self {
        Self {
            private_variable: 10,
        }
    }

    fn private_method(&mut self) -> &'static str {
        self.private_variable += 1;
        trace!(private_variable = self.private_variable, "private method ran");
        PRIVATE_MESSAGE
    }

    fn method_to_expose(&self) -> &'static str {
        EXPOSED_MESSAGE
    }

    fn other_method_to_expose(&mut self) -> &'static str {
        self.private_method()
    }

    // Public aliases for the private methods.

    pub fn first(&self) -> &'static str {
        self.method_to_expose()
    }

    pub fn second(&mut self) -> &'static str {
        self.other_method_to_expose()
    }
}

impl Default for Exposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_is_exposed_method() {
        let exposer = Exposer::new();
        assert_eq!(exposer.first(), "This is a method I want to expose!");
        assert_eq!(exposer.private_variable, 10);
    }

    #[test]
    fn test_second_runs_private_method() {
        let mut exposer = Exposer::new();
        assert_eq!(exposer.second(), "Inside a private method!");
        assert_eq!(exposer.second(), "Inside a private method!");
        assert_eq!(exposer.private_variable, 12);
    }
}

// Pattern 3: Prototype - shared methods and cheap copies
// Methods live once in the `impl` block; new objects come from `Clone`.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: String,
    pub dob: String,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn go(&self) -> &'static str {
        "We are off!!"
    }

    pub fn stop(&self) -> &'static str {
        "We have stopped"
    }

    /// Copies this person as a template, overriding only the name.
    pub fn from_prototype(&self, name: impl Into<String>) -> Self {
        let mut cloned = self.clone();
        cloned.name = name.into();
        cloned
    }
}

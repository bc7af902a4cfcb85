pub const GREETING: &str = "Hello from aws-knowledge-tool!";

/// Returns the greeting printed by the default command.
pub fn message() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_default_greeting() {
        assert_eq!(message(), GREETING);
    }

    #[test]
    fn greeting_is_stable_across_calls() {
        assert_eq!(message(), message());
        assert!(!message().is_empty());
    }
}

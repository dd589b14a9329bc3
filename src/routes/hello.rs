//! Greeting endpoint.

/// Body returned by `GET /hello`.
pub const GREETING: &str = "Hello Docker v0.0.2!";

/// Greeting handler.
///
/// Stateless and infallible; axum turns the `&'static str` into a
/// `200 OK` with a `text/plain; charset=utf-8` body.
pub async fn hello() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_greeting() {
        assert_eq!(hello().await, "Hello Docker v0.0.2!");
    }

    #[tokio::test]
    async fn repeated_calls_are_identical() {
        for _ in 0..10 {
            assert_eq!(hello().await, GREETING);
        }
    }
}

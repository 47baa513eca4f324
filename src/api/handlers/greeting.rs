/// Root endpoint handler
/// Returns "Hello World!" with 200 status code
pub async fn hello() -> &'static str {
    "Hello World!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_returns_greeting() {
        let result = hello().await;
        assert_eq!(result, "Hello World!");
    }
}

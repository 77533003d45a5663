/// Perform Stage 0: input normalization
///
/// Trims surrounding whitespace. Returns `None` for empty or blank input, which the
/// pipeline turns into an empty output without running later stages.
pub fn normalize(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

//! # Utility Functions Module
//!
//! Helpers for building argument lists handed to `std::process::Command`.

/// Collects anything `ToString` into an owned argument vector.
///
/// ```rust
/// use media_toolcheck::utils::to_string_vec;
///
/// let width = 50;
/// let args = to_string_vec(["-resize", &format!("{}x{}!", width, width)]);
/// assert_eq!(args, vec!["-resize", "50x50!"]);
/// ```
pub fn to_string_vec<T, I>(items: I) -> Vec<String>
where
    T: ToString,
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string_vec_paths_and_flags() {
        let result = to_string_vec(["in.png", "-resize", "10x20!", "out.png"]);
        assert_eq!(result, vec!["in.png", "-resize", "10x20!", "out.png"]);
    }

    #[test]
    fn test_to_string_vec_empty() {
        let result: Vec<String> = to_string_vec(Vec::<&str>::new());
        assert!(result.is_empty());
    }
}

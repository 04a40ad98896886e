/// Upper-cases the first character, as the page does for service names.
pub fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalized("youtube"), "Youtube");
        assert_eq!(capitalized("Spotify"), "Spotify");
        assert_eq!(capitalized(""), "");
    }
}

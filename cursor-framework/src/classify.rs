/// Character-class queries for input elements.
///
/// Implemented for `char` (Unicode classes) and `u8` (ASCII classes) so the
/// identifier and predicate rules serve both text and byte grammars.
pub trait Classify {
    fn is_alphabetic(&self) -> bool;
    fn is_alphanumeric(&self) -> bool;
    fn is_digit(&self) -> bool;
    fn is_whitespace(&self) -> bool;
}

impl Classify for char {
    fn is_alphabetic(&self) -> bool {
        char::is_alphabetic(*self)
    }

    fn is_alphanumeric(&self) -> bool {
        char::is_alphanumeric(*self)
    }

    fn is_digit(&self) -> bool {
        self.is_ascii_digit()
    }

    fn is_whitespace(&self) -> bool {
        char::is_whitespace(*self)
    }
}

impl Classify for u8 {
    fn is_alphabetic(&self) -> bool {
        self.is_ascii_alphabetic()
    }

    fn is_alphanumeric(&self) -> bool {
        self.is_ascii_alphanumeric()
    }

    fn is_digit(&self) -> bool {
        self.is_ascii_digit()
    }

    fn is_whitespace(&self) -> bool {
        self.is_ascii_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::Classify;

    #[test]
    fn test_char_classes() {
        assert!(Classify::is_alphabetic(&'é'));
        assert!(Classify::is_alphanumeric(&'7'));
        assert!(!Classify::is_digit(&'٣'));
        assert!(Classify::is_whitespace(&'\t'));
    }

    #[test]
    fn test_byte_classes() {
        assert!(Classify::is_alphabetic(&b'z'));
        assert!(!Classify::is_alphabetic(&0xE9u8));
        assert!(Classify::is_digit(&b'0'));
        assert!(Classify::is_whitespace(&b'\n'));
    }
}

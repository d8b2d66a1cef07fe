#[cfg(test)]
mod tests {
    use tokentree::tokenizers::{make_tokenizer, DEFAULT_ENCODING, KNOWN_ENCODINGS};

    #[test]
    fn test_default_encoding_counts_tokens() {
        let tokenizer = make_tokenizer(DEFAULT_ENCODING).unwrap();
        assert_eq!(tokenizer.name(), "cl100k_base");
        assert_eq!(tokenizer.count("Hello, world!"), 4);
        assert_eq!(tokenizer.count(""), 0);

        // repeating the text must grow the count
        let text = "Hello, world! This is a test.";
        assert!(tokenizer.count(&text.repeat(10)) > tokenizer.count(text));
    }

    #[test]
    fn test_special_token_text_is_counted_as_plain_text() {
        let tokenizer = make_tokenizer(DEFAULT_ENCODING).unwrap();
        assert!(tokenizer.count("before <|endoftext|> after") > 3);
    }

    #[test]
    fn test_every_known_encoding_loads() {
        for name in KNOWN_ENCODINGS {
            let tokenizer = make_tokenizer(name).unwrap();
            assert!(tokenizer.count("fn main() {}") > 0, "{} produced no tokens", name);
        }
    }

    #[test]
    fn test_unknown_encoding_fails() {
        assert!(make_tokenizer("cl100k_basee").is_err());
    }
}

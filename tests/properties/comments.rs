//! Property tests for HTML comment stripping.

use proptest::prelude::*;

use docbundle::domain::services::remove_comments;

fn plain_text() -> impl Strategy<Value = String> {
    // No '<' so generated text cannot open a comment on its own
    proptest::string::string_regex("[A-Za-z0-9 #\\-\n>]{0,40}").unwrap()
}

fn comment_body() -> impl Strategy<Value = String> {
    // No '>' so the body cannot terminate the comment early
    proptest::string::string_regex("[A-Za-z0-9 #\\-\n<!]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Stripping never panics on arbitrary input.
    #[test]
    fn property_strip_never_panics(text in "\\PC{0,200}") {
        let _ = remove_comments(&text);
    }

    /// PROPERTY: Text interleaved with terminated comments keeps exactly the text.
    #[test]
    fn property_terminated_comments_are_removed(
        parts in proptest::collection::vec((plain_text(), comment_body()), 0..=6),
    ) {
        let mut input = String::new();
        let mut expected = String::new();
        for (text, comment) in &parts {
            input.push_str(text);
            input.push_str("<!--");
            input.push_str(comment);
            input.push_str("-->");
            expected.push_str(text);
        }
        prop_assert_eq!(remove_comments(&input).into_owned(), expected);
    }

    /// PROPERTY: An opener without a closer leaves the text untouched.
    #[test]
    fn property_unterminated_comment_is_kept(head in plain_text(), tail in comment_body()) {
        let input = format!("{}<!--{}", head, tail);
        prop_assert_eq!(remove_comments(&input).into_owned(), input);
    }
}

//! Edge case and property tests for clex-lex

#[cfg(test)]
mod tests {
    use crate::{is_valid_token, scan, Scanner, TokenKind, SYMBOLS};
    use clex_util::Handler;

    fn lexemes(source: &str) -> Vec<String> {
        scan(source)
            .tokens
            .into_iter()
            .map(|t| t.lexeme)
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_runs() {
        assert_eq!(lexemes("a   b"), vec!["a", "b"]);
        assert_eq!(lexemes("\ta\r\n\u{2003}b\u{001C}"), vec!["a", "b"]);
    }

    #[test]
    fn test_edge_no_break_space_is_unexpected() {
        let result = scan("a\u{00A0}b");
        assert_eq!(result.lexemes(), vec!["a", "b"]);
        assert_eq!(
            result.messages(),
            vec!["Lexical error: Unexpected character '\u{00A0}' at position 1"]
        );
    }

    #[test]
    fn test_edge_information_separator_is_whitespace() {
        let result = scan("a\u{001C}b\u{001F}c");
        assert_eq!(result.lexemes(), vec!["a", "b", "c"]);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_edge_letter_number_is_unexpected() {
        let result = scan("\u{216B};");
        assert_eq!(result.lexemes(), vec![";"]);
        assert_eq!(
            result.messages(),
            vec!["Lexical error: Unexpected character '\u{216B}' at position 0"]
        );
    }

    #[test]
    fn test_edge_superscript_ends_word() {
        let result = scan("x\u{00B2};");
        assert_eq!(result.lexemes(), vec!["x", ";"]);
        assert_eq!(
            result.messages(),
            vec!["Lexical error: Unexpected character '\u{00B2}' at position 1"]
        );
    }

    #[test]
    fn test_edge_non_ascii_decimal_digits_continue_words() {
        assert_eq!(lexemes("x٣ ٣x"), vec!["x٣", "x"]);
    }

    #[test]
    fn test_edge_keywords_are_words() {
        let result = scan("int main");
        assert_eq!(result.lexemes(), vec!["int", "main"]);
        assert!(result.tokens.iter().all(|t| t.is_keyword()));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let result = scan("integer returns floaty");
        assert_eq!(result.lexemes(), vec!["integer", "returns", "floaty"]);
        assert_eq!(result.keyword_count(), 0);
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        assert_eq!(scan("INT Return").keyword_count(), 0);
    }

    #[test]
    fn test_edge_underscore_only() {
        assert_eq!(lexemes("_ __"), vec!["_", "__"]);
    }

    #[test]
    fn test_edge_number_after_word_is_absorbed() {
        assert_eq!(lexemes("x1 1x"), vec!["x1", "x"]);
        assert_eq!(
            scan("x1 1x").messages(),
            vec!["Lexical error: Unexpected character '1' at position 3"]
        );
    }

    #[test]
    fn test_edge_every_symbol() {
        let source: String = SYMBOLS.iter().collect();
        let result = scan(&source);
        assert_eq!(result.tokens.len(), SYMBOLS.len());
        assert_eq!(result.symbol_count(), SYMBOLS.len());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_edge_unrecognized_punctuation() {
        let result = scan("a.b:c%d^e?f~g\"h'i");
        assert_eq!(
            result.lexemes(),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
        assert_eq!(result.diagnostics.len(), 8);
    }

    #[test]
    fn test_edge_unexpected_non_ascii() {
        let result = scan("x€y");
        assert_eq!(result.lexemes(), vec!["x", "y"]);
        assert_eq!(
            result.messages(),
            vec!["Lexical error: Unexpected character '€' at position 1"]
        );
    }

    #[test]
    fn test_edge_comment_markers_in_comments() {
        assert_eq!(lexemes("/* // */a"), vec!["a"]);
        assert_eq!(lexemes("// /* \nb"), vec!["b"]);
        assert_eq!(lexemes("/***/c"), vec!["c"]);
    }

    #[test]
    fn test_edge_slash_star_split_across_comment_end() {
        assert_eq!(lexemes("*/"), vec!["*", "/"]);
        assert_eq!(lexemes("a//"), vec!["a"]);
        assert_eq!(lexemes("a/*"), vec!["a"]);
    }

    #[test]
    fn test_edge_diagnostic_spans_point_at_character() {
        let result = scan("ab\n @");
        let diag = &result.diagnostics[0];
        assert_eq!(diag.span.start, 4);
        assert_eq!(diag.span.len(), 1);
        assert_eq!((diag.span.line, diag.span.column), (2, 2));
    }

    #[test]
    fn test_edge_scanner_reusable_after_exhaustion() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("a", &handler);
        assert!(scanner.next_token().is_some());
        assert!(scanner.next_token().is_none());
        assert!(scanner.next_token().is_none());
    }

    #[test]
    fn test_edge_large_input() {
        let source = "int x = y + z;\n".repeat(10_000);
        let result = scan(&source);
        assert_eq!(result.tokens.len(), 70_000);
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.tokens.last().map(|t| t.span.line), Some(10_000));
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_property_scan_is_total_and_deterministic() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,200}")| {
            let first = scan(&input);
            let second = scan(&input);
            prop_assert_eq!(first, second);
        });
    }

    #[test]
    fn test_property_tokens_are_symbols_or_valid_words() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9_ ;\\n/*@#(){}=+-]{0,200}")| {
            for token in scan(&input).tokens {
                match token.kind {
                    TokenKind::Symbol => {
                        prop_assert_eq!(token.lexeme.chars().count(), 1);
                        let ch = token.lexeme.chars().next().unwrap_or('\0');
                        prop_assert!(SYMBOLS.contains(&ch));
                    },
                    TokenKind::Word => prop_assert!(is_valid_token(&token.lexeme)),
                }
                prop_assert!(!token.lexeme.chars().any(char::is_whitespace));
                prop_assert!(!token.lexeme.contains("//"));
                prop_assert!(!token.lexeme.contains("/*"));
            }
        });
    }

    #[test]
    fn test_property_spans_increase_and_match_source() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z0-9_ \\t\\n;,=+@$]{0,200}")| {
            let chars: Vec<char> = input.chars().collect();
            let result = scan(&input);
            let mut last_end = 0;
            for token in &result.tokens {
                prop_assert!(token.span.start >= last_end);
                let text: String = chars[token.span.start..token.span.end].iter().collect();
                prop_assert_eq!(&text, &token.lexeme);
                last_end = token.span.end;
            }
        });
    }

    #[test]
    fn test_property_identifier_strings_scan_to_one_word() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let result = scan(&input);
            prop_assert_eq!(result.tokens.len(), 1);
            prop_assert_eq!(result.tokens[0].kind, TokenKind::Word);
            prop_assert!(result.diagnostics.is_empty());
        });
    }

    #[test]
    fn test_property_digit_runs_report_each_digit() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,50}")| {
            let result = scan(&input);
            prop_assert!(result.tokens.is_empty());
            prop_assert_eq!(result.diagnostics.len(), input.len());
        });
    }

    #[test]
    fn test_property_block_comment_content_is_erased() {
        use proptest::prelude::*;

        proptest!(|(body in "[a-z0-9 @#;\\n]{0,80}")| {
            let source = format!("a/*{}*/b", body);
            prop_assert_eq!(lexemes(&source), vec!["a".to_string(), "b".to_string()]);
        });
    }
}

//! Parsers for the provider's line-oriented `key=value` response dialects.
//!
//! The provider answers every operation with a small blob of text. Four
//! distinct dialects appear, and each gets its own parser here:
//!
//! 1. **Token extraction** - one `key=<value>` line ([`parse_token`])
//! 2. **Boolean assertion** - `boolean=true` / anything else
//!    ([`parse_boolean`])
//! 3. **Attribute block** - multi-line roles plus positionally-paired
//!    attribute name/value lines ([`parse_attributes`])
//! 4. **String list** - one `string=<value>` per line
//!    ([`parse_string_list`])
//!
//! All parsers are pure functions of the input: parsing the same body twice
//! yields identical results. Line endings `\r\n` and `\n` are both legal
//! and normalized identically. None of the parsers assumes a fixed line
//! count.

use crate::error::ParseError;
use crate::identity::IdentityRecord;
use crate::token::SessionToken;

/// Key prefix marking a role line in an attribute block.
const ROLE_PREFIX: &str = "userdetails.role";

/// Key prefix marking an attribute-name line in an attribute block.
const ATTRIBUTE_NAME_PREFIX: &str = "userdetails.attribute.name";

/// Prefix carried by every meaningful line of a string-list response.
const STRING_PREFIX: &str = "string=";

/// Exact trimmed body asserting a valid token.
const BOOLEAN_TRUE: &str = "boolean=true";

/// Extracts the value of a single `key=<value>` line.
///
/// The body is trimmed of surrounding whitespace (covering both `\r\n` and
/// `\n` endings) and split on the first `=` only, so the value may itself
/// contain `=` or be empty. A body with no `=` at all is a provider
/// contract violation and fails with [`ParseError::MissingSeparator`] -
/// deliberately distinct from the empty-body "invalid credentials" signal,
/// which the session client handles before parsing.
pub fn parse_value(body: &str) -> Result<&str, ParseError> {
    let line = body.trim();
    match line.split_once('=') {
        Some((_, value)) => Ok(value),
        None => Err(ParseError::MissingSeparator {
            line: line.to_string(),
        }),
    }
}

/// Decodes a token-extraction response (`token.id=<token>`) into a
/// [`SessionToken`].
pub fn parse_token(body: &str) -> Result<SessionToken, ParseError> {
    parse_value(body).map(SessionToken::new)
}

/// Decodes a boolean-assertion response.
///
/// Trims trailing whitespace and compares the remainder to the exact
/// literal `boolean=true`. Any other content - `boolean=false`, garbage, or
/// an empty body - means "not valid". This mirrors the provider's contract,
/// where only the `true` literal is meaningful; it is not a general boolean
/// parser and never errors.
pub fn parse_boolean(body: &str) -> bool {
    body.trim_end() == BOOLEAN_TRUE
}

/// Decodes an attribute-block response into an [`IdentityRecord`].
///
/// Each line is independently split on its first `=`; lines without `=`
/// (blank separators included) are skipped. Two patterns layer on top:
///
/// - lines whose key starts with `userdetails.role` append their value to
///   the role list, in order, duplicates retained;
/// - lines whose key starts with `userdetails.attribute.name` carry the
///   attribute's name as their value, and the attribute's bound value is
///   the value of the IMMEDIATELY FOLLOWING line by position. The pairing
///   is positional, not prefix-driven, so the scan is index-based with one
///   line of lookahead.
///
/// A name line with no following line indicates a truncated response and
/// fails with [`ParseError::DanglingAttributeName`]; a following line
/// without `=` is the same class of corruption and fails with
/// [`ParseError::MissingSeparator`]. All other lines are ignored.
pub fn parse_attributes(body: &str) -> Result<IdentityRecord, ParseError> {
    let lines: Vec<&str> = body.lines().collect();
    let mut record = IdentityRecord::new();

    for (i, line) in lines.iter().enumerate() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        if key.starts_with(ATTRIBUTE_NAME_PREFIX) {
            let next = lines
                .get(i + 1)
                .ok_or_else(|| ParseError::DanglingAttributeName {
                    name: value.to_string(),
                })?;
            let (_, bound) =
                next.split_once('=')
                    .ok_or_else(|| ParseError::MissingSeparator {
                        line: next.to_string(),
                    })?;
            // Repeated names take the last occurrence.
            record
                .attributes
                .insert(value.to_string(), bound.to_string());
        } else if key.starts_with(ROLE_PREFIX) {
            record.roles.push(value.to_string());
        }
    }

    Ok(record)
}

/// Decodes a string-list response into an ordered sequence of values.
///
/// Strips the literal `string=` prefix from each line and discards blank
/// lines. Order is preserved and duplicates are retained. Lines missing the
/// prefix are kept as-is, matching the provider-tolerant behavior of the
/// original interface.
pub fn parse_string_list(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(STRING_PREFIX).unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_extraction_strips_both_newline_variants() {
        let token = parse_token("token.id=AQIC5wM2LY4Sfcw==\r\n").unwrap();
        assert_eq!(token.as_str(), "AQIC5wM2LY4Sfcw==");

        let token = parse_token("token.id=AQIC5wM2LY4Sfcw==\n").unwrap();
        assert_eq!(token.as_str(), "AQIC5wM2LY4Sfcw==");

        let token = parse_token("token.id=ABC123").unwrap();
        assert_eq!(token.as_str(), "ABC123");
    }

    #[test]
    fn token_extraction_splits_on_first_separator_only() {
        // Provider tokens routinely contain '=' padding.
        let token = parse_token("token.id=AQIC==#extra=stuff\n").unwrap();
        assert_eq!(token.as_str(), "AQIC==#extra=stuff");
    }

    #[test]
    fn token_extraction_allows_empty_value() {
        let token = parse_token("token.id=\n").unwrap();
        assert_eq!(token.as_str(), "");
    }

    #[test]
    fn token_extraction_fails_without_separator() {
        let err = parse_token("no separator here\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingSeparator {
                line: "no separator here".to_string()
            }
        );
    }

    #[test]
    fn boolean_assertion_accepts_only_the_true_literal() {
        assert!(parse_boolean("boolean=true\r\n"));
        assert!(parse_boolean("boolean=true\n"));
        assert!(parse_boolean("boolean=true"));

        assert!(!parse_boolean("boolean=false\n"));
        assert!(!parse_boolean("garbage"));
        assert!(!parse_boolean(""));
        assert!(!parse_boolean("boolean=TRUE\n"));
    }

    #[test]
    fn attribute_block_pairs_names_positionally_and_orders_roles() {
        let body = "userdetails.role=admin\n\
                    userdetails.attribute.name=cn\n\
                    userdetails.attribute.value=Joe Blow\n\
                    userdetails.role=users\n";

        let record = parse_attributes(body).unwrap();
        assert_eq!(record.roles, vec!["admin", "users"]);
        assert_eq!(record.attribute("cn"), Some("Joe Blow"));
        assert_eq!(record.attributes.len(), 1);
    }

    #[test]
    fn attribute_block_skips_lines_without_separator() {
        let body = "token.id=ignored\n\
                    \n\
                    not a key value line\n\
                    userdetails.attribute.name=uid\n\
                    userdetails.attribute.value=joeblow\n";

        let record = parse_attributes(body).unwrap();
        assert!(record.roles.is_empty());
        assert_eq!(record.attribute("uid"), Some("joeblow"));
    }

    #[test]
    fn attribute_block_keeps_duplicate_roles_in_order() {
        let body = "userdetails.role=a\nuserdetails.role=b\nuserdetails.role=a\n";
        let record = parse_attributes(body).unwrap();
        assert_eq!(record.roles, vec!["a", "b", "a"]);
    }

    #[test]
    fn attribute_block_last_write_wins_on_repeated_names() {
        let body = "userdetails.attribute.name=mail\n\
                    userdetails.attribute.value=old@example.com\n\
                    userdetails.attribute.name=mail\n\
                    userdetails.attribute.value=new@example.com\n";

        let record = parse_attributes(body).unwrap();
        assert_eq!(record.attribute("mail"), Some("new@example.com"));
    }

    #[test]
    fn attribute_block_handles_crlf_endings() {
        let body = "userdetails.role=admin\r\n\
                    userdetails.attribute.name=cn\r\n\
                    userdetails.attribute.value=Joe Blow\r\n";

        let record = parse_attributes(body).unwrap();
        assert_eq!(record.roles, vec!["admin"]);
        assert_eq!(record.attribute("cn"), Some("Joe Blow"));
    }

    #[test]
    fn dangling_attribute_name_is_a_parse_failure() {
        let body = "userdetails.role=admin\nuserdetails.attribute.name=cn";
        let err = parse_attributes(body).unwrap_err();
        assert_eq!(
            err,
            ParseError::DanglingAttributeName {
                name: "cn".to_string()
            }
        );
    }

    #[test]
    fn attribute_value_line_without_separator_is_a_parse_failure() {
        let body = "userdetails.attribute.name=cn\ncorrupt value line\n";
        let err = parse_attributes(body).unwrap_err();
        assert!(matches!(err, ParseError::MissingSeparator { .. }));
    }

    #[test]
    fn empty_attribute_block_yields_empty_record() {
        let record = parse_attributes("").unwrap();
        assert!(record.roles.is_empty());
        assert!(record.attributes.is_empty());
    }

    #[test]
    fn string_list_preserves_order_and_duplicates() {
        let body = "string=iPlanetDirectoryPro\r\nstring=amlbcookie\r\n";
        assert_eq!(
            parse_string_list(body),
            vec!["iPlanetDirectoryPro", "amlbcookie"]
        );

        let body = "string=a\nstring=a\nstring=b\n";
        assert_eq!(parse_string_list(body), vec!["a", "a", "b"]);
    }

    #[test]
    fn string_list_discards_blank_lines() {
        let body = "string=one\n\n\r\nstring=two\n";
        assert_eq!(parse_string_list(body), vec!["one", "two"]);
    }

    #[test]
    fn string_list_of_empty_body_is_empty() {
        assert!(parse_string_list("").is_empty());
    }

    #[test]
    fn parsers_are_idempotent_over_the_same_body() {
        let body = "userdetails.role=admin\n\
                    userdetails.attribute.name=cn\n\
                    userdetails.attribute.value=Joe Blow\n";
        assert_eq!(
            parse_attributes(body).unwrap(),
            parse_attributes(body).unwrap()
        );

        let list_body = "string=a\nstring=b\n";
        assert_eq!(parse_string_list(list_body), parse_string_list(list_body));

        let token_body = "token.id=ABC123\n";
        assert_eq!(
            parse_token(token_body).unwrap(),
            parse_token(token_body).unwrap()
        );
    }
}

use crate::{MAX_BLOCK_NAME_LEN, MAX_FIELD_NAME_LEN};

/// Ensure field identifiers are non-empty, ASCII, and within the maximum length.
pub(crate) fn validate_field_ident(ident: &str) -> Result<(), String> {
    validate_ident("field ident", ident, MAX_FIELD_NAME_LEN)
}

/// Ensure block logical names follow the same rules as field identifiers.
pub(crate) fn validate_block_ident(ident: &str) -> Result<(), String> {
    validate_ident("block ident", ident, MAX_BLOCK_NAME_LEN)
}

fn validate_ident(what: &str, ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err(format!("{what} is empty"));
    }
    if ident.len() > max_len {
        return Err(format!("{what} '{ident}' exceeds max length {max_len}"));
    }
    if !ident.is_ascii() {
        return Err(format!("{what} '{ident}' must be ASCII"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_non_ascii_idents() {
        assert!(validate_field_ident("").is_err(), "empty idents should fail");
        assert!(
            validate_field_ident("tété").is_err(),
            "non-ASCII idents should be rejected"
        );
    }

    #[test]
    fn rejects_over_long_idents() {
        let long = "a".repeat(MAX_FIELD_NAME_LEN + 1);
        assert!(validate_field_ident(&long).is_err());
        assert!(validate_block_ident(&long).is_err());
    }

    #[test]
    fn accepts_plain_identifier() {
        assert!(validate_field_ident("custom_ident").is_ok());
        assert!(validate_block_ident("pull_quote").is_ok());
    }
}

use embedview_common::ValidationError;

pub(super) fn require_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::EmptyInstanceId);
    }
    Ok(())
}

pub(super) fn require_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::EmptyUrl);
    }
    Ok(())
}

pub(super) fn require_script(script: &str) -> Result<(), ValidationError> {
    if script.is_empty() {
        return Err(ValidationError::EmptyScript);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(require_id(""), Err(ValidationError::EmptyInstanceId));
        assert_eq!(require_url(""), Err(ValidationError::EmptyUrl));
        assert_eq!(require_script(""), Err(ValidationError::EmptyScript));
    }

    #[test]
    fn non_empty_inputs_pass() {
        assert_eq!(require_id("classroom"), Ok(()));
        assert_eq!(require_url("https://example.com"), Ok(()));
        assert_eq!(require_script("1 + 1;"), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_non_empty() {
        // Only the empty string is rejected; " " is a (questionable but
        // accepted) identifier.
        assert_eq!(require_id(" "), Ok(()));
    }
}

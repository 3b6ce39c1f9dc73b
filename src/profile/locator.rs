use crate::error::ProfileError;

// Literal substring match, no line anchoring: a header spelled inside a value
// also passes. The decoder is authoritative.
pub fn ensure_section(raw: &[u8], name: &str) -> Result<(), ProfileError> {
    let header = format!("[{name}]");
    let needle = header.as_bytes();

    if !raw.windows(needle.len()).any(|window| window == needle) {
        return Err(ProfileError::NotFound(name.to_string()));
    }

    Ok(())
}

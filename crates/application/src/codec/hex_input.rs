use rrhex_domain::DecodeError;

/// Converts caller-supplied hex text into bytes.
///
/// ASCII whitespace anywhere and a leading `0x` are ignored; everything else
/// must be hex digits, and there must be an even number of them. A `0x`
/// prefix with no digits after it is rejected.
pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = input.trim();
    let prefixed = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X"));
    let body = prefixed.unwrap_or(trimmed);

    let digits: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if prefixed.is_some() && digits.is_empty() {
        return Err(DecodeError::InvalidHexData(
            "'0x' prefix with no hex digits".to_string(),
        ));
    }

    hex::decode(&digits).map_err(|e| {
        let reason = match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                format!("'{}' at digit {} is not a hex digit", c, index)
            }
            hex::FromHexError::OddLength => {
                format!("odd number of hex digits ({})", digits.len())
            }
            other => other.to_string(),
        };
        DecodeError::InvalidHexData(reason)
    })
}

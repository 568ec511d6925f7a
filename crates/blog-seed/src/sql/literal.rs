use crate::errors::GenerateError;

/// Quotes a value as a SQL string literal.
///
/// Embedded single quotes are doubled. Backslashes pass through unchanged,
/// which is correct when `standard_conforming_strings` is on (the
/// PostgreSQL default). NUL cannot appear in a PostgreSQL text value and is
/// rejected.
pub fn quote_literal(value: &str) -> Result<String, GenerateError> {
    if value.contains('\0') {
        return Err(GenerateError::InvalidLiteral(value.to_string()));
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' {
            quoted.push('\'');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    Ok(quoted)
}

use crate::ShellError;

/// Splits a command line into words.
///
/// Double or single quotes group whitespace into one word and are stripped; a backslash escapes
/// the next character.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();
    let mut quote = None::<char>;

    while let Some(ch) = chars.next() {
        match quote {
            Some(active) if ch == active => quote = None,
            Some(_) | None if ch == '\\' => {
                let Some(next) = chars.next() else {
                    return Err(ShellError::Usage("dangling escape sequence".to_string()));
                };
                current.push(next);
                in_word = true;
            }
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(ShellError::Usage("unterminated quoted string".to_string()));
    }
    if in_word {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Case-folded, trimmed comparison key.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `raw` has the shape of a note slug.
pub fn looks_like_slug(raw: &str) -> bool {
    let mut chars = raw.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

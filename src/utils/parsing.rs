use log::debug;

use crate::utils::errors::UtilsError;

/// Parse integers separated by commas and/or whitespace, e.g. `"1, 3,7 16"`.
///
/// # Errors
///
/// Returns an error if a token is not an integer or no numbers are present.
pub fn parse_number_list(input: &str) -> Result<Vec<i64>, UtilsError> {
    debug!("Parsing number list '{}'", input);

    let numbers = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| UtilsError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(UtilsError::EmptyNumberSet);
    }

    Ok(numbers)
}

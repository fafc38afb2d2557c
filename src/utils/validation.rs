use std::collections::HashSet;

use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the set is empty or any value occurs twice.
pub fn validate_number_set(numbers: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating number set: {:?}", numbers);

    if numbers.is_empty() {
        warn!("Number set is empty");
        return Err(UtilsError::EmptyNumberSet);
    }

    let mut seen = HashSet::with_capacity(numbers.len());
    if let Some(&duplicate) = numbers.iter().find(|&&n| !seen.insert(n)) {
        warn!("Number set repeats {}: {:?}", duplicate, numbers);
        return Err(UtilsError::DuplicateNumber(duplicate));
    }

    debug!("Number set validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if `count` is below `minimum` or larger than `available`.
pub fn validate_operand_count(
    count: usize,
    minimum: usize,
    available: usize,
) -> Result<(), UtilsError> {
    if count < minimum {
        warn!("Operand count {} is below {}", count, minimum);
        return Err(UtilsError::OperandCountTooSmall { count, minimum });
    }

    if count > available {
        warn!("Operand count {} exceeds {} numbers", count, available);
        return Err(UtilsError::OperandCountTooLarge { count, available });
    }

    Ok(())
}

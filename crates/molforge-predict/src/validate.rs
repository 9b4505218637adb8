//! Superficial SMILES validation.
//!
//! These checks gate every scoring entry point: a non-empty string, minimum
//! length, at least one atom letter, balanced parentheses, and the character
//! whitelist below. The string is never parsed chemically; a nonsense formula
//! that satisfies the five rules is accepted.

use thiserror::Error;

use molforge_common::MolforgeError;

/// Characters accepted in an input string.
pub const SMILES_ALPHABET: &str = "CNOFPSBrClI[]()=#+1234567890cnos-";

/// One variant per violated rule, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("SMILES string required")]
    Empty,

    #[error("Invalid SMILES: too short")]
    TooShort,

    #[error("Invalid SMILES: no atoms found")]
    NoAtoms,

    #[error("Invalid SMILES: unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("Invalid SMILES: character {0:?} outside the SMILES alphabet")]
    IllegalCharacter(char),
}

impl From<ValidationError> for MolforgeError {
    fn from(err: ValidationError) -> Self {
        MolforgeError::Validation(err.to_string())
    }
}

/// Check an input string against the five rules.
///
/// Callers are expected to trim surrounding whitespace first; interior
/// whitespace fails the alphabet check.
pub fn validate_smiles(smiles: &str) -> Result<(), ValidationError> {
    if smiles.is_empty() {
        return Err(ValidationError::Empty);
    }
    if smiles.chars().count() < 2 {
        return Err(ValidationError::TooShort);
    }
    if !smiles.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::NoAtoms);
    }
    let open = smiles.chars().filter(|&c| c == '(').count();
    let close = smiles.chars().filter(|&c| c == ')').count();
    if open != close {
        return Err(ValidationError::UnbalancedParentheses);
    }
    if let Some(bad) = smiles.chars().find(|&c| !SMILES_ALPHABET.contains(c)) {
        return Err(ValidationError::IllegalCharacter(bad));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_molecules() {
        assert_eq!(validate_smiles("CCO"), Ok(()));
        assert_eq!(validate_smiles("c1ccccc1"), Ok(()));
        assert_eq!(validate_smiles("CC(=O)Oc1ccccc1C(=O)O"), Ok(()));
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(validate_smiles(""), Err(ValidationError::Empty));
    }

    #[test]
    fn test_single_character_is_too_short() {
        assert_eq!(validate_smiles("A"), Err(ValidationError::TooShort));
        assert_eq!(validate_smiles("C"), Err(ValidationError::TooShort));
    }

    #[test]
    fn test_no_letters_means_no_atoms() {
        assert_eq!(validate_smiles("123"), Err(ValidationError::NoAtoms));
        assert_eq!(validate_smiles("=#"), Err(ValidationError::NoAtoms));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(
            validate_smiles("AB("),
            Err(ValidationError::UnbalancedParentheses)
        );
        assert_eq!(
            validate_smiles("CC(O))"),
            Err(ValidationError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_alphabet_whitelist() {
        // 'V' is not an accepted element symbol here
        assert_eq!(
            validate_smiles("INVALID"),
            Err(ValidationError::IllegalCharacter('V'))
        );
        assert_eq!(
            validate_smiles("CCO\u{1f9ec}"),
            Err(ValidationError::IllegalCharacter('\u{1f9ec}'))
        );
        assert_eq!(
            validate_smiles("CC O"),
            Err(ValidationError::IllegalCharacter(' '))
        );
    }

    #[test]
    fn test_messages_name_the_rule() {
        assert_eq!(ValidationError::Empty.to_string(), "SMILES string required");
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Invalid SMILES: too short"
        );
        assert_eq!(
            ValidationError::NoAtoms.to_string(),
            "Invalid SMILES: no atoms found"
        );
        assert_eq!(
            ValidationError::UnbalancedParentheses.to_string(),
            "Invalid SMILES: unbalanced parentheses"
        );
    }
}

//! Exit code constants for the themecfg CLI.
//!
//! - 0: Success
//! - 1: Usage error (bad arguments, refusing to overwrite)
//! - 2: Schema error (unknown/missing field, unrecognized enum value)
//! - 3: Value error (malformed color, length, glob, or plugin reference)
//! - 4: I/O error (config file unreadable or unwritable)
//! - 5: Serialization error (a loaded config could not be written out)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: bad arguments or an operation the user must confirm.
pub const USAGE_ERROR: i32 = 1;

/// Schema failure: the document does not have the shape of a theme config.
pub const SCHEMA_FAILURE: i32 = 2;

/// Value failure: a field is present but fails domain validation.
pub const VALUE_FAILURE: i32 = 3;

/// I/O failure: the config file could not be read or written.
pub const IO_FAILURE: i32 = 4;

/// Serialization failure: a loaded config could not be rendered as YAML or JSON.
pub const SERIALIZE_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USAGE_ERROR,
            SCHEMA_FAILURE,
            VALUE_FAILURE,
            IO_FAILURE,
            SERIALIZE_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}

//! Exit code constants for the coverkit CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid field, prompt failure)
//! - 2: Configuration failure (config file, environment file)
//! - 3: Schema failure (template missing, malformed, or incomplete)
//! - 4: Render failure (PDF backend or output write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, empty required field, or aborted prompt.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: unreadable config or environment file, invalid values.
pub const CONFIG_FAILURE: i32 = 2;

/// Schema failure: template resource missing, malformed, or missing a key.
pub const SCHEMA_FAILURE: i32 = 3;

/// Render failure: the document could not be rendered or written.
pub const RENDER_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_FAILURE,
            SCHEMA_FAILURE,
            RENDER_FAILURE,
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

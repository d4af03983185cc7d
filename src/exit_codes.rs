//! Exit code constants for the libchange CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Analysis failure (at least one commit could not be analyzed)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// One or more commits were marked "analysis unsuccessful".
pub const ANALYSIS_FAILURE: i32 = 2;

/// Git operation failure: unknown revision, not a repository, git missing.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, ANALYSIS_FAILURE, GIT_FAILURE];
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

//! Stable exit codes for the `collect` binary.

use crate::ops::OpError;

/// Command succeeded and output was written.
pub const OK: i32 = 0;
/// Usage error, unreadable input or config, malformed JSON, or a document of the wrong shape.
pub const INVALID: i32 = 1;
/// A transform rejected one of the input elements.
pub const TRANSFORM_FAILED: i32 = 2;

/// Map a command error to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<OpError>() {
        Some(OpError::Transform { .. }) => TRANSFORM_FAILED,
        _ => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn transform_errors_map_to_transform_failed() {
        let err: anyhow::Result<()> = Err(OpError::Transform {
            index: 3,
            reason: "boom".to_string(),
        })
        .context("apply");
        let err = err.expect_err("error");
        assert_eq!(for_error(&err), TRANSFORM_FAILED);
    }

    #[test]
    fn shape_and_io_errors_map_to_invalid() {
        let shape = anyhow::Error::new(OpError::NotAnArray { found: "object" });
        assert_eq!(for_error(&shape), INVALID);
        assert_eq!(for_error(&anyhow::anyhow!("read input")), INVALID);
    }
}

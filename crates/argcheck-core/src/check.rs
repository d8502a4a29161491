//! Integer argument checks
//!
//! Both checks apply the same acceptance rule: the reserved input is
//! rejected, everything else is shifted and returned. They differ only in
//! how much a rejection carries.

use crate::error::{ArgError, CheckError};

/// Input value every check refuses to process
pub const RESERVED_ARG: i64 = 42;

/// Offset applied to accepted inputs
const ACCEPT_SHIFT: i64 = 3;

/// Check `arg` and return it shifted on acceptance.
///
/// Rejections carry only a human-readable message.
pub fn check(arg: i64) -> Result<i64, CheckError> {
    if arg == RESERVED_ARG {
        return Err(CheckError::new(format!("can't work with {RESERVED_ARG}")));
    }
    Ok(arg + ACCEPT_SHIFT)
}

/// Same acceptance rule as [`check`], with the rejected argument kept on the
/// error for programmatic inspection.
pub fn check_detailed(arg: i64) -> Result<i64, ArgError> {
    if arg == RESERVED_ARG {
        return Err(ArgError::new(arg, "can't work with it"));
    }
    Ok(arg + ACCEPT_SHIFT)
}

//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Description                                  |
//! |------|----------------------------------------------|
//! | 0    | Success                                      |
//! | 1    | General error (unspecified)                  |
//! | 2    | CLI usage error (bad args, bad board spec)   |
//! | 3    | Designator not found                         |
//! | 4    | File error (missing, unreadable, no header)  |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments or invalid board spec.
pub const EXIT_USAGE: u8 = 2;

/// One or more requested designators were not in the file.
pub const EXIT_NOT_FOUND: u8 = 3;

/// File-level error: missing file, undetectable dialect, missing column.
pub const EXIT_FILE: u8 = 4;

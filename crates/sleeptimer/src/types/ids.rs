/*! Branded ID types. */

use derive_more::{Display, From, Into};

/// Process ID of a running application.
///
/// Signed because that is what the OS hands out (`pid_t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct ProcessId(pub i32);

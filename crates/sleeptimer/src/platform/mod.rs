/*!
Platform layer.

`CurrentPlatform` is the backend for the compilation target. Targets
without an accessibility backend get [`Unsupported`], which never finds a
running process, so menu presses degrade to no-ops.
*/

mod traits;
mod unsupported;

#[cfg(target_os = "macos")]
pub mod macos;

pub use traits::{ElementRef, Platform, RawValue};
pub use unsupported::{Unsupported, UnsupportedHandle};

/// Backend for the current target.
#[cfg(target_os = "macos")]
pub type CurrentPlatform = macos::MacOS;

/// Backend for the current target.
#[cfg(not(target_os = "macos"))]
pub type CurrentPlatform = Unsupported;

/// Element handle type of [`CurrentPlatform`].
pub type Handle = <CurrentPlatform as Platform>::Handle;

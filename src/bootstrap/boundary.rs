/// Whether renderer failures are contained and reported, or left to crash.
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use anyhow::anyhow;

thread_local! {
    /// Set while a `Contain` boundary runs its body on this thread.
    static CONTAINED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// How failures raised inside the renderer leave the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureBoundary {
    /// Errors and panics become an `Err` the launcher reports and exits on.
    Contain,
    /// Errors are re-raised as panics so a debugger stops at the failure.
    Propagate,
}

impl FailureBoundary {
    /// `Propagate` in builds with debug assertions, `Contain` otherwise.
    #[must_use]
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Propagate
        } else {
            Self::Contain
        }
    }

    /// Run `body` under this boundary.
    ///
    /// # Errors
    ///
    /// Under `Contain`, the body's error, or a panic converted to an error.
    ///
    /// # Panics
    ///
    /// Under `Propagate`, if the body returns an error.
    pub fn guard<F>(self, body: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<()>,
    {
        match self {
            Self::Propagate => {
                if let Err(err) = body() {
                    panic!("renderer failed: {err:?}");
                }
                Ok(())
            }
            Self::Contain => {
                install_quiet_hook();
                let _containment = Containment::enter();
                match panic::catch_unwind(AssertUnwindSafe(body)) {
                    Ok(result) => result,
                    Err(payload) => {
                        Err(anyhow!("renderer panicked: {}", panic_message(&*payload)))
                    }
                }
            }
        }
    }
}

/// Wrap the process panic hook once: panics on a contained thread are
/// logged at debug level instead of printing the default banner, all other
/// panics go to the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_contained() {
                log::debug!("contained renderer panic: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

fn is_contained() -> bool {
    CONTAINED.with(Cell::get)
}

/// Marks the current thread as contained until dropped.
struct Containment;

impl Containment {
    fn enter() -> Self {
        CONTAINED.with(|c| c.set(true));
        Self
    }
}

impl Drop for Containment {
    fn drop(&mut self) {
        CONTAINED.with(|c| c.set(false));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain_passes_success_through() {
        assert!(FailureBoundary::Contain.guard(|| Ok(())).is_ok());
    }

    #[test]
    fn test_contain_returns_error() {
        let err = FailureBoundary::Contain
            .guard(|| Err(anyhow!("swapchain lost")))
            .unwrap_err();
        assert_eq!(err.to_string(), "swapchain lost");
    }

    #[test]
    fn test_contain_catches_panic() {
        let err = FailureBoundary::Contain
            .guard(|| panic!("out of device memory"))
            .unwrap_err();
        assert_eq!(err.to_string(), "renderer panicked: out of device memory");
    }

    #[test]
    fn test_contain_catches_formatted_panic() {
        let err = FailureBoundary::Contain
            .guard(|| panic!("device {} lost", 3))
            .unwrap_err();
        assert_eq!(err.to_string(), "renderer panicked: device 3 lost");
    }

    #[test]
    fn test_contain_silences_only_while_body_runs() {
        assert!(!is_contained());
        FailureBoundary::Contain
            .guard(|| {
                assert!(is_contained());
                Ok(())
            })
            .unwrap();
        assert!(!is_contained());
    }

    #[test]
    fn test_containment_cleared_after_panic() {
        let _ = FailureBoundary::Contain.guard(|| panic!("lost surface"));
        assert!(!is_contained());
    }

    #[test]
    fn test_propagate_does_not_silence() {
        FailureBoundary::Propagate
            .guard(|| {
                assert!(!is_contained());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_propagate_passes_success_through() {
        assert!(FailureBoundary::Propagate.guard(|| Ok(())).is_ok());
    }

    #[test]
    #[should_panic(expected = "renderer failed")]
    fn test_propagate_panics_on_error() {
        let _ = FailureBoundary::Propagate.guard(|| Err(anyhow!("swapchain lost")));
    }

    #[test]
    fn test_for_build_matches_profile() {
        let expected = if cfg!(debug_assertions) {
            FailureBoundary::Propagate
        } else {
            FailureBoundary::Contain
        };
        assert_eq!(FailureBoundary::for_build(), expected);
    }
}

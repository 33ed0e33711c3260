use std::sync::atomic::{AtomicBool, Ordering};

/// Third-party scroll-reveal library. The only contract is a single,
/// parameterless initialization at load time.
pub trait ScrollReveal {
    fn init(&self) -> anyhow::Result<()>;
}

/// True for the first caller only.
#[inline]
pub fn first_start(started: &AtomicBool) -> bool {
    !started.swap(true, Ordering::SeqCst)
}

/// Initialize scroll animations; a failure is logged and otherwise ignored.
pub fn init_scroll_reveal<S: ScrollReveal + ?Sized>(animator: &S) -> bool {
    match animator.init() {
        Ok(()) => {
            log::info!("scroll animations initialized");
            true
        }
        Err(e) => {
            log::warn!("scroll animations unavailable: {:?}", e);
            false
        }
    }
}

use std::time::Instant;

use log::debug;

/// Runs `f` on the calling thread and logs how long it took.
pub fn run_blocking<F, T>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    debug!("{label} finished in {:?}", started.elapsed());
    result
}

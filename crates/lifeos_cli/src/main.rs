//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifeos_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use lifeos_core::Store;

fn main() {
    let store = Store::with_system_clock();
    println!("lifeos_core version={}", lifeos_core::core_version());
    println!(
        "lifeos_core profile level={} title={}",
        store.state().profile.level,
        store.state().profile.title
    );
}

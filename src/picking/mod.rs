//! Pointer picking against hotspot volumes.

pub mod hit_tester;

pub use hit_tester::HitTester;

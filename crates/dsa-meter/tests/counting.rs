use std::sync::{Mutex, MutexGuard};

use meter::{counting, measure, CountingAllocator, HeapProbe, Meter, ProbeKind};

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator::system();

const MIB: usize = 1 << 20;

// The counters are process-wide; keep the big allocations from overlapping.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    counting::mark_installed();
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn installed_allocator_is_detected() {
    let _guard = serial();
    let _warmup = vec![0u8; 16];
    assert!(counting::is_active());
    assert_eq!(Meter::detect().probe().kind(), ProbeKind::Allocator);
}

#[test]
fn retained_allocation_shows_up() {
    let _guard = serial();
    let meter = Meter::detect();
    let measured = meter
        .measure_value(|| Ok::<_, ()>(vec![7u8; 4 * MIB]))
        .unwrap();
    assert_eq!(measured.value.len(), 4 * MIB);
    // Only the rough size is reliable.
    assert!(measured.delta >= (2 * MIB) as i64, "delta {}", measured.delta);
}

#[test]
fn released_allocation_roughly_cancels_out() {
    let _guard = serial();
    let delta = measure(|| {
        let scratch = vec![1u64; MIB];
        drop(scratch);
        Ok::<_, ()>(())
    })
    .unwrap();
    assert!(delta < MIB as i64, "delta {delta}");
}

#[test]
fn failing_operation_yields_no_measurement() {
    let _guard = serial();
    let result = measure(|| -> Result<(), String> {
        let _partial = vec![0u8; MIB];
        Err("parse failure".to_string())
    });
    assert_eq!(result, Err("parse failure".to_string()));
}

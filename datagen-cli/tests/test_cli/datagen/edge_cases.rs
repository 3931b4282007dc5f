#[cfg(target_os = "linux")]
use std::fs::OpenOptions;
#[cfg(target_os = "linux")]
use std::process::Stdio;

#[cfg(target_os = "linux")]
use crate::add_test;
#[cfg(target_os = "linux")]
use crate::common::Fixture;

/// Opens `/dev/full`, where every write fails with `ENOSPC`.
#[cfg(target_os = "linux")]
fn full_device() -> Stdio {
    let file = OpenOptions::new().write(true).open("/dev/full").unwrap();
    Stdio::from(file)
}

// Test that a failed write is fatal and reported
#[cfg(target_os = "linux")]
add_test!(write_failure_exits_non_zero, async {
    let fixture = Fixture::new();

    let output = fixture.run(&[], full_device()).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("datagen: write error:"));
});

// Test that -q suppresses the diagnostic but not the exit status
#[cfg(target_os = "linux")]
add_test!(quiet_write_failure, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-q"], full_device()).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
});

// Test that verbose diagnostics precede the write error
#[cfg(target_os = "linux")]
add_test!(verbose_write_failure, async {
    let fixture = Fixture::new();

    let output = fixture.run(&["-v", "-s", "1"], full_device()).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("datagen: chunk order "));
    assert!(output.stderr.contains("datagen: write error:"));
    assert!(!output.stderr.contains("wrote"));
});

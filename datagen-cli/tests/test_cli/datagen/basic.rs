use datagen_core::{concatenate, generate, RngSource};

use crate::add_test;
use crate::common::{contains_all_windows, decreasing_jump, mid_jump, sorted_windows, Fixture};
use crate::{CHUNK, FIXTURE_LEN};

// Test that a bare invocation writes exactly one fixture
add_test!(writes_fixed_length, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo(&[]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout_raw.len(), FIXTURE_LEN);
    assert!(output.stderr.is_empty());
});

// Test that both jump sequences survive chunk by chunk
add_test!(jump_sequences_survive_in_chunks, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo(&[]).await;
    assert!(output.status.success());
    assert!(contains_all_windows(&output.stdout_raw, &decreasing_jump(), CHUNK));
    assert!(contains_all_windows(&output.stdout_raw, &mid_jump(), CHUNK));
});

// Test that the output windows are the input windows, rearranged
add_test!(output_is_chunk_permutation, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo(&["--seed", "2024"]).await;
    assert!(output.status.success());

    let reference = concatenate(&mut RngSource::seeded(2024));
    assert_eq!(
        sorted_windows(&output.stdout_raw, CHUNK),
        sorted_windows(&reference, CHUNK)
    );
});

// Test that the binary writes exactly what the library generates
add_test!(matches_library_output, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo(&["-s", "17"]).await;
    assert!(output.status.success());

    let dataset = generate(&mut RngSource::seeded(17)).unwrap();
    assert!(output.stdout_raw == dataset.as_bytes());
});

// Test redirecting the fixture to a file
add_test!(redirect_to_file, async {
    const FILE_NAME: &str = "data";

    let fixture = Fixture::new();

    let output = fixture.run_cargo_to_file(&[], FILE_NAME).await;
    assert!(output.status.success());
    assert!(fixture.file_exists(FILE_NAME));

    let data = fixture.read(FILE_NAME);
    assert_eq!(data.len(), FIXTURE_LEN);
    assert!(contains_all_windows(&data, &decreasing_jump(), CHUNK));
});

// Test that unseeded runs are not reproducible
add_test!(unseeded_runs_differ, async {
    let fixture = Fixture::new();

    let first = fixture.run_cargo(&[]).await;
    let second = fixture.run_cargo(&[]).await;
    assert!(first.status.success());
    assert!(second.status.success());
    assert!(first.stdout_raw != second.stdout_raw);
});

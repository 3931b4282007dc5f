/// Expected decreasing-jump sequence: `k / 2` at even `k`, `255 - (k - 1) / 2` at odd `k`.
pub fn decreasing_jump() -> Vec<u8> {
    (0..256usize)
        .map(|k| {
            if k % 2 == 0 {
                (k / 2) as u8
            } else {
                (255 - (k - 1) / 2) as u8
            }
        })
        .collect()
}

/// Expected mid-jump sequence: `k / 2` at even `k`, `128 + (k - 1) / 2` at odd `k`.
pub fn mid_jump() -> Vec<u8> {
    (0..256usize)
        .map(|k| {
            if k % 2 == 0 {
                (k / 2) as u8
            } else {
                (128 + (k - 1) / 2) as u8
            }
        })
        .collect()
}

/// Splits `bytes` into sequential `size`-byte windows, sorted for set comparison.
pub fn sorted_windows(bytes: &[u8], size: usize) -> Vec<Vec<u8>> {
    let mut windows: Vec<Vec<u8>> = bytes.chunks(size).map(<[u8]>::to_vec).collect();
    windows.sort_unstable();
    windows
}

/// Every window of `sequence` must appear among the windows of `output`.
pub fn contains_all_windows(output: &[u8], sequence: &[u8], size: usize) -> bool {
    let windows: Vec<&[u8]> = output.chunks(size).collect();
    sequence.chunks(size).all(|window| windows.contains(&window))
}

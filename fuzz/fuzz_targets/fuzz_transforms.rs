#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strkit::{
    GrowableString, GrowthOptions, c_len, clean_display_name, clean_display_name_into,
    copy_bounded, copy_bounded_fits, parse_bool, parse_hex32, parse_hex64, sanitized_apostrophes,
    to_lower_into, to_upper_into,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a [u8],
    size: u8,
    parts: Vec<String>,
    slack: u8,
    limit: Option<u16>,
}

/// Every fixed-buffer routine must stay inside `size` bytes and terminate.
fn fixed_buffers(text: &[u8], size: usize) {
    let mut buf = vec![0xaa_u8; size + 4];
    let (dest, guard) = buf.split_at_mut(size);

    let written = copy_bounded(dest, Some(text)).len();
    assert!(size == 0 || dest[written] == 0);
    assert_eq!(copy_bounded_fits(dest, Some(text)), size > 0 && c_len(text) < size);

    let upper = to_upper_into(Some(text), dest).len();
    assert!(size == 0 || dest[upper] == 0);
    let lower = to_lower_into(Some(text), dest).len();
    assert_eq!(upper, lower);

    let cleaned = clean_display_name_into(text, dest).to_vec();
    assert!(clean_display_name(text).starts_with(&cleaned));

    assert!(guard.iter().all(|&b| b == 0xaa), "wrote past {size} bytes");
}

fn parsers(text: &[u8]) {
    let narrow = parse_hex32(text);
    let wide = parse_hex64(text);
    assert_eq!(u64::from(narrow), wide & u64::from(u32::MAX));
    let _ = parse_bool(text);

    let once = sanitized_apostrophes(text);
    assert_eq!(sanitized_apostrophes(&once), once);
}

fn appends(parts: &[String], slack: u8, limit: Option<u16>) {
    let mut buf = GrowableString::with_options(GrowthOptions {
        slack: usize::from(slack),
        max_capacity: limit.map(usize::from),
        ..GrowthOptions::default()
    });
    let mut expected = String::new();
    for part in parts {
        let before = buf.capacity();
        if buf.append(format_args!("{part}")).is_ok() {
            expected.push_str(part);
        }
        assert!(buf.capacity() >= before);
        assert_eq!(buf.as_str(), expected);
    }
}

fuzz_target!(|input: Input<'_>| {
    fixed_buffers(input.text, usize::from(input.size));
    parsers(input.text);
    appends(&input.parts, input.slack, input.limit);
});

#![expect(missing_docs)]

use core::fmt::Write;

use strkit::{
    CaseScratch, GrowableString, GrowthOptions, clean_display_name, parse_bool, parse_hex32,
    parse_hex64, sanitized_apostrophes, to_upper,
};

fn render_names(raw: &[&str]) -> String {
    let mut out = String::new();
    for name in raw {
        writeln!(
            out,
            "{name} -> [{}] / [{}]",
            clean_display_name(name),
            sanitized_apostrophes(name)
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_name_cleanup() {
    let raw = ["Big_Bad_Orc#1", "a_`gnoll`_pup", "O'Brien", "Vah'Shir_00"];

    insta::assert_snapshot!(render_names(&raw), @r#"
    Big_Bad_Orc#1 -> [Big Bad Orc] / [Big_Bad_Orc#1]
    a_`gnoll`_pup -> [a `gnoll` pup] / [a_`gnoll`_pup]
    O'Brien -> [OBrien] / [O_Brien]
    Vah'Shir_00 -> [VahShir ] / [Vah_Shir_00]
    "#);
}

#[test]
fn snapshot_token_parsing() {
    let tokens = ["0x1A", "1A", "0xZZ", "YES", "Off", "42", "abc"];
    let mut out = String::new();
    for token in tokens {
        write!(
            out,
            "{token}:{}:{}:{} ",
            parse_hex32(token),
            parse_hex64(token),
            parse_bool(token)
        )
        .unwrap();
    }

    insta::assert_snapshot!(out.trim_end(), @"0x1A:26:26:false 1A:0:0:true 0xZZ:0:0:false YES:0:0:true Off:0:0:false 42:0:0:true abc:0:0:false");
}

#[test]
fn snapshot_append_growth() {
    let mut buf = GrowableString::with_options(GrowthOptions {
        append_capacity: 16,
        slack: 4,
        ..GrowthOptions::default()
    });
    let mut log = String::new();
    for word in ["alpha", "beta", "gamma", "delta"] {
        let len = strkit::append_any_length_string!(buf, "{word};").unwrap();
        writeln!(log, "{len} {}", buf.capacity()).unwrap();
    }

    insta::assert_snapshot!(log, @r"
    6 16
    11 16
    17 22
    23 28
    ");
    assert_eq!(buf.as_str(), "alpha;beta;gamma;delta;");
}

#[test]
fn scratch_and_owned_case_agree() {
    let mut scratch = CaseScratch::default();
    let owned = to_upper(Some(b"warg rider".as_slice())).unwrap();
    assert_eq!(scratch.upper(b"warg rider"), owned.as_slice());
}

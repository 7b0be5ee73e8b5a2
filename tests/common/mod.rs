#![allow(dead_code)]

use epcqr::domain::iban::mod97;
use epcqr::PaymentInput;
use rand::Rng;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds an IBAN with correct check digits for `country` and `bban`.
pub fn iban_with_check_digits(country: &str, bban: &str) -> String {
    let rem = mod97(&format!("{country}00{bban}"));
    format!("{country}{:02}{bban}", 98 - rem)
}

/// Splits an IBAN into the usual four-character print groups.
pub fn print_form(iban: &str) -> String {
    iban.as_bytes()
        .chunks(4)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

const NAME_CHARS: &[char] = &[
    'a', 'b', 'c', 'J', 'P', 'é', 'ñ', 'ü', ' ', '-', '.', '&', '#', 'ß', 'Ø',
];

fn random_text<R: Rng>(rng: &mut R, max: usize) -> String {
    let len = rng.gen_range(1..=max);
    // A leading non-blank character keeps trimming from emptying the text.
    std::iter::once('x')
        .chain((1..len).map(|_| NAME_CHARS[rng.gen_range(0..NAME_CHARS.len())]))
        .collect()
}

/// A payment whose every field is valid under the strict IBAN tier.
pub fn random_payment<R: Rng>(rng: &mut R) -> PaymentInput {
    let bban: String = (0..18).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect();
    let iban = iban_with_check_digits("DE", &bban);
    let iban = if rng.gen_bool(0.5) { print_form(&iban) } else { iban };

    let cents: u64 = rng.gen_range(1..=99_999_999_999);
    let separator = if rng.gen_bool(0.5) { '.' } else { ',' };
    let amount = format!("{}{separator}{:02}", cents / 100, cents % 100);

    let reference = if rng.gen_bool(0.3) {
        String::new()
    } else {
        random_text(rng, 140)
    };

    PaymentInput::new(random_text(rng, 70), iban, amount, reference)
}

/// Writes `lines` to a temporary CSV file.
pub fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

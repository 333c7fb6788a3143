//! Pattern expansion over arbitrary literal text.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use fake::Fake;
use fake::faker::lorem::raw::Words;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use locale_faker::{Placeholders, bothify, expand, seeded_rng, to_regex};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use rstest::{fixture, rstest};

#[fixture]
fn rng() -> ChaCha8Rng {
    seeded_rng(8080)
}

/// Builds a template from generated words with `#` runs between them.
fn random_template(rng: &mut ChaCha8Rng) -> String {
    let words: Vec<String> = Words(EN, 1..6).fake_with_rng(rng);
    let mut template = String::new();
    for word in words {
        template.push_str(&word);
        let digits = rng.random_range(0..4);
        template.push_str(&"#".repeat(digits));
        template.push(' ');
    }
    template
}

#[rstest]
fn literal_characters_keep_their_positions(mut rng: ChaCha8Rng) {
    for _ in 0..1000 {
        let template = random_template(&mut rng);
        let expanded = expand(&template, &mut rng);

        assert_eq!(expanded.chars().count(), template.chars().count());
        for (source, produced) in template.chars().zip(expanded.chars()) {
            if source == '#' {
                assert!(produced.is_ascii_digit(), "{template} -> {expanded}");
            } else {
                assert_eq!(source, produced, "{template} -> {expanded}");
            }
        }
    }
}

#[rstest]
fn expansions_match_the_rendered_regex(mut rng: ChaCha8Rng) {
    for _ in 0..1000 {
        let template = random_template(&mut rng);
        let shape = Regex::new(&format!("^{}$", to_regex(&template, Placeholders::Digits)))
            .expect("valid regex");
        let expanded = expand(&template, &mut rng);
        assert!(shape.is_match(&expanded), "{expanded} does not match {shape}");
    }
}

#[rstest]
fn names_without_placeholders_pass_through(mut rng: ChaCha8Rng) {
    for _ in 0..1000 {
        let first: String = FirstName(EN).fake_with_rng(&mut rng);
        let last: String = LastName(EN).fake_with_rng(&mut rng);
        let name = format!("{first} {last}");
        assert_eq!(expand(&name, &mut rng), name);
    }
}

#[rstest]
fn bothify_fills_names_with_codes(mut rng: ChaCha8Rng) {
    let shape = Regex::new(r"^.+ [A-Z]{2}-[0-9]{4}$").expect("valid regex");
    for _ in 0..1000 {
        let first: String = FirstName(EN).fake_with_rng(&mut rng);
        let template = format!("{first} ??-####");
        let code = bothify(&template, &mut rng);
        assert!(code.starts_with(&first), "{code} lost its name");
        assert!(shape.is_match(&code), "unexpected code {code}");
    }
}

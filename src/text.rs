//! String helpers: repetition, numbers as English words, and a/an selection.

use crate::error::ArgumentError;

const VOWELS: [char; 24] = [
    'a', 'e', 'i', 'o', 'u', 'y', 'æ', 'ø', 'å', 'ä', 'ö', 'ü', //
    'A', 'E', 'I', 'O', 'U', 'Y', 'Æ', 'Ø', 'Å', 'Ä', 'Ö', 'Ü',
];

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Index i names 1000^i.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// `s` repeated `times` times. `times` must be at least one.
pub fn repeat(s: &str, times: usize) -> Result<String, ArgumentError> {
    if times == 0 {
        return Err(ArgumentError::invalid("times", "must be at least 1"));
    }
    Ok(s.repeat(times))
}

/// `ch` repeated `times` times. `times` must be at least one.
pub fn repeat_char(ch: char, times: usize) -> Result<String, ArgumentError> {
    if times == 0 {
        return Err(ArgumentError::invalid("times", "must be at least 1"));
    }
    Ok(std::iter::repeat(ch).take(times).collect())
}

/// `number` spelled out in English words, e.g. `-1042` becomes
/// `"minus one thousand forty two"`.
pub fn letter_string(number: i64) -> String {
    if number == 0 {
        return "zero".to_string();
    }

    let mut words: Vec<&'static str> = Vec::new();
    if number < 0 {
        words.push("minus");
    }

    // unsigned_abs keeps i64::MIN representable
    let mut rest = number.unsigned_abs();
    let mut groups: Vec<(u16, usize)> = Vec::new();
    let mut scale = 0;
    while rest > 0 {
        let group = (rest % 1000) as u16;
        if group != 0 {
            groups.push((group, scale));
        }
        rest /= 1000;
        scale += 1;
    }

    for (group, scale) in groups.into_iter().rev() {
        push_group(&mut words, group);
        if scale > 0 {
            words.push(SCALES[scale]);
        }
    }

    words.join(" ")
}

/// Words for `1..=999`.
fn push_group(words: &mut Vec<&'static str>, group: u16) {
    let hundreds = usize::from(group / 100);
    let rest = usize::from(group % 100);

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push("hundred");
    }
    if rest >= 20 {
        words.push(TENS[rest / 10]);
        if rest % 10 != 0 {
            words.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        words.push(ONES[rest]);
    }
}

/// Whether `ch` is a vowel, counting `y` and the Nordic/German vowels.
#[inline]
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// The indefinite article for `word`: `"an"` if it starts with a vowel,
/// otherwise `"a"`. The check is purely orthographic.
pub fn a_an(word: &str) -> Result<&'static str, ArgumentError> {
    let first = word
        .chars()
        .next()
        .ok_or_else(|| ArgumentError::invalid("word", "must not be empty"))?;
    Ok(if is_vowel(first) { "an" } else { "a" })
}

//! Candidate-key generation
//!
//! Upstream vouchers spell the same field many ways (`PartyLedgerName`,
//! `partyledgername`, `PARTYLEDGERNAME`, `party_ledger_name`). A segment is
//! resolved by trying an ordered list of spellings:
//!
//! 1. the segment text exactly as written
//! 2. the bare name (sigil removed), then its lower, UPPER, camelCase,
//!    PascalCase and snake_case forms
//! 3. each of the above prefixed with the `$` sigil
//!
//! Duplicates are dropped, keeping the first occurrence.

use voucher_formula::grammar::{strip_sigil, SIGIL};

/// Split a name into words on `_`, `-`, spaces and case boundaries.
///
/// `PartyLedgerName` → `Party Ledger Name`, `XMLValue` → `XML Value`,
/// `bill_allocations` → `bill allocations`. An all-caps name is one word.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn to_lower_case(name: &str) -> String {
    name.to_lowercase()
}

pub fn to_upper_case(name: &str) -> String {
    name.to_uppercase()
}

/// `party_ledger_name` → `partyLedgerName`
pub fn to_camel_case(name: &str) -> String {
    let words = split_words(name);
    let mut out = String::with_capacity(name.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

/// `party_ledger_name` → `PartyLedgerName`
pub fn to_pascal_case(name: &str) -> String {
    split_words(name).iter().map(|w| capitalize(w)).collect()
}

/// `PartyLedgerName` → `party_ledger_name`
pub fn to_snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn push_unique(keys: &mut Vec<String>, key: String) {
    if !key.is_empty() && !keys.contains(&key) {
        keys.push(key);
    }
}

/// Ordered, de-duplicated spellings to try for `segment`
pub fn candidate_keys(segment: &str) -> Vec<String> {
    let bare = strip_sigil(segment);

    let styled = [
        bare.to_string(),
        to_lower_case(bare),
        to_upper_case(bare),
        to_camel_case(bare),
        to_pascal_case(bare),
        to_snake_case(bare),
    ];

    let mut keys = Vec::with_capacity(1 + styled.len() * 2);
    push_unique(&mut keys, segment.to_string());
    for key in &styled {
        push_unique(&mut keys, key.clone());
    }
    for key in &styled {
        if !key.is_empty() {
            push_unique(&mut keys, format!("{}{}", SIGIL, key));
        }
    }

    keys
}

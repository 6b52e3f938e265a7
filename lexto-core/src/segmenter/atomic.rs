//! Atomic-run pre-pass
//!
//! Splits a sentence into stretches that are either one indivisible word
//! (a number such as `11.4`, a run of Latin letters, a run of whitespace) or
//! free text handed to the lattice search.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunClass {
    Digit,
    Latin,
    Space,
    Other,
}

impl RunClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            RunClass::Digit
        } else if ch.is_ascii_alphabetic() {
            RunClass::Latin
        } else if ch.is_whitespace() {
            RunClass::Space
        } else {
            RunClass::Other
        }
    }
}

/// A byte range of the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Piece {
    pub start: usize,
    pub end: usize,
    /// Emit as a single word without dictionary matching
    pub atomic: bool,
}

/// Split `text` into alternating atomic runs and free stretches
///
/// Pieces are contiguous and cover `text` exactly.
pub(super) fn split_runs(text: &str) -> Vec<Piece> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces = Vec::new();
    let mut k = 0;

    while k < chars.len() {
        let start = chars[k].0;
        let class = RunClass::of(chars[k].1);
        k += 1;

        while k < chars.len() {
            let ch = chars[k].1;
            let continues = match class {
                RunClass::Digit => {
                    ch.is_ascii_digit()
                        || (matches!(ch, '.' | ',')
                            && chars.get(k + 1).is_some_and(|(_, n)| n.is_ascii_digit()))
                }
                _ => RunClass::of(ch) == class,
            };
            if !continues {
                break;
            }
            k += 1;
        }

        let end = chars.get(k).map_or(text.len(), |(offset, _)| *offset);
        pieces.push(Piece {
            start,
            end,
            atomic: class != RunClass::Other,
        });
    }

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> Vec<(&str, bool)> {
        split_runs(text)
            .into_iter()
            .map(|piece| (&text[piece.start..piece.end], piece.atomic))
            .collect()
    }

    #[test]
    fn test_number_with_separators() {
        assert_eq!(
            render("ถึง 11.4 ล้าน"),
            vec![
                ("ถึง", false),
                (" ", true),
                ("11.4", true),
                (" ", true),
                ("ล้าน", false)
            ]
        );
        assert_eq!(render("1,000,000"), vec![("1,000,000", true)]);
    }

    #[test]
    fn test_trailing_dot_not_part_of_number() {
        assert_eq!(render("42."), vec![("42", true), (".", false)]);
    }

    #[test]
    fn test_latin_run() {
        assert_eq!(
            render("ใช้Luceneค้นหา"),
            vec![("ใช้", false), ("Lucene", true), ("ค้นหา", false)]
        );
    }

    #[test]
    fn test_empty() {
        assert!(split_runs("").is_empty());
    }
}

//! Double Metaphone phonetic coding.
//!
//! Each word is reduced to two short codes describing how it is likely
//! pronounced: a primary one and a secondary one for words with a second
//! plausible pronunciation (`"Smith"` -> `SM0` / `XMT`). Two words sound alike
//! when any of their codes coincide.
//!
//! The encoder walks a single buffer of uppercase ASCII letters padded with
//! sentinel spaces on both sides, so every lookbehind and lookahead is a plain
//! index and the end of the word reads as a space.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Longest code kept for either pronunciation.
pub const MAX_CODE_LEN: usize = 4;

/// Sentinel cells on each side of the word; covers the widest rule context.
const PAD: usize = 6;
const SENTINEL: char = ' ';

/// Primary and secondary pronunciation codes of one word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneticCode {
    pub primary: String,
    pub secondary: String,
}

impl PhoneticCode {
    /// Whether the word had nothing to encode (no Latin letters).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|code| !code.is_empty())
    }
}

/// Encode a word with Double Metaphone.
///
/// Accents are stripped and anything other than ASCII letters is ignored, so a
/// word with no Latin letters encodes to empty codes.
///
/// ```
/// use cb_match::phonetic::encode;
///
/// let code = encode("Schmidt");
/// assert_eq!(code.primary, "XMT");
/// assert_eq!(code.secondary, "SMT");
/// ```
pub fn encode(word: &str) -> PhoneticCode {
    Encoder::new(word).run()
}

/// Whether any code of `word1` equals any code of `word2`.
///
/// Empty codes never match, so two digit strings are not considered to sound
/// alike.
pub fn phonetic_match(word1: &str, word2: &str) -> bool {
    let code1 = encode(word1);
    let code2 = encode(word2);
    code1.codes().any(|a| code2.codes().any(|b| a == b))
}

struct Encoder {
    buf: Vec<char>,
    len: usize,
    current: usize,
    slavo_germanic: bool,
    primary: String,
    secondary: String,
}

impl Encoder {
    fn new(word: &str) -> Self {
        let letters = word
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect::<Vec<_>>();
        let len = letters.len();

        let mut buf = vec![SENTINEL; PAD];
        buf.extend(letters);
        buf.extend(std::iter::repeat_n(SENTINEL, PAD));

        let mut encoder = Self {
            buf,
            len,
            current: 0,
            slavo_germanic: false,
            primary: String::with_capacity(MAX_CODE_LEN),
            secondary: String::with_capacity(MAX_CODE_LEN),
        };
        encoder.slavo_germanic = encoder.contains_letter('W')
            || encoder.contains_letter('K')
            || encoder.contains_text("CZ")
            || encoder.contains_text("WITZ");
        encoder
    }

    fn run(mut self) -> PhoneticCode {
        if self.len == 0 {
            return PhoneticCode::default();
        }

        if self.starts_with(&["GN", "KN", "PN", "WR", "PS"]) {
            self.current = 1;
        }

        while self.current < self.len && !self.is_complete() {
            let step = match self.at(0) {
                'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                    if self.current == 0 {
                        self.add("A");
                    }
                    1
                }
                'B' => {
                    self.add("P");
                    if self.at(1) == 'B' { 2 } else { 1 }
                }
                'C' => self.handle_c(),
                'D' => self.handle_d(),
                'F' => {
                    self.add("F");
                    if self.at(1) == 'F' { 2 } else { 1 }
                }
                'G' => self.handle_g(),
                'H' => self.handle_h(),
                'J' => self.handle_j(),
                'K' => {
                    self.add("K");
                    if self.at(1) == 'K' { 2 } else { 1 }
                }
                'L' => self.handle_l(),
                'M' => {
                    self.add("M");
                    let silent_b = self.matches(-1, &["UMB"])
                        && (self.current + 1 == self.len - 1 || self.matches(2, &["ER"]));
                    if silent_b || self.at(1) == 'M' { 2 } else { 1 }
                }
                'N' => {
                    self.add("N");
                    if self.at(1) == 'N' { 2 } else { 1 }
                }
                'P' => {
                    if self.at(1) == 'H' {
                        self.add("F");
                        2
                    } else {
                        self.add("P");
                        if self.matches(1, &["P", "B"]) { 2 } else { 1 }
                    }
                }
                'Q' => {
                    self.add("K");
                    if self.at(1) == 'Q' { 2 } else { 1 }
                }
                'R' => self.handle_r(),
                'S' => self.handle_s(),
                'T' => self.handle_t(),
                'V' => {
                    self.add("F");
                    if self.at(1) == 'V' { 2 } else { 1 }
                }
                'W' => self.handle_w(),
                'X' => self.handle_x(),
                'Z' => self.handle_z(),
                _ => 1,
            };
            self.current += step;
        }

        self.primary.truncate(MAX_CODE_LEN);
        self.secondary.truncate(MAX_CODE_LEN);

        PhoneticCode {
            primary: self.primary,
            secondary: self.secondary,
        }
    }

    // --- Buffer access ---

    /// Letter at `offset` from the cursor; sentinel outside the word.
    fn at(&self, offset: isize) -> char {
        self.char_at_word_index(self.current as isize + offset)
    }

    fn char_at_word_index(&self, index: isize) -> char {
        usize::try_from(index + PAD as isize)
            .ok()
            .and_then(|i| self.buf.get(i))
            .copied()
            .unwrap_or(SENTINEL)
    }

    /// Whether any pattern appears starting at `offset` from the cursor.
    fn matches(&self, offset: isize, patterns: &[&str]) -> bool {
        self.matches_at(self.current as isize + offset, patterns)
    }

    fn matches_at(&self, index: isize, patterns: &[&str]) -> bool {
        patterns.iter().any(|pattern| {
            pattern
                .chars()
                .enumerate()
                .all(|(i, c)| self.char_at_word_index(index + i as isize) == c)
        })
    }

    fn starts_with(&self, patterns: &[&str]) -> bool {
        self.matches_at(0, patterns)
    }

    fn contains_letter(&self, letter: char) -> bool {
        self.word().contains(&letter)
    }

    fn contains_text(&self, text: &str) -> bool {
        let needle = text.chars().collect::<Vec<_>>();
        self.word().windows(needle.len()).any(|w| w == needle.as_slice())
    }

    fn word(&self) -> &[char] {
        &self.buf[PAD..PAD + self.len]
    }

    fn is_vowel(c: char) -> bool {
        matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
    }

    fn is_last(&self) -> bool {
        self.current == self.len - 1
    }

    // --- Output ---

    fn add(&mut self, code: &str) {
        self.add_both(code, code);
    }

    fn add_both(&mut self, primary: &str, secondary: &str) {
        push_capped(&mut self.primary, primary);
        push_capped(&mut self.secondary, secondary);
    }

    fn is_complete(&self) -> bool {
        self.primary.len() >= MAX_CODE_LEN && self.secondary.len() >= MAX_CODE_LEN
    }

    // --- Letter rules ---

    fn handle_c(&mut self) -> usize {
        if self.is_germanic_ach() {
            self.add("K");
            2
        } else if self.current == 0 && self.matches(0, &["CAESAR"]) {
            self.add("S");
            2
        } else if self.matches(0, &["CH"]) {
            self.handle_ch()
        } else if self.matches(0, &["CZ"]) && !self.matches(-2, &["WICZ"]) {
            self.add_both("S", "X");
            2
        } else if self.matches(1, &["CIA"]) {
            self.add("X");
            3
        } else if self.matches(0, &["CC"]) && !(self.current == 1 && self.at(-1) == 'M') {
            self.handle_cc()
        } else if self.matches(0, &["CK", "CG", "CQ"]) {
            self.add("K");
            2
        } else if self.matches(0, &["CI", "CE", "CY"]) {
            if self.matches(0, &["CIO", "CIE", "CIA"]) {
                self.add_both("S", "X");
            } else {
                self.add("S");
            }
            2
        } else {
            self.add("K");
            if self.matches(1, &[" C", " Q", " G"]) {
                3
            } else if self.matches(1, &["C", "K", "Q"]) && !self.matches(1, &["CE", "CI"]) {
                2
            } else {
                1
            }
        }
    }

    /// `CHIA`, or a Germanic `ACH` not followed by `I`/`E` ("Bacher", "Macher").
    fn is_germanic_ach(&self) -> bool {
        if self.matches(0, &["CHIA"]) {
            return true;
        }
        if self.current <= 1 || Self::is_vowel(self.at(-2)) || !self.matches(-1, &["ACH"]) {
            return false;
        }
        let next = self.at(2);
        (next != 'I' && next != 'E') || self.matches(-2, &["BACHER", "MACHER"])
    }

    fn handle_ch(&mut self) -> usize {
        if self.current > 0 && self.matches(0, &["CHAE"]) {
            self.add_both("K", "X");
        } else if self.current == 0
            && (self.matches(1, &["HARAC", "HARIS"]) || self.matches(1, &["HOR", "HYM", "HIA", "HEM"]))
            && !self.starts_with(&["CHORE"])
        {
            self.add("K");
        } else if self.starts_with(&["SCH"])
            || self.matches(-2, &["ORCHES", "ARCHIT", "ORCHID"])
            || self.matches(2, &["T", "S"])
            || ((self.matches(-1, &["A", "O", "U", "E"]) || self.current == 0)
                && (self.matches(2, &["L", "R", "N", "M", "B", "H", "F", "V", "W", " "])
                    || self.current + 1 == self.len - 1))
        {
            self.add("K");
        } else if self.current > 0 {
            if self.starts_with(&["MC"]) {
                self.add("K");
            } else {
                self.add_both("X", "K");
            }
        } else {
            self.add("X");
        }
        2
    }

    fn handle_cc(&mut self) -> usize {
        if self.matches(2, &["I", "E", "H"]) && !self.matches(2, &["HU"]) {
            if (self.current == 1 && self.at(-1) == 'A') || self.matches(-1, &["UCCEE", "UCCES"]) {
                self.add("KS");
            } else {
                self.add("X");
            }
            3
        } else {
            self.add("K");
            2
        }
    }

    fn handle_d(&mut self) -> usize {
        if self.matches(0, &["DG"]) {
            if self.matches(2, &["I", "E", "Y"]) {
                self.add("J");
                3
            } else {
                self.add("TK");
                2
            }
        } else if self.matches(0, &["DT", "DD"]) {
            self.add("T");
            2
        } else {
            self.add("T");
            1
        }
    }

    fn handle_g(&mut self) -> usize {
        let next = self.at(1);
        if next == 'H' {
            self.handle_gh()
        } else if next == 'N' {
            if self.current == 1 && Self::is_vowel(self.at(-1)) && !self.slavo_germanic {
                self.add_both("KN", "N");
            } else if !self.matches(2, &["EY"]) && !self.slavo_germanic {
                self.add_both("N", "KN");
            } else {
                self.add("KN");
            }
            2
        } else if self.matches(1, &["LI"]) && !self.slavo_germanic {
            self.add_both("KL", "L");
            2
        } else if self.current == 0
            && (next == 'Y'
                || self.matches(
                    1,
                    &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
                ))
        {
            self.add_both("K", "J");
            2
        } else if (self.matches(1, &["ER"]) || next == 'Y')
            && !self.starts_with(&["DANGER", "RANGER", "MANGER"])
            && !self.matches(-1, &["E", "I"])
            && !self.matches(-1, &["RGY", "OGY"])
        {
            self.add_both("K", "J");
            2
        } else if self.matches(1, &["E", "I", "Y"]) || self.matches(-1, &["AGGI", "OGGI"]) {
            if self.starts_with(&["SCH"]) || self.matches(1, &["ET"]) {
                self.add("K");
            } else if self.matches(1, &["IER "]) {
                self.add("J");
            } else {
                self.add_both("J", "K");
            }
            2
        } else if next == 'G' {
            self.add("K");
            2
        } else {
            self.add("K");
            1
        }
    }

    fn handle_gh(&mut self) -> usize {
        if self.current > 0 && !Self::is_vowel(self.at(-1)) {
            self.add("K");
        } else if self.current == 0 {
            if self.at(2) == 'I' {
                self.add("J");
            } else {
                self.add("K");
            }
        } else if (self.current > 1 && self.matches(-2, &["B", "H", "D"]))
            || (self.current > 2 && self.matches(-3, &["B", "H", "D"]))
            || (self.current > 3 && self.matches(-4, &["B", "H"]))
        {
            // silent, as in "bough" or "daughter"
        } else if self.current > 2
            && self.at(-1) == 'U'
            && self.matches(-3, &["C", "G", "L", "R", "T"])
        {
            self.add("F");
        } else if self.at(-1) != 'I' {
            self.add("K");
        }
        2
    }

    fn handle_h(&mut self) -> usize {
        if (self.current == 0 || Self::is_vowel(self.at(-1))) && Self::is_vowel(self.at(1)) {
            self.add("H");
            2
        } else {
            1
        }
    }

    fn handle_j(&mut self) -> usize {
        if self.matches(0, &["JOSE"]) || self.starts_with(&["SAN "]) {
            if (self.current == 0 && self.at(4) == SENTINEL) || self.starts_with(&["SAN "]) {
                self.add("H");
            } else {
                self.add_both("J", "H");
            }
            return 1;
        }

        if self.current == 0 {
            self.add_both("J", "A");
        } else if Self::is_vowel(self.at(-1))
            && !self.slavo_germanic
            && matches!(self.at(1), 'A' | 'O')
        {
            self.add_both("J", "H");
        } else if self.is_last() {
            self.add_both("J", "");
        } else if !self.matches(1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
            && !self.matches(-1, &["S", "K", "L"])
        {
            self.add("J");
        }

        if self.at(1) == 'J' { 2 } else { 1 }
    }

    fn handle_l(&mut self) -> usize {
        if self.at(1) != 'L' {
            self.add("L");
            return 1;
        }

        let last = self.len as isize - 1;
        let spanish_ll = (self.current + 3 == self.len
            && self.matches(-1, &["ILLO", "ILLA", "ALLE"]))
            || ((self.matches_at(last - 1, &["AS", "OS"]) || self.matches_at(last, &["A", "O"]))
                && self.matches(-1, &["ALLE"]));
        if spanish_ll {
            self.add_both("L", "");
        } else {
            self.add("L");
        }
        2
    }

    fn handle_r(&mut self) -> usize {
        if self.is_last()
            && !self.slavo_germanic
            && self.matches(-2, &["IE"])
            && !self.matches(-4, &["ME", "MA"])
        {
            self.add_both("", "R");
        } else {
            self.add("R");
        }
        if self.at(1) == 'R' { 2 } else { 1 }
    }

    fn handle_s(&mut self) -> usize {
        if self.matches(-1, &["ISL", "YSL"]) {
            1
        } else if self.current == 0 && self.matches(0, &["SUGAR"]) {
            self.add_both("X", "S");
            1
        } else if self.matches(0, &["SH"]) {
            if self.matches(1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                self.add("S");
            } else {
                self.add("X");
            }
            2
        } else if self.matches(0, &["SIO", "SIA"]) {
            if self.slavo_germanic {
                self.add("S");
            } else {
                self.add_both("S", "X");
            }
            3
        } else if (self.current == 0 && self.matches(1, &["M", "N", "L", "W"]))
            || self.at(1) == 'Z'
        {
            self.add_both("S", "X");
            if self.at(1) == 'Z' { 2 } else { 1 }
        } else if self.matches(0, &["SC"]) {
            self.handle_sc()
        } else {
            if self.is_last() && self.matches(-2, &["AI", "OI"]) {
                self.add_both("", "S");
            } else {
                self.add("S");
            }
            if self.matches(1, &["S", "Z"]) { 2 } else { 1 }
        }
    }

    fn handle_sc(&mut self) -> usize {
        if self.at(2) == 'H' {
            if self.matches(3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                if self.matches(3, &["ER", "EN"]) {
                    self.add_both("X", "SK");
                } else {
                    self.add("SK");
                }
            } else if self.current == 0 && !Self::is_vowel(self.at(3)) && self.at(3) != 'W' {
                self.add_both("X", "S");
            } else {
                self.add("X");
            }
        } else if self.matches(2, &["I", "E", "Y"]) {
            self.add("S");
        } else {
            self.add("SK");
        }
        3
    }

    fn handle_t(&mut self) -> usize {
        if self.matches(0, &["TION", "TIA", "TCH"]) {
            self.add("X");
            3
        } else if self.matches(0, &["TH", "TTH"]) {
            if self.matches(2, &["OM", "AM"]) || self.starts_with(&["SCH"]) {
                self.add("T");
            } else {
                self.add_both("0", "T");
            }
            2
        } else {
            self.add("T");
            if self.matches(1, &["T", "D"]) { 2 } else { 1 }
        }
    }

    fn handle_w(&mut self) -> usize {
        if self.matches(0, &["WR"]) {
            self.add("R");
            return 2;
        }

        if self.current == 0 && (Self::is_vowel(self.at(1)) || self.matches(0, &["WH"])) {
            if Self::is_vowel(self.at(1)) {
                self.add_both("A", "F");
            } else {
                self.add("A");
            }
        }

        if (self.is_last() && Self::is_vowel(self.at(-1)))
            || self.matches(-1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || self.starts_with(&["SCH"])
        {
            self.add_both("", "F");
            1
        } else if self.matches(0, &["WICZ", "WITZ"]) {
            self.add_both("TS", "FX");
            4
        } else {
            1
        }
    }

    fn handle_x(&mut self) -> usize {
        if self.current == 0 {
            self.add("S");
            return 1;
        }

        let silent_french = self.is_last()
            && (self.matches(-3, &["IAU", "EAU"]) || self.matches(-2, &["AU", "OU"]));
        if !silent_french {
            self.add("KS");
        }
        if self.matches(1, &["C", "X"]) { 2 } else { 1 }
    }

    fn handle_z(&mut self) -> usize {
        if self.at(1) == 'H' {
            self.add("J");
            return 2;
        }

        if self.matches(1, &["ZO", "ZI", "ZA"])
            || (self.slavo_germanic && self.current > 0 && self.at(-1) != 'T')
        {
            self.add_both("S", "TS");
        } else {
            self.add("S");
        }
        if self.at(1) == 'Z' { 2 } else { 1 }
    }
}

fn push_capped(code: &mut String, symbols: &str) {
    for symbol in symbols.chars() {
        if code.len() >= MAX_CODE_LEN {
            break;
        }
        code.push(symbol);
    }
}

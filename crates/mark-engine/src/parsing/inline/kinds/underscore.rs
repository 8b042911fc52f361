/// Underscore marks used for emphasis (`_`) and strong emphasis (`__`).
pub struct Underscore;

impl Underscore {
    pub const MARK: u8 = b'_';
    /// Run length that denotes strong emphasis.
    pub const STRONG_RUN: usize = 2;

    /// Letters and digits. The underscore itself never counts as a word
    /// character for boundary classification.
    pub fn is_word_char(c: char) -> bool {
        c.is_alphanumeric()
    }
}

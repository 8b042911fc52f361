/// Backslash escape: `\_`, `\__` and `` \` `` render as the bare mark characters.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';
}

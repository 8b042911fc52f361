/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline markup is resolved inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

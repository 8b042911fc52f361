pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use parsing::{
    TranslateOptions, paragraphs::ParagraphBreak, render_paragraph, translate_to_html,
    translate_to_html_with,
};

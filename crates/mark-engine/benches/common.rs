// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(paragraphs: usize) -> String {
    let base = "Plain words with _emphasis_, __strong__ and `code_spans` mixed in.\n\
                snake_case_names, 1_000_000 and an escaped \\_mark\\_ stay literal.\n\n\
                Nesting __goes _two_ deep__ while `unmatched ticks and _stray marks linger.\n\n";
    base.repeat(paragraphs.div_ceil(2))
}

#[allow(dead_code)]
pub fn generate_long_paragraph(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        match i % 5 {
            0 => content.push_str("_word_ "),
            1 => content.push_str("__word__ "),
            2 => content.push_str("`word` "),
            3 => content.push_str("under_scored "),
            _ => content.push_str("word "),
        }
    }
    content
}

use anyhow::Result;
use mark_config::Config;
use mark_engine::{io, translate_to_html_with};
use std::{env, path::PathBuf, process};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("mark");

    if args.len() != 2 {
        eprintln!("Usage: {program_name} <input-file>");
        eprintln!("Writes the HTML translation to <input-file>.html");
        process::exit(1);
    }
    let input = PathBuf::from(&args[1]);

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load_or_default() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::debug!("Using config: {config:?}");

    let source = match io::read_source(&input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read input '{}': {e}", input.display());
            process::exit(1);
        }
    };

    let html = translate_to_html_with(&source, &config.translate_options());
    let output = io::output_path_for(&input, &config.output_extension);
    io::write_html(&output, &html)?;

    log::info!(
        "Translated {} ({} bytes) to {} ({} bytes)",
        input.display(),
        source.len(),
        output.display(),
        html.len()
    );
    println!("{}", output.display());

    Ok(())
}

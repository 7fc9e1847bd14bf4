use paj_ajap::{Translator, load_store_from_file};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example usage: paj-ajap the boys are happy
    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        eprintln!("Usage: paj-ajap <text...>");
        std::process::exit(1);
    }

    // PAJ_AJAP_VOCABULARY points at a JSON table that replaces the embedded one
    let translator = match std::env::var("PAJ_AJAP_VOCABULARY") {
        Ok(path) => Translator::new(load_store_from_file(Path::new(&path))?),
        Err(_) => Translator::default(),
    };

    let result = translator.translate(&text);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

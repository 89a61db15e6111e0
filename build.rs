use std::env;
use std::error::Error;
use std::path::Path;

use syntect::dumps::dump_to_uncompressed_file;
use syntect::parsing::SyntaxSet;

/// Grammars in this folder are compiled in alongside syntect's defaults
const CUSTOM_SYNTAXES: &str = "assets/syntaxes";

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed={}", CUSTOM_SYNTAXES);

    let out_dir = env::var("OUT_DIR")?;
    let dump_path = Path::new(&out_dir).join("syntax_set.packdump");

    // Lines are fed to the parser with their terminators attached
    let mut builder = SyntaxSet::load_defaults_newlines().into_builder();
    let custom = Path::new(CUSTOM_SYNTAXES);
    if custom.is_dir() {
        builder.add_from_folder(custom, true)?;
    }

    dump_to_uncompressed_file(&builder.build(), &dump_path)?;
    Ok(())
}

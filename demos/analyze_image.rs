//! Example: Analyze a single image file
//!
//! Decodes an image, runs the classification pipeline, and prints the full
//! result as JSON. Pass a path to an image file, and optionally a path to a
//! JSON disease library to use instead of the built-in one.
//!
//! ```text
//! cargo run --example analyze_image -- leaf.jpg [library.json]
//! ```

use leafscan::{classify_bytes, AnalysisError, ClassifyConfig, DiseaseLibrary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path = args
        .next()
        .ok_or("usage: analyze_image <image> [library.json]")?;

    let library = match args.next() {
        Some(path) => DiseaseLibrary::from_json_reader(std::fs::File::open(path)?)?,
        None => DiseaseLibrary::builtin(),
    };

    let bytes = std::fs::read(&image_path)?;
    let config = ClassifyConfig::default();

    match classify_bytes(&bytes, &library, &config) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Err(AnalysisError::NotALeaf { green_ratio }) => {
            eprintln!(
                "{}: does not look like a leaf (green ratio {:.3})",
                image_path, green_ratio
            );
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

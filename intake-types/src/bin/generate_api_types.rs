use intake_types::typescript_gen::EXPORTED_TYPES;
use intake_types::generate_typescript_definitions;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output = generate_typescript_definitions(EXPORTED_TYPES)?;

    let output_dir = Path::new("api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, format!("{}\n", output))?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

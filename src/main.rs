use clap::Parser;
use img_manifest::{output, scan};
use std::path::Path;

#[derive(Parser)]
#[command(name = "img-manifest")]
#[command(about = "Builds a JSON manifest of the images under img/")]
#[command(long_about = "\
Builds a JSON manifest of the images under img/

Scans img/ recursively and writes the relative path of every recognized
image (jpg, jpeg, png, gif, webp, bmp; matched case-insensitively) to
img/manifest.json as a sorted JSON array:

  img/
  ├── cats/
  │   ├── cat1.png             # → \"cats/cat1.png\"
  │   └── cat2.png             # → \"cats/cat2.png\"
  ├── dogs/
  │   └── dog1.jpg             # → \"dogs/dog1.jpg\"
  ├── sea.webp                 # → \"sea.webp\"
  └── notes.txt                # not an image, ignored

The manifest is rebuilt from scratch on every run. If img/ does not exist
it is created, and no manifest is written until images are added.")]
#[command(version)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Cli::parse();

    let root = Path::new(scan::IMAGE_ROOT);
    if !root.is_dir() {
        std::fs::create_dir_all(root)?;
        output::print_created_notice(root);
        return Ok(());
    }

    let manifest = scan::scan(root)?;
    let json = serde_json::to_string_pretty(&manifest)?;
    let manifest_path = scan::manifest_path(root);
    std::fs::write(&manifest_path, json)?;
    output::print_summary(&manifest, &manifest_path);

    Ok(())
}

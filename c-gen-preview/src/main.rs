#![cfg(feature = "generator")]

use std::error::Error;
use std::path::PathBuf;

use c_gen_preview::frames::preview_frames;
use c_gen_preview::render_frame;

fn workspace_root() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().map(PathBuf::from).unwrap_or(manifest)
}

fn main() -> Result<(), Box<dyn Error>> {
    let assets = workspace_root().join("assets");
    std::fs::create_dir_all(&assets)?;

    for frame in preview_frames() {
        let image = render_frame(&frame);
        let path = assets.join(frame.file_name());
        image.save(&path)?;
        println!(
            "wrote {} ({} host, {}x{})",
            path.display(),
            frame.host.name(),
            frame.size[0],
            frame.size[1]
        );
    }

    Ok(())
}

//! `fileops is-media` – classify names by media extension.

use anyhow::Result;
use fileops_core::media;

pub fn run_is_media(names: &[String]) -> Result<()> {
    for name in names {
        println!("{}\t{}", media::is_image_or_video(name), name);
    }
    Ok(())
}

use argh::FromArgs;
use std::path::PathBuf;

use sharpview_image::{Image, ImageSize};
use sharpview_viewer::SharpenViewer;

#[derive(FromArgs)]
/// Sharpen an image with the viewer pipeline and write the result
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to write the sharpened image to
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// sharpening strength in [0, 100]
    #[argh(option, short = 's', default = "100")]
    strength: u8,

    /// kernel radius in [1, 5]
    #[argh(option, short = 'r', default = "1")]
    radius: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image
    let rgb = image::open(&args.image_path)?.into_rgb8();
    let size = ImageSize {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    };
    let frame = Image::<u8, 3>::new(size, rgb.into_raw())?;

    // run the viewer pipeline, capturing the rendered frame
    let mut rendered = None;
    let mut viewer = SharpenViewer::new(|f: &Image<u8, 3>| rendered = Some(f.clone()));
    viewer.set_radius(args.radius)?;
    viewer.set_strength(args.strength)?;
    viewer.load_image(frame)?;
    drop(viewer);

    let rendered = rendered.ok_or("no frame was rendered")?;

    // write the result
    let out = image::RgbImage::from_raw(
        size.width as u32,
        size.height as u32,
        rendered.into_vec(),
    )
    .ok_or("failed to assemble the output image")?;
    out.save(&args.output_path)?;

    log::info!("wrote sharpened image to {}", args.output_path.display());

    Ok(())
}

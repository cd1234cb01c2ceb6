use argh::FromArgs;
use std::path::PathBuf;

use binmorph::{io::functional as F, process, PipelineConfig, StageImage};

#[derive(FromArgs)]
/// Show every binary morphology operation of an image in Rerun
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// gray values above this become foreground (default: 127)
    #[argh(option, short = 't', default = "127")]
    threshold: u8,

    /// skeleton fragments smaller than this are pruned (default: 5)
    #[argh(option, short = 'p', default = "5")]
    prune_min_size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let gray = F::read_image_gray8(args.image_path)?;
    let resolution: [u32; 2] = gray.size().into();

    let config = PipelineConfig {
        threshold: args.threshold,
        prune_min_size: args.prune_min_size,
        ..Default::default()
    };
    let results = process(&gray, &config)?;

    // create a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Binary Morphology").spawn()?;

    rec.log(
        "input",
        &rerun::Image::from_elements(
            gray.as_slice(),
            resolution,
            rerun::ColorModel::L,
        ),
    )?;

    for (stage, image) in results.iter() {
        let color_model = match image {
            StageImage::Binary(_) => rerun::ColorModel::L,
            StageImage::Color(_) => rerun::ColorModel::RGB,
        };
        rec.log(
            stage.file_stem(),
            &rerun::Image::from_elements(
                &image.to_bytes(),
                resolution,
                color_model,
            ),
        )?;
    }

    Ok(())
}

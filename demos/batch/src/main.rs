use argh::FromArgs;
use std::path::PathBuf;

use binmorph::{
    imgproc::{label::Connectivity, parallel::ExecutionStrategy},
    io::functional as F,
    process, PipelineConfig, Stage, StageImage,
};

#[derive(FromArgs)]
/// Run every binary morphology operation on an image and save the results as PNG
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the outputs are written (default: output)
    #[argh(option, short = 'o', default = "PathBuf::from(\"output\")")]
    output_dir: PathBuf,

    /// JSON file with pipeline parameters
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// gray values above this become foreground
    #[argh(option, short = 't')]
    threshold: Option<u8>,

    /// skeleton fragments smaller than this are pruned
    #[argh(option)]
    prune_min_size: Option<usize>,

    /// seed of the component colors
    #[argh(option)]
    color_seed: Option<u64>,

    /// label components with 4-connectivity instead of 8
    #[argh(switch)]
    four_connected: bool,

    /// process rows in parallel
    #[argh(switch)]
    parallel: bool,

    /// also save the hole filled image
    #[argh(switch)]
    with_hole_filled: bool,
}

fn load_config(args: &Args) -> Result<PipelineConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => PipelineConfig::default(),
    };

    // command line flags take precedence over the file
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(prune_min_size) = args.prune_min_size {
        config.prune_min_size = prune_min_size;
    }
    if let Some(color_seed) = args.color_seed {
        config.color_seed = color_seed;
    }
    if args.four_connected {
        config.connectivity = Connectivity::Four;
    }
    if args.parallel {
        config.strategy = ExecutionStrategy::ParallelRows;
    }

    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();
    let config = load_config(&args)?;
    log::info!("config: {config:?}");

    // read the image
    let gray = F::read_image_gray8(&args.image_path)?;

    let mut results = process(&gray, &config)?;
    if !args.with_hole_filled {
        results = results.without(Stage::HoleFilled);
    }

    std::fs::create_dir_all(&args.output_dir)?;
    for (stage, image) in results.iter() {
        let file_path = args.output_dir.join(format!("{}.png", stage.file_stem()));
        match image {
            StageImage::Binary(mask) => F::write_image_png_gray8(&file_path, &mask.to_gray())?,
            StageImage::Color(rgb) => F::write_image_png_rgb8(&file_path, rgb)?,
        }
        println!("{:<22} -> {}", stage.name(), file_path.display());
    }

    Ok(())
}

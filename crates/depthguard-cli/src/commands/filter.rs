use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use depthguard_core::frame::FrameMetadata;
use depthguard_core::io::{load_depth_png, save_depth_png, save_mask_png, DepthImage16};
use depthguard_core::node::DepthFilterNode;
use depthguard_core::pipeline::{FilterConfig, FilterOutput, SharedConfig, StructShape};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::summary::{print_filter_summary, print_frame_result};

#[derive(Clone, Copy, ValueEnum)]
pub enum ShapeArg {
    Rectangle,
    Cross,
    Ellipse,
}

impl From<ShapeArg> for StructShape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Rectangle => StructShape::Rectangle,
            ShapeArg::Cross => StructShape::Cross,
            ShapeArg::Ellipse => StructShape::Ellipse,
        }
    }
}

#[derive(Args)]
pub struct FilterArgs {
    /// Input depth images (8- or 16-bit grayscale PNG)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Filter config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Laplacian kernel size (odd; even values keep the previous size)
    #[arg(long)]
    pub kernel: Option<u32>,

    /// Absolute edge response above which a pixel is discarded
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Structuring element shape used to broaden edges
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Structuring element size in pixels
    #[arg(long)]
    pub dilate: Option<u32>,

    /// Disable the neighborhood similarity rescue pass
    #[arg(long)]
    pub no_similarity: bool,

    /// Maximum depth difference for a neighbor to count as similar
    #[arg(long)]
    pub distance: Option<f32>,

    /// Number of similar neighbors (0-8) that must be exceeded to rescue a pixel
    #[arg(long)]
    pub similar_count: Option<u32>,

    /// Pass images through unfiltered
    #[arg(long)]
    pub disable: bool,

    /// Also write the trust mask as <name>_mask.png
    #[arg(long)]
    pub debug_mask: bool,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let base = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid filter config")?
    } else {
        FilterConfig::default()
    };

    let shared = SharedConfig::new(base);
    let accepted = shared.reconfigure(apply_overrides(shared.snapshot(), args));
    print_filter_summary(&accepted, &args.output);

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let node = DepthFilterNode::new(shared);
    let pb = ProgressBar::new(args.files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Filtering");

    let mut results = Vec::with_capacity(args.files.len());
    let mut failures = 0usize;
    for (i, path) in args.files.iter().enumerate() {
        match filter_file(&node, path, i as u64, args) {
            Ok(output) => results.push((path.clone(), output)),
            Err(e) => {
                failures += 1;
                pb.println(format!("Skipping {}: {e:#}", path.display()));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    println!();
    for (path, output) in &results {
        print_frame_result(path, output);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} file(s) could not be filtered", failures, args.files.len());
    }
    println!("\nOutput saved to {}", args.output.display());
    Ok(())
}

fn apply_overrides(mut config: FilterConfig, args: &FilterArgs) -> FilterConfig {
    if args.disable {
        config.enabled = false;
    }
    if let Some(kernel) = args.kernel {
        config.laplace_kernel_size = kernel;
    }
    if let Some(threshold) = args.threshold {
        config.filter_threshold = threshold;
    }
    if let Some(shape) = args.shape {
        config.struct_shape = shape.into();
    }
    if let Some(size) = args.dilate {
        config.dilate_struct_size = size;
    }
    if args.no_similarity {
        config.similarity_enabled = false;
    }
    if let Some(distance) = args.distance {
        config.distance_threshold = distance;
    }
    if let Some(count) = args.similar_count {
        config.similar_count_threshold = count;
    }
    config
}

fn filter_file(
    node: &DepthFilterNode,
    path: &Path,
    sequence: u64,
    args: &FilterArgs,
) -> Result<FilterOutput> {
    let mut frame =
        load_depth_png(path).with_context(|| format!("Failed to load {}", path.display()))?;
    frame.metadata = FrameMetadata {
        sequence,
        timestamp_us: None,
    };

    let output = node.process_frame(&frame);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("depth");

    let depth_path = args.output.join(format!("{stem}_filtered.png"));
    save_depth_png(&DepthImage16::from_frame(output.frame()), &depth_path)
        .with_context(|| format!("Failed to write {}", depth_path.display()))?;
    debug!(path = %depth_path.display(), "Wrote filtered depth image");

    if args.debug_mask {
        if let Some(mask) = output.mask() {
            let mask_path = args.output.join(format!("{stem}_mask.png"));
            save_mask_png(mask, &mask_path)
                .with_context(|| format!("Failed to write {}", mask_path.display()))?;
        }
    }

    Ok(output)
}

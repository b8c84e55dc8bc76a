use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use grayconv as gc;
use grayconv::filters;
use image::ImageReader;
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

mod structs;

const SYNTHETIC_SEED: u64 = 42;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Cli {
    /// Path to source image file, or to a directory to convolve every
    /// image inside it; omitted, a synthetic random image of side
    /// `--size` is used instead
    #[clap(value_parser)]
    source_path: Option<PathBuf>,

    /// Path to result image file (or to the result directory in
    /// directory mode) [default in directory mode: <source>/out]
    #[clap(value_parser)]
    destination_path: Option<PathBuf>,

    /// Parallelization strategy used to convolve the image
    #[clap(short, long, value_enum, default_value_t = structs::EngineMode::Grid)]
    mode: structs::EngineMode,

    /// Side of the synthetic source image, in pixels
    #[clap(short, long, default_value_t = 1024)]
    size: u32,

    /// Name of convolution filter
    #[clap(short, long, default_value = "gaussian_blur_3x3")]
    filter: String,

    /// Tile side used by the "grid" mode
    #[clap(short, long, default_value_t = 128)]
    block_size: u32,

    /// Count of workers used by the "grid" mode
    /// [default: hardware thread count]
    #[clap(short = 'x', long)]
    x_workers: Option<usize>,

    /// Bias added to every output sample after filtering
    #[clap(long, default_value_t = 0.)]
    bias: f64,

    /// Append a row with per-phase timings to this CSV file
    #[clap(long)]
    csv: Option<PathBuf>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    convolve(&cli)
}

fn convolve(cli: &Cli) -> Result<()> {
    if let Some(source_path) = &cli.source_path {
        if source_path.is_dir() {
            return convolve_directory(cli, source_path);
        }
    }
    convolve_single(cli)
}

fn convolve_single(cli: &Cli) -> Result<()> {
    let (source_name, gray_image, load_ms, gray_ms) = open_source_image(cli)?;
    let (result, filter_ms) = run_engine(cli, &gray_image)?;

    let save_ms = if let Some(destination_path) = &cli.destination_path {
        save_result(result, destination_path)?
    } else {
        0
    };
    let total_ms = load_ms + gray_ms + filter_ms + save_ms;

    println!("=== MODE: {} ===", gc::Mode::from(cli.mode).as_str());
    print_timings([load_ms, gray_ms, filter_ms, save_ms, total_ms]);

    if let Some(csv_path) = &cli.csv {
        append_csv_row(
            csv_path,
            &source_name,
            [load_ms, gray_ms, filter_ms, save_ms, total_ms],
        )?;
    }
    Ok(())
}

/// Convolve every image of a directory with one engine and save the
/// results next to each other, one timing row per image.
fn convolve_directory(cli: &Cli, dir_in: &Path) -> Result<()> {
    let dir_out = cli
        .destination_path
        .clone()
        .unwrap_or_else(|| dir_in.join("out"));
    std::fs::create_dir_all(&dir_out)
        .with_context(|| format!("Failed to create result directory {:?}", dir_out))?;

    let mut source_paths: Vec<PathBuf> = std::fs::read_dir(dir_in)
        .with_context(|| format!("Failed to read source directory {:?}", dir_in))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .is_some_and(|name| !name.to_string_lossy().starts_with('.'))
        })
        .collect();
    source_paths.sort();
    if source_paths.is_empty() {
        warn!("No files in {:?}", dir_in);
        return Ok(());
    }

    for source_path in source_paths {
        let instant = Instant::now();
        let Ok(decoded) = ImageReader::open(&source_path).map(|reader| reader.decode()) else {
            continue;
        };
        let Ok(dynamic_image) = decoded else {
            debug!("Skipping undecodable file {:?}", source_path);
            continue;
        };
        let load_ms = instant.elapsed().as_millis();

        let instant = Instant::now();
        let Ok(gray_image) = gc::GrayImage::try_from(dynamic_image.to_luma8()) else {
            debug!("Skipping empty image {:?}", source_path);
            continue;
        };
        let gray_ms = instant.elapsed().as_millis();

        let (result, filter_ms) = run_engine(cli, &gray_image)?;

        let file_name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = source_path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_else(|| "png".to_owned());
        let destination_path = dir_out.join(format!("{stem}_out.{extension}"));
        let save_ms = save_result(result, &destination_path)?;
        let total_ms = load_ms + gray_ms + filter_ms + save_ms;

        println!("=== FILE: {file_name} ===");
        print_timings([load_ms, gray_ms, filter_ms, save_ms, total_ms]);

        if let Some(csv_path) = &cli.csv {
            append_csv_row(
                csv_path,
                &file_name,
                [load_ms, gray_ms, filter_ms, save_ms, total_ms],
            )?;
        }
    }
    Ok(())
}

fn run_engine(cli: &Cli, gray_image: &gc::GrayImage) -> Result<(gc::GrayImage, u128)> {
    let kernel = filters::by_name(&cli.filter).ok_or_else(|| {
        anyhow!(
            "Unknown filter {:?}, available: {}",
            cli.filter,
            filters::filter_names().join(", ")
        )
    })?;

    let x_workers = cli
        .x_workers
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()));
    let mode = gc::Mode::from(cli.mode);
    debug!(
        "Convolving {}x{} image with {:?} in {:?} mode",
        gray_image.width(),
        gray_image.height(),
        cli.filter,
        mode
    );

    let instant = Instant::now();
    let src_view = gray_image.view();
    let mut result = match mode {
        gc::Mode::Seq => gc::apply_seq(&src_view, &kernel)?,
        gc::Mode::Row => gc::apply_row(&src_view, &kernel)?,
        gc::Mode::Col => gc::apply_col(&src_view, &kernel)?,
        gc::Mode::Grid => gc::apply_grid(&src_view, &kernel, cli.block_size, x_workers)?,
        gc::Mode::Pix => gc::apply_pix(&src_view, &kernel)?,
    };
    if cli.bias != 0. {
        result = apply_bias(result, cli.bias)?;
    }
    Ok((result, instant.elapsed().as_millis()))
}

fn apply_bias(image: gc::GrayImage, bias: f64) -> Result<gc::GrayImage> {
    let width = image.width();
    let height = image.height();
    let buffer = image
        .into_vec()
        .into_iter()
        .map(|sample| (sample as f64 + bias).round().clamp(0., 255.) as u8)
        .collect();
    Ok(gc::GrayImage::from_vec_u8(width, height, buffer)?)
}

fn open_source_image(cli: &Cli) -> Result<(String, gc::GrayImage, u128, u128)> {
    if let Some(source_path) = &cli.source_path {
        debug!("Opening the source image {:?}", source_path);
        let instant = Instant::now();
        let dynamic_image = ImageReader::open(source_path)
            .with_context(|| format!("Failed to read source file from {:?}", source_path))?
            .decode()
            .with_context(|| "Failed to decode source image")?;
        let load_ms = instant.elapsed().as_millis();

        let instant = Instant::now();
        let luma = dynamic_image.to_luma8();
        let gray_image =
            gc::GrayImage::try_from(luma).with_context(|| "Source image has no pixels")?;
        let gray_ms = instant.elapsed().as_millis();

        let name = source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_path.display().to_string());
        Ok((name, gray_image, load_ms, gray_ms))
    } else {
        debug!("Generating a synthetic {0}x{0} source image", cli.size);
        let instant = Instant::now();
        let side = cli.size;
        let mut buffer = vec![0u8; side as usize * side as usize];
        StdRng::seed_from_u64(SYNTHETIC_SEED).fill_bytes(&mut buffer);
        let gray_image = gc::GrayImage::from_vec_u8(side, side, buffer)
            .map_err(|e| anyhow!("Invalid --size value: {e}"))?;
        let load_ms = instant.elapsed().as_millis();
        Ok((format!("synthetic_{side}x{side}"), gray_image, load_ms, 0))
    }
}

fn save_result(result: gc::GrayImage, destination_path: &Path) -> Result<u128> {
    debug!("Saving the result into {:?}", destination_path);
    let instant = Instant::now();
    let luma = image::GrayImage::from(result);
    luma.save(destination_path)
        .with_context(|| format!("Failed to save result into {:?}", destination_path))?;
    Ok(instant.elapsed().as_millis())
}

fn print_timings(timings_ms: [u128; 5]) {
    let [load, gray, filter, save, total] = timings_ms;
    println!("Load   : {load} ms");
    println!("To gray: {gray} ms");
    println!("Filter : {filter} ms");
    println!("Save   : {save} ms");
    println!("Total  : {total} ms");
}

fn append_csv_row(path: &Path, image_name: &str, timings_ms: [u128; 5]) -> Result<()> {
    let write_header = !path.exists();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open CSV log {:?}", path))?;
    if write_header {
        writeln!(file, "Image,Load(ms),ToGray(ms),Filter(ms),Save(ms),Total(ms)")?;
    }
    let [load, gray, filter, save, total] = timings_ms;
    writeln!(file, "{image_name},{load},{gray},{filter},{save},{total}")?;
    Ok(())
}

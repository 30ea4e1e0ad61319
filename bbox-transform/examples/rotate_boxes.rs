use anyhow::{Context, Result};
use bbox_transform::{
    apply_rotation_loose, apply_rotation_tight_with, bbox_enlarge, clip_bboxes_tlbr, safe_bboxes,
    EnlargeConfig, ImageSize, LogDiagnostics, Rect, TLBR,
};
use log::info;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Map boxes detected on a rotated image back to the original image
struct Args {
    #[structopt(long, default_value = "rotate.json5")]
    /// job file
    pub job_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct Job {
    pub image_width: usize,
    pub image_height: usize,
    /// clockwise rotation of the image in degrees
    pub angle: f64,
    /// TLBR boxes on the rotated image
    pub boxes: Vec<[f64; 4]>,
    pub enlarge: Option<EnlargeConfig>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let Args { job_file } = Args::from_args();
    let text = fs::read_to_string(&job_file)
        .with_context(|| format!("failed to read job file '{}'", job_file.display()))?;
    let Job {
        image_width,
        image_height,
        angle,
        boxes,
        enlarge,
    } = json5::from_str(&text)
        .with_context(|| format!("failed to parse job file '{}'", job_file.display()))?;

    let size = ImageSize::from_pixels(image_width, image_height);
    let boxes = safe_bboxes(boxes)?;
    let boxes = match &enlarge {
        Some(config) => clip_bboxes_tlbr(bbox_enlarge(boxes, config)?, &size)?,
        None => boxes,
    };
    info!("loaded {} boxes", boxes.nrows());

    for row in boxes.outer_iter() {
        let bbox = TLBR::try_from_tlbr([row[0], row[1], row[2], row[3]])?;
        let corners = apply_rotation_tight_with(&bbox, angle, &size, &LogDiagnostics)?;
        println!("tight {:?}", corners);
    }

    let loose = apply_rotation_loose(boxes.view(), angle, &size)?;
    for row in loose.outer_iter() {
        println!("loose {}", row);
    }

    Ok(())
}

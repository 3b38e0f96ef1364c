//! Pipeline regression test
//!
//! Builds a noisy grayscale scene with three bright blocks of different
//! sizes and checks that thresholding followed by region extraction keeps
//! exactly the largest ones.
//!
//! # Covered
//! - Iterative and fixed thresholds separate the blocks from the field
//! - keep = 1, 2 and more than the number of blocks
//! - File-to-file run through PGM input and PNG output

use blobsel::binarize::ThresholdMethod;
use blobsel::io::{read_image, write_image};
use blobsel::{ImageFormat, Pix, PipelineOptions, run_pipeline, run_pipeline_file};
use blobsel_test::{RegParams, SimpleRng, make_binary_rects, make_gray_image, regout_dir};
use std::fs;

const W: u32 = 60;
const H: u32 = 40;

/// Large, medium and small blocks as half-open (x0, y0, x1, y1)
const LARGE: (u32, u32, u32, u32) = (5, 5, 25, 15);
const MEDIUM: (u32, u32, u32, u32) = (35, 20, 45, 30);
const SMALL: (u32, u32, u32, u32) = (50, 5, 53, 8);

fn inside(rect: (u32, u32, u32, u32), x: u32, y: u32) -> bool {
    (rect.0..rect.2).contains(&x) && (rect.1..rect.3).contains(&y)
}

fn scene() -> Pix {
    let mut rng = SimpleRng::new(42);
    make_gray_image(W, H, |x, y| {
        let noise = ((rng.next() >> 33) % 21) as u8;
        if inside(LARGE, x, y) || inside(MEDIUM, x, y) || inside(SMALL, x, y) {
            200 + noise
        } else {
            20 + noise
        }
    })
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let gray = scene();

    let all_blocks = make_binary_rects(W, H, &[LARGE, MEDIUM, SMALL]);
    let two_blocks = make_binary_rects(W, H, &[LARGE, MEDIUM]);
    let one_block = make_binary_rects(W, H, &[LARGE]);

    // Test 1-4: iterative threshold, keep the largest block
    eprintln!("=== iterative, keep 1 ===");
    let opts = PipelineOptions::new().with_threshold(ThresholdMethod::Iterative);
    let out = run_pipeline(&gray, &opts).expect("pipeline keep 1");
    eprintln!("  threshold = {}", out.threshold);
    rp.compare_values(1.0, (out.threshold > 40 && out.threshold < 200) as u8 as f64, 0.0);
    rp.compare_pix(&all_blocks, &out.binary);
    rp.compare_pix(&one_block, &out.output);
    rp.compare_values(200.0, out.output.count_nonzero() as f64, 0.0);
    rp.write_pix(&out.output, ImageFormat::Png).expect("write keep 1");

    // Test 5: keep 2
    eprintln!("=== iterative, keep 2 ===");
    let opts2 = opts.clone().with_keep(2);
    let out2 = run_pipeline(&gray, &opts2).expect("pipeline keep 2");
    rp.compare_pix(&two_blocks, &out2.output);

    // Test 6: asking for more blocks than exist keeps all of them
    eprintln!("=== iterative, keep 5 ===");
    let out5 = run_pipeline(&gray, &opts.clone().with_keep(5)).expect("pipeline keep 5");
    rp.compare_pix(&all_blocks, &out5.output);

    // Test 7-8: a fixed threshold in the gap gives the same result
    eprintln!("=== fixed threshold ===");
    let fixed = PipelineOptions::new().with_threshold(ThresholdMethod::Fixed(128));
    let outf = run_pipeline(&gray, &fixed).expect("pipeline fixed");
    rp.compare_values(128.0, outf.threshold as f64, 0.0);
    rp.compare_pix(&one_block, &outf.output);

    // Test 9-10: file to file, PGM in and PNG out
    eprintln!("=== file roundtrip ===");
    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");
    let in_path = format!("{}/pipeline_scene.pgm", outdir);
    let out_path = format!("{}/pipeline_mask.png", outdir);
    write_image(&gray, &in_path, ImageFormat::Pnm).expect("write scene");
    let outfile = run_pipeline_file(&in_path, &out_path, ImageFormat::Png, &opts2)
        .expect("pipeline file");
    rp.compare_pix(&out2.output, &outfile.output);
    let mask = read_image(&out_path).expect("read mask");
    rp.compare_pix(&two_blocks, &mask);

    assert!(rp.cleanup(), "pipeline regression test failed");
}

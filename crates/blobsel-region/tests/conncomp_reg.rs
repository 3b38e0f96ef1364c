//! Connected component regression test
//!
//! Checks the propagation passes and the convergence loop against a
//! breadth-first reference that walks the same neighbor edges the passes
//! use. At the fixed point every pixel must carry the smallest initial
//! label of its region.
//!
//! Run with:
//! ```text
//! cargo test -p blobsel-region --test conncomp_reg
//! ```

use blobsel_core::{ImageFormat, LabelMap, Pix};
use blobsel_region::{
    bottom_up_pass, converge_labels, init_labels, label_components, top_down_pass,
};
use blobsel_test::{RegParams, SimpleRng, make_binary_image, make_gray_image, random_binary_image};
use std::collections::VecDeque;

/// Undirected edges the two passes can merge across
///
/// Top-down centers cover `x in 1..w-1, y in 0..h-1` and look right and
/// down; bottom-up centers cover `x in 1..w-1, y in 1..h` and look left
/// and up. First and last columns are never centers.
fn pass_edges(pix: &Pix) -> Vec<(usize, usize)> {
    let (w, h) = (pix.width() as i64, pix.height() as i64);
    let mut edges = Vec::new();
    if w < 3 || h < 2 {
        return edges;
    }

    let mut add = |x: i64, y: i64, nx: i64, ny: i64| {
        let a = pix.get_pixel_unchecked(x as u32, y as u32);
        let b = pix.get_pixel_unchecked(nx as u32, ny as u32);
        if a != 0 && a == b {
            edges.push(((y * w + x) as usize, (ny * w + nx) as usize));
        }
    };

    for y in 0..h - 1 {
        for x in 1..w - 1 {
            for (dx, dy) in [(1, 0), (1, 1), (0, 1), (-1, 1)] {
                add(x, y, x + dx, y + dy);
            }
        }
    }
    for y in 1..h {
        for x in 1..w - 1 {
            for (dx, dy) in [(-1, 0), (-1, -1), (0, -1), (1, -1)] {
                add(x, y, x + dx, y + dy);
            }
        }
    }
    edges
}

/// Smallest initial label of each pixel's region, by breadth-first search
fn reference_labels(pix: &Pix, initial: &LabelMap) -> Vec<u32> {
    let n = pix.pixel_count();
    let mut adjacency = vec![Vec::new(); n];
    for (a, b) in pass_edges(pix) {
        adjacency[a].push(b);
        adjacency[b].push(a);
    }

    let init = initial.data();
    let mut result = vec![0u32; n];
    let mut seen = vec![false; n];
    for start in 0..n {
        if init[start] == 0 || seen[start] {
            continue;
        }
        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;
        while let Some(i) = queue.pop_front() {
            members.push(i);
            for &j in &adjacency[i] {
                if !seen[j] {
                    seen[j] = true;
                    queue.push_back(j);
                }
            }
        }
        let min = members.iter().map(|&i| init[i]).min().unwrap_or(0);
        for i in members {
            result[i] = min;
        }
    }
    result
}

fn distinct_count(labels: &LabelMap) -> usize {
    labels.distinct_labels().len()
}

/// Random image with background and two foreground gray levels
fn random_three_level(w: u32, h: u32, seed: u32) -> Pix {
    let mut rng = SimpleRng::new(seed);
    make_gray_image(w, h, |_, _| match (rng.next() >> 33) % 3 {
        0 => 0,
        1 => 100,
        _ => 200,
    })
}

#[test]
fn conncomp_reg() {
    let mut rp = RegParams::new("conncomp");

    let mut cases: Vec<(String, Pix)> = Vec::new();
    for (i, density) in [0.3, 0.5, 0.7].into_iter().enumerate() {
        cases.push((
            format!("random 40x30 density {}", density),
            random_binary_image(40, 30, density, 11 + i as u32),
        ));
    }
    cases.push((
        "three-level 35x25".to_string(),
        random_three_level(35, 25, 5),
    ));
    cases.push((
        "random 303x243 density 0.45".to_string(),
        random_binary_image(303, 243, 0.45, 2024),
    ));

    for (name, pix) in &cases {
        eprintln!("=== {} ===", name);
        let (initial, label_count) = init_labels(pix).expect("init labels");

        // Every foreground pixel is labeled; the count reserves slot 0
        rp.compare_values(pix.count_nonzero() as f64, initial.count_labeled() as f64, 0.0);
        rp.compare_values((label_count - 1) as f64, initial.max_label() as f64, 0.0);

        // Single cycles never raise a label or add a distinct label
        let mut labels = initial.clone();
        let mut monotone = true;
        let mut shrinking = true;
        let mut cycles = 0u32;
        loop {
            let before = labels.clone();
            top_down_pass(pix, &mut labels).expect("top-down pass");
            bottom_up_pass(pix, &mut labels).expect("bottom-up pass");
            cycles += 1;
            monotone &= labels
                .data()
                .iter()
                .zip(before.data())
                .all(|(after, before)| after <= before);
            shrinking &= distinct_count(&labels) <= distinct_count(&before);
            if labels == before {
                break;
            }
        }
        rp.compare_values(1.0, monotone as u8 as f64, 0.0);
        rp.compare_values(1.0, shrinking as u8 as f64, 0.0);

        // The convergence loop counts the same cycles, final one included
        let mut converged = initial.clone();
        let iterations = converge_labels(pix, &mut converged, None).expect("converge");
        eprintln!("  {} labels, {} iterations", label_count, iterations);
        rp.compare_values(cycles as f64, iterations as f64, 0.0);
        rp.compare_labels(&labels, &converged);

        // The fixed point is the minimum initial label of each region
        let reference = reference_labels(pix, &initial);
        let expected =
            LabelMap::from_data(pix.width(), pix.height(), reference).expect("reference map");
        rp.compare_labels(&expected, &converged);

        // One more cycle changes nothing
        let mut again = converged.clone();
        top_down_pass(pix, &mut again).expect("top-down pass");
        bottom_up_pass(pix, &mut again).expect("bottom-up pass");
        rp.compare_labels(&converged, &again);

        // Two full runs agree
        let run1 = label_components(pix, None).expect("label run 1");
        let run2 = label_components(pix, None).expect("label run 2");
        rp.compare_labels(&run1.labels, &run2.labels);
        rp.compare_values(run1.count as f64, run2.count as f64, 0.0);
        rp.compare_values(distinct_count(&converged) as f64, run1.count as f64, 0.0);
    }

    // Pixels stacked in the first column never merge
    eprintln!("=== first column ===");
    let pix = make_binary_image(5, 5, &[(0, 1), (0, 2)]);
    let labeling = label_components(&pix, None).expect("label first column");
    rp.compare_values(2.0, labeling.count as f64, 0.0);
    rp.compare_values(1.0, labeling.iterations as f64, 0.0);

    // The same pair one column in is a single region
    let pix = make_binary_image(5, 5, &[(1, 1), (1, 2)]);
    let labeling = label_components(&pix, None).expect("label second column");
    rp.compare_values(1.0, labeling.count as f64, 0.0);
    rp.compare_values(2.0, labeling.iterations as f64, 0.0);

    // An anti-diagonal chain settles within one top-down pass
    eprintln!("=== staircase ===");
    let stairs: Vec<(u32, u32)> = (1..9).map(|i| (i, 9 - i)).collect();
    let pix = make_binary_image(10, 10, &stairs);
    let labeling = label_components(&pix, None).expect("label staircase");
    rp.compare_values(1.0, labeling.count as f64, 0.0);
    rp.compare_values(2.0, labeling.iterations as f64, 0.0);
    rp.write_pix(&pix, ImageFormat::Png).expect("write staircase");

    assert!(rp.cleanup(), "conncomp regression test failed");
}

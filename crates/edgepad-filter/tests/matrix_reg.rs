//! Matrix filter padding regression test
//!
//! Exercises the signed edge-size entry points, the padded filter driver
//! and the batch helpers.

use edgepad_core::{Error, Pix, PixMut};
use edgepad_filter::{
    FilterError, FilterResult, add_edges_batch, add_edges_to_image, apply_with_edges,
    edge_size_for_kernel, remove_edges_batch, remove_edges_from_image,
};
use edgepad_test::{RegParams, synthetic_pix};

const IMAGE_WIDTH: u32 = 300;
const IMAGE_HEIGHT: u32 = 100;
const ADDITIONAL_EDGE_SIZE: i32 = 5;

#[test]
fn matrix_reg() {
    let mut rp = RegParams::new("matrix");

    let pixs = synthetic_pix(IMAGE_WIDTH, IMAGE_HEIGHT, 1).expect("synthetic_pix");
    let e = ADDITIONAL_EDGE_SIZE as u32;

    // --- Test 1: pad, 300x100 by 5 -> 310x110 ---
    let padded = add_edges_to_image(&pixs, ADDITIONAL_EDGE_SIZE).expect("add_edges_to_image");
    rp.compare_values((IMAGE_WIDTH + 2 * e) as f64, padded.width() as f64, 0.0);
    rp.compare_values((IMAGE_HEIGHT + 2 * e) as f64, padded.height() as f64, 0.0);

    // --- Test 2: rows 0..=5 agree in every column, columns 0..=5 in every row ---
    let columns_ok = (0..padded.width()).all(|i| {
        let first = padded.get_pixel_unchecked(i, 0);
        (1..=e).all(|j| padded.get_pixel_unchecked(i, j) == first)
    });
    rp.check(columns_ok, "top rows replicate row 5");
    let rows_ok = (0..padded.height()).all(|j| {
        let first = padded.get_pixel_unchecked(0, j);
        (1..=e).all(|i| padded.get_pixel_unchecked(i, j) == first)
    });
    rp.check(rows_ok, "left columns replicate column 5");

    // --- Test 3: remove edges restores the source ---
    let back = remove_edges_from_image(&padded, ADDITIONAL_EDGE_SIZE).expect("remove_edges");
    rp.compare_pix(&pixs, &back);

    // --- Test 4: zero edge size is the identity ---
    rp.compare_pix(&pixs, &add_edges_to_image(&pixs, 0).expect("add 0"));
    rp.compare_pix(&pixs, &remove_edges_from_image(&pixs, 0).expect("remove 0"));

    assert!(rp.cleanup(), "matrix regression test failed");
}

#[test]
fn matrix_errors() {
    let pixs = Pix::new(10, 8).unwrap();

    assert_eq!(
        add_edges_to_image(&pixs, -1).unwrap_err(),
        FilterError::Core(Error::InvalidMargin(-1))
    );
    assert_eq!(
        remove_edges_from_image(&pixs, -3).unwrap_err(),
        FilterError::Core(Error::InvalidMargin(-3))
    );
    assert_eq!(
        remove_edges_from_image(&pixs, 4).unwrap_err(),
        FilterError::Core(Error::MarginTooLarge {
            margin: 4,
            width: 10,
            height: 8
        })
    );
    assert_eq!(
        remove_edges_from_image(&pixs, 3).unwrap().dimensions(),
        (4, 2)
    );
}

/// 3x3 minimum filter over the interior of a padded image.
///
/// Margin pixels are left as zero; they are cropped away afterwards.
fn min3x3_padded(padded: &Pix) -> FilterResult<Pix> {
    let (w, h) = padded.dimensions();
    let mut out = PixMut::new(w, h)?;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut m = u32::MAX;
            for dy in 0..3 {
                for dx in 0..3 {
                    m = m.min(padded.get_pixel_unchecked(x + dx - 1, y + dy - 1));
                }
            }
            out.set_pixel_unchecked(x, y, m);
        }
    }
    Ok(out.into())
}

/// The same filter computed on the source with clamped coordinates.
fn min3x3_clamped(pix: &Pix) -> Pix {
    let (w, h) = pix.dimensions();
    let mut out = PixMut::new(w, h).unwrap();
    for y in 0..h as i64 {
        for x in 0..w as i64 {
            let mut m = u32::MAX;
            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    let sx = (x + dx).clamp(0, w as i64 - 1) as u32;
                    let sy = (y + dy).clamp(0, h as i64 - 1) as u32;
                    m = m.min(pix.get_pixel_unchecked(sx, sy));
                }
            }
            out.set_pixel_unchecked(x as u32, y as u32, m);
        }
    }
    out.into()
}

#[test]
fn matrix_driver_reg() {
    let mut rp = RegParams::new("matrix_driver");

    for (w, h, seed) in [(1u32, 1u32, 3u64), (7, 5, 4), (40, 23, 5)] {
        let pixs = synthetic_pix(w, h, seed).expect("synthetic_pix");

        // Padding makes the kernel pass equal to clamp-to-edge sampling
        let filtered = apply_with_edges(&pixs, 3, min3x3_padded).expect("apply_with_edges");
        rp.compare_pix(&min3x3_clamped(&pixs), &filtered);

        // Identity filter returns the source
        let same = apply_with_edges(&pixs, 7, |p| Ok(p.clone())).expect("identity");
        rp.compare_pix(&pixs, &same);
    }

    let pixs = synthetic_pix(6, 6, 9).expect("synthetic_pix");
    let e = edge_size_for_kernel(5).expect("edge_size_for_kernel");
    let mut seen = (0, 0);
    let out = apply_with_edges(&pixs, 5, |p| {
        seen = p.dimensions();
        Ok(p.clone())
    })
    .expect("apply_with_edges");
    rp.compare_pix(&pixs, &out);
    rp.compare_values((6 + 2 * e) as f64, seen.0 as f64, 0.0);
    rp.compare_values((6 + 2 * e) as f64, seen.1 as f64, 0.0);

    assert!(rp.cleanup(), "matrix_driver regression test failed");
}

#[test]
fn matrix_batch_reg() {
    let mut rp = RegParams::new("matrix_batch");

    let images: Vec<Pix> = (0..12)
        .map(|i| synthetic_pix(20 + i, 10 + 2 * i, u64::from(i)).expect("synthetic_pix"))
        .collect();

    let padded = add_edges_batch(&images, 4);
    rp.compare_values(images.len() as f64, padded.len() as f64, 0.0);
    let padded: Vec<Pix> = padded
        .into_iter()
        .map(|r| r.expect("add_edges_batch"))
        .collect();
    for (pix, pad) in images.iter().zip(&padded) {
        rp.compare_pix(&pix.add_edges(4).expect("add_edges"), pad);
    }

    let cropped = remove_edges_batch(&padded, 4);
    for (pix, crop) in images.iter().zip(cropped) {
        rp.compare_pix(pix, &crop.expect("remove_edges_batch"));
    }

    assert!(rp.cleanup(), "matrix_batch regression test failed");
}

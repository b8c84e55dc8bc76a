//! Catalog of named convolution kernels.
//!
//! Coefficients are stored pre-multiplied by the filter's
//! normalization factor, e.g. `box_blur_3x3` holds nine times `1/9`.

use crate::kernel::Kernel;

const FILTER_NAMES: &[&str] = &[
    "identity",
    "box_blur_3x3",
    "gaussian_blur_3x3",
    "gaussian_blur_5x5",
    "sharpen_3x3",
    "edge_detect_3x3",
    "emboss_3x3",
];

/// Names resolvable by [by_name], in catalog order.
pub fn filter_names() -> &'static [&'static str] {
    FILTER_NAMES
}

/// Returns the kernel registered under `name`.
pub fn by_name(name: &str) -> Option<Kernel> {
    let kernel = match name {
        "identity" => kernel(1, &[1.]),
        "box_blur_3x3" => kernel(3, &[1. / 9.; 9]),
        "gaussian_blur_3x3" => scaled(3, 1. / 16., &[1., 2., 1., 2., 4., 2., 1., 2., 1.]),
        "gaussian_blur_5x5" => scaled(
            5,
            1. / 256.,
            &[
                1., 4., 6., 4., 1., //
                4., 16., 24., 16., 4., //
                6., 24., 36., 24., 6., //
                4., 16., 24., 16., 4., //
                1., 4., 6., 4., 1.,
            ],
        ),
        "sharpen_3x3" => kernel(3, &[0., -1., 0., -1., 5., -1., 0., -1., 0.]),
        "edge_detect_3x3" => kernel(3, &[-1., -1., -1., -1., 8., -1., -1., -1., -1.]),
        "emboss_3x3" => kernel(3, &[-2., -1., 0., -1., 1., 1., 0., 1., 2.]),
        _ => return None,
    };
    Some(kernel)
}

fn kernel(side: u32, coefficients: &[f64]) -> Kernel {
    // Catalog entries are statically valid.
    Kernel::new(side, side, coefficients.to_vec()).unwrap()
}

fn scaled(side: u32, factor: f64, coefficients: &[f64]) -> Kernel {
    let coefficients = coefficients.iter().map(|c| c * factor).collect();
    Kernel::new(side, side, coefficients).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_name_resolves() {
        for name in filter_names() {
            let kernel = by_name(name).unwrap();
            assert!(kernel.width() % 2 == 1 && kernel.height() % 2 == 1);
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(by_name("motion_blur_9x9").is_none());
    }

    #[test]
    fn blur_kernels_sum_to_one() {
        for name in ["box_blur_3x3", "gaussian_blur_3x3", "gaussian_blur_5x5"] {
            let kernel = by_name(name).unwrap();
            let sum: f64 = kernel.coefficients().iter().sum();
            assert!((sum - 1.).abs() < 1e-12, "{name} sums to {sum}");
        }
    }

    #[test]
    fn sharpen_preserves_flat_regions() {
        let kernel = by_name("sharpen_3x3").unwrap();
        let sum: f64 = kernel.coefficients().iter().sum();
        assert_eq!(sum, 1.);
    }
}

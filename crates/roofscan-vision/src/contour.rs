//! Roof contour extraction pipeline.
//!
//! Satellite tiles are processed with a fixed sequence: grayscale
//! conversion, Gaussian smoothing, Canny edge detection, border tracing,
//! and a convex hull over the largest outer boundary. Edge maps of aerial
//! imagery are noisy and jagged; the hull regularizes the winning boundary
//! into a clean polygon whose area is the roof measurement.

use image::imageops;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::geometry::convex_hull;
use imageproc::point::Point;
use serde::{Serialize, Serializer};

use crate::Result;

/// Gaussian smoothing strength applied before edge detection.
///
/// Equivalent to a 5x5 kernel with automatic sigma, enough to suppress the
/// high-frequency texture that fragments roof edges.
pub const GAUSSIAN_BLUR_SIGMA: f32 = 1.1;

/// Lower hysteresis threshold for Canny edge detection.
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;

/// Upper hysteresis threshold for Canny edge detection.
///
/// The 50/150 pair is tuned for the contrast range of satellite imagery.
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;

/// A polygon vertex in source-image pixel coordinates.
///
/// Serializes as a two-element `[x, y]` array so a polygon becomes a plain
/// JSON coordinate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    /// Column, increasing rightward.
    pub x: i32,
    /// Row, increasing downward.
    pub y: i32,
}

impl Serialize for PixelPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

/// The dominant roof outline found in a tile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoofContour {
    /// Enclosed area of the hull, in pixels².
    pub area_px: f64,
    /// Convex hull vertices in source-image pixel space, in winding order.
    pub polygon: Vec<PixelPoint>,
}

/// Outcome of roof detection on a tile.
///
/// `NotDetected` is a legitimate result for featureless imagery, distinct
/// from a decode failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RoofDetection {
    /// A dominant outer boundary was found.
    Detected(RoofContour),
    /// The edge map contained no outer boundary.
    NotDetected,
}

/// Extract the dominant roof contour from encoded image bytes.
///
/// The input may be any raster format the `image` crate decodes; the tile
/// provider serves PNG. The only failure mode is undecodable input. An
/// image with no usable edges yields [`RoofDetection::NotDetected`].
pub fn extract_roof_contour(image_bytes: &[u8]) -> Result<RoofDetection> {
    let color = image::load_from_memory(image_bytes)?.into_rgb8();
    let gray = imageops::grayscale(&color);

    let blurred = gaussian_blur_f32(&gray, GAUSSIAN_BLUR_SIGMA);
    let edges = canny(&blurred, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);

    let contours: Vec<Contour<i32>> = find_contours(&edges);

    // Only outermost boundaries compete: a rooftop presents as a single
    // outer silhouette, and nested contours are edge noise inside it.
    let mut largest: Option<&Contour<i32>> = None;
    let mut largest_twice_area = 0u64;
    for contour in &contours {
        if contour.border_type != BorderType::Outer || contour.parent.is_some() {
            continue;
        }
        let twice_area = twice_polygon_area(&contour.points);
        if largest.is_none() || twice_area > largest_twice_area {
            largest = Some(contour);
            largest_twice_area = twice_area;
        }
    }

    let Some(largest) = largest else {
        return Ok(RoofDetection::NotDetected);
    };

    let hull = convex_hull(largest.points.clone());
    let area_px = polygon_area(&hull);
    let polygon = hull.iter().map(|p| PixelPoint { x: p.x, y: p.y }).collect();

    Ok(RoofDetection::Detected(RoofContour { area_px, polygon }))
}

/// Enclosed area of a closed polygon via the shoelace formula.
fn polygon_area(points: &[Point<i32>]) -> f64 {
    twice_polygon_area(points) as f64 / 2.0
}

/// Twice the enclosed area, exact in integer arithmetic.
fn twice_polygon_area(points: &[Point<i32>]) -> u64 {
    if points.len() < 3 {
        return 0;
    }

    let mut doubled: i64 = 0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        doubled += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }

    doubled.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    /// Encode an image to PNG bytes in memory.
    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("PNG encoding failed");
        bytes
    }

    /// A dark tile with a centered bright square of the given edge length.
    fn square_tile(size: u32, side: u32) -> RgbImage {
        let offset = (size - side) / 2;
        RgbImage::from_fn(size, size, |x, y| {
            let inside = x >= offset && x < offset + side && y >= offset && y < offset + side;
            if inside {
                Rgb([220, 220, 220])
            } else {
                Rgb([40, 40, 40])
            }
        })
    }

    #[test]
    fn test_uniform_image_yields_not_detected() {
        let img = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
        let detection = extract_roof_contour(&png_bytes(&img)).unwrap();
        assert_eq!(detection, RoofDetection::NotDetected);
    }

    #[test]
    fn test_invalid_bytes_fail_to_decode() {
        let result = extract_roof_contour(b"definitely not an image");
        assert!(matches!(result, Err(crate::VisionError::Decode(_))));
    }

    #[test]
    fn test_empty_bytes_fail_to_decode() {
        assert!(extract_roof_contour(&[]).is_err());
    }

    #[test]
    fn test_square_roof_area_close_to_truth() {
        let side = 200u32;
        let img = square_tile(400, side);
        let detection = extract_roof_contour(&png_bytes(&img)).unwrap();

        let RoofDetection::Detected(roof) = detection else {
            panic!("expected a detected roof");
        };

        // The traced boundary rides the edge ring around the square, so the
        // hull may overshoot the true outline by a few pixels per side.
        let truth = f64::from(side * side);
        let error = (roof.area_px - truth).abs() / truth;
        assert!(
            error < 0.10,
            "hull area {} deviates {:.1}% from {}",
            roof.area_px,
            error * 100.0,
            truth
        );
        assert!(roof.polygon.len() >= 3);
    }

    #[test]
    fn test_largest_of_two_squares_wins() {
        // A big square and a clearly separated small one.
        let size = 300u32;
        let img = RgbImage::from_fn(size, size, |x, y| {
            let in_big = (40..160).contains(&x) && (40..160).contains(&y);
            let in_small = (220..260).contains(&x) && (220..260).contains(&y);
            if in_big || in_small {
                Rgb([230, 230, 230])
            } else {
                Rgb([30, 30, 30])
            }
        });

        let detection = extract_roof_contour(&png_bytes(&img)).unwrap();
        let RoofDetection::Detected(roof) = detection else {
            panic!("expected a detected roof");
        };

        // 120x120 dominates 40x40; the winner must be in its ballpark.
        assert!(
            roof.area_px > 10_000.0,
            "picked the small square: {} px²",
            roof.area_px
        );

        // All hull vertices must lie in the big square's neighborhood.
        for point in &roof.polygon {
            assert!(
                (30..=170).contains(&point.x) && (30..=170).contains(&point.y),
                "hull vertex {:?} strays outside the big square",
                point
            );
        }
    }

    #[test]
    fn test_hull_is_convex() {
        let img = square_tile(200, 80);
        let detection = extract_roof_contour(&png_bytes(&img)).unwrap();
        let RoofDetection::Detected(roof) = detection else {
            panic!("expected a detected roof");
        };
        let pts = &roof.polygon;
        assert!(pts.len() >= 3);

        // Consecutive edge cross products of a convex polygon never flip sign.
        let mut positive = false;
        let mut negative = false;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            let c = pts[(i + 2) % pts.len()];
            let cross = i64::from(b.x - a.x) * i64::from(c.y - b.y)
                - i64::from(b.y - a.y) * i64::from(c.x - b.x);
            if cross > 0 {
                positive = true;
            }
            if cross < 0 {
                negative = true;
            }
        }
        assert!(!(positive && negative), "hull polygon is not convex");
    }

    #[test]
    fn test_pixel_point_serializes_as_pair() {
        let json = serde_json::to_string(&PixelPoint { x: 12, y: 34 }).unwrap();
        assert_eq!(json, "[12,34]");
    }

    #[test]
    fn test_contour_serializes_polygon_as_pairs() {
        let roof = RoofContour {
            area_px: 4.0,
            polygon: vec![
                PixelPoint { x: 0, y: 0 },
                PixelPoint { x: 2, y: 0 },
                PixelPoint { x: 2, y: 2 },
                PixelPoint { x: 0, y: 2 },
            ],
        };
        let json = serde_json::to_value(&roof).unwrap();
        assert_eq!(json["polygon"][1], serde_json::json!([2, 0]));
    }

    #[test]
    fn test_polygon_area_of_square() {
        let square = [
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ];
        assert_eq!(polygon_area(&square), 100.0);
    }

    #[test]
    fn test_polygon_area_winding_independent() {
        let cw = [Point::new(0, 0), Point::new(0, 5), Point::new(5, 5), Point::new(5, 0)];
        let ccw = [Point::new(0, 0), Point::new(5, 0), Point::new(5, 5), Point::new(0, 5)];
        assert_eq!(polygon_area(&cw), polygon_area(&ccw));
    }

    #[test]
    fn test_polygon_area_degenerate_inputs() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[Point::new(3, 4)]), 0.0);
        assert_eq!(polygon_area(&[Point::new(0, 0), Point::new(5, 5)]), 0.0);
    }
}

use bbox_transform::{
    bbox_general_to_rotated_loose, bbox_tlbr_to_tlwh, bbox_tlwh_to_tlbr, bbox_transform,
    bbox_transform_inv, clip_bboxes_tlbr, pts_from_bbox_frame, pts_to_bbox_frame, ImageSize,
    Rect, RectNum, TLBR,
};
use ndarray::Array2;
use proptest::prelude::*;

fn tlbr_box() -> impl Strategy<Value = [f64; 4]> {
    (-10_000i32..10_000, -10_000i32..10_000, 0i32..10_000, 0i32..10_000).prop_map(
        |(x1, y1, w, h)| {
            let (x1, y1) = (x1 as f64, y1 as f64);
            [x1, y1, x1 + w as f64, y1 + h as f64]
        },
    )
}

proptest! {
    #[test]
    fn tlbr_tlwh_round_trip(bbox in tlbr_box()) {
        let round_trip = bbox_tlwh_to_tlbr(bbox_tlbr_to_tlwh(bbox).unwrap()).unwrap();
        prop_assert_eq!(round_trip.row(0).to_vec(), bbox.to_vec());
    }

    #[test]
    fn clipped_box_is_inside_image(bbox in tlbr_box(), w in 0usize..5_000, h in 0usize..5_000) {
        let size = ImageSize::from_pixels(w, h);
        let clipped = clip_bboxes_tlbr(bbox, &size).unwrap();
        let row = clipped.row(0);
        for &x in [row[0], row[2]].iter() {
            prop_assert!((0.0..=w as f64).contains(&x));
        }
        for &y in [row[1], row[3]].iter() {
            prop_assert!((0.0..=h as f64).contains(&y));
        }
        prop_assert!(row[0] <= row[2] && row[1] <= row[3]);
    }

    #[test]
    fn bbox_frame_round_trip(
        bbox in tlbr_box(),
        coords in prop::collection::vec(-100_000i32..100_000, 2..40),
    ) {
        let npts = coords.len() / 2;
        let values: Vec<f64> = coords[..npts * 2].iter().map(|&v| v as f64).collect();
        let points = Array2::from_shape_vec((2, npts), values).unwrap();
        let rect = TLBR::try_from_tlbr(bbox).unwrap();

        let local = pts_to_bbox_frame(points.view(), &rect).unwrap();
        let back = pts_from_bbox_frame(local.view(), &rect).unwrap();
        prop_assert_eq!(back, points);
    }

    #[test]
    fn regression_decode_inverts_encode(
        anchor in (0i32..1_000, 0i32..1_000, 0i32..500, 0i32..500),
        target in (0i32..1_000, 0i32..1_000, 0i32..500, 0i32..500),
    ) {
        let to_box = |(x, y, w, h): (i32, i32, i32, i32)| {
            [x as f64, y as f64, (x + w) as f64, (y + h) as f64]
        };
        let anchor = to_box(anchor);
        let target = to_box(target);

        let deltas = bbox_transform(anchor, target).unwrap();
        let decoded = bbox_transform_inv(anchor, deltas.view()).unwrap();
        for (&actual, &expect) in decoded.row(0).iter().zip(target.iter()) {
            prop_assert!((actual - expect).abs() <= 1e-5, "{} != {}", actual, expect);
        }
    }

    #[test]
    fn rotation_by_zero_is_identity(
        bbox in (0i32..300, 0i32..300, 0i32..300, 0i32..300),
        (w, h) in (1usize..2_000, 1usize..2_000),
    ) {
        let (x, y, bw, bh) = bbox;
        let rect = TLBR::try_from_tlbr([x as f64, y as f64, (x + bw) as f64, (y + bh) as f64]).unwrap();
        let size = ImageSize::from_pixels(w, h);
        let loose = bbox_general_to_rotated_loose(&rect, 0.0, &size).unwrap();

        for (&actual, &expect) in loose.tlbr().iter().zip(rect.tlbr().iter()) {
            prop_assert!((actual - expect).abs() <= 1e-6, "{} != {}", actual, expect);
        }
        prop_assert!((loose.w() - rect.w()).abs() <= 1e-6);
    }
}

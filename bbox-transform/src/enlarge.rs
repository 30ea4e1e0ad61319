use crate::{check_tlbr, common::*, safe_bboxes, Element, IntoBoxes};

/// Options of [bbox_enlarge].
///
/// The per-axis options take effect only when both axes are given, otherwise
/// the shared `ratio` and `min_length` apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnlargeConfig {
    /// The extra size relative to the current size.
    pub ratio: f64,
    pub width_ratio: Option<f64>,
    pub height_ratio: Option<f64>,
    /// The minimum size after enlarging.
    pub min_length: f64,
    pub min_width: Option<f64>,
    pub min_height: Option<f64>,
}

impl Default for EnlargeConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            width_ratio: None,
            height_ratio: None,
            min_length: 128.0,
            min_width: None,
            min_height: None,
        }
    }
}

impl EnlargeConfig {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }

    /// The `(width, height)` ratios in effect.
    pub fn ratios(&self) -> (f64, f64) {
        match (self.width_ratio, self.height_ratio) {
            (Some(w), Some(h)) => (w, h),
            _ => (self.ratio, self.ratio),
        }
    }

    /// The `(width, height)` minimum sizes in effect.
    pub fn min_sizes(&self) -> (f64, f64) {
        match (self.min_width, self.min_height) {
            (Some(w), Some(h)) => (w, h),
            _ => (self.min_length, self.min_length),
        }
    }
}

/// Grow TLBR boxes symmetrically around their centers.
pub fn bbox_enlarge<T, B>(boxes: B, config: &EnlargeConfig) -> Result<Array2<T>>
where
    T: Element,
    B: IntoBoxes<T>,
{
    let boxes = safe_bboxes(boxes)?;
    check_tlbr(boxes.view())?;

    let cast = |value: f64| T::from(value).unwrap_or_else(T::nan);
    let (width_ratio, height_ratio) = config.ratios();
    let (min_width, min_height) = config.min_sizes();
    let (width_ratio, height_ratio) = (cast(width_ratio), cast(height_ratio));
    let (min_width, min_height) = (cast(min_width), cast(min_height));
    let two = T::one() + T::one();

    let mut output = boxes;
    output.outer_iter_mut().for_each(|mut row| {
        let w = row[2] - row[0];
        let h = row[3] - row[1];
        let extra_w = (w * width_ratio).max(min_width - w);
        let extra_h = (h * height_ratio).max(min_height - h);

        row[0] = row[0] - extra_w / two;
        row[1] = row[1] - extra_h / two;
        row[2] = row[2] + extra_w / two;
        row[3] = row[3] + extra_h / two;
    });
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn enlarge_by_ratio() {
        let config = EnlargeConfig {
            ratio: 0.2,
            min_length: 0.0,
            ..Default::default()
        };
        let boxes = bbox_enlarge(vec![[0.0, 0.0, 10.0, 10.0]], &config).unwrap();
        assert_eq!(boxes, array![[-1.0, -1.0, 11.0, 11.0]]);
    }

    #[test]
    fn enlarge_to_min_length() {
        let boxes = bbox_enlarge([10.0, 10.0, 20.0, 30.0], &EnlargeConfig::default()).unwrap();
        assert_eq!(boxes, array![[-49.0, -44.0, 79.0, 84.0]]);
    }

    #[test]
    fn enlarge_per_axis() {
        let config = EnlargeConfig {
            width_ratio: Some(1.0),
            height_ratio: Some(0.0),
            min_width: Some(0.0),
            min_height: Some(8.0),
            ..Default::default()
        };
        let boxes = bbox_enlarge([0.0, 0.0, 4.0, 4.0], &config).unwrap();
        assert_eq!(boxes, array![[-2.0, -2.0, 6.0, 6.0]]);

        // a single per-axis option falls back to the shared one
        let config = EnlargeConfig {
            width_ratio: Some(1.0),
            min_length: 0.0,
            ..Default::default()
        };
        assert_eq!(config.ratios(), (0.2, 0.2));
    }

    #[test]
    fn enlarge_config_from_json5() {
        let config: EnlargeConfig = json5::from_str("{ ratio: 0.5, min_width: 4, min_height: 2 }").unwrap();
        assert_eq!(config.ratios(), (0.5, 0.5));
        assert_eq!(config.min_sizes(), (4.0, 2.0));
        assert_eq!(config.min_length, 128.0);
    }

    #[test]
    fn enlarge_validates_input() {
        assert!(matches!(
            bbox_enlarge([5.0, 0.0, 1.0, 1.0], &EnlargeConfig::default()),
            Err(Error::InvalidBoxFormat { .. })
        ));
    }
}

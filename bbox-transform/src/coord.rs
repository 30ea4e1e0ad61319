use crate::Element;

/// Image coordinates (y grows downward) to cartesian coordinates (y grows upward).
pub fn image_to_cartesian<T>(point: [T; 2]) -> [T; 2]
where
    T: Element,
{
    let [x, y] = point;
    [x, -y]
}

/// Inverse of [image_to_cartesian].
pub fn cartesian_to_image<T>(point: [T; 2]) -> [T; 2]
where
    T: Element,
{
    let [x, y] = point;
    [x, -y]
}

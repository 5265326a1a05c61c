// 2D height map: row‐major Vec<Vec<f32>> of size width×height
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// flatten a 2D height map (row‐major) into a single Vec<f32>
// For handing a raster to an image buffer or a GPU upload
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Smallest and largest sample, or None for an empty map
pub fn range2(map: &HeightMap2D) -> Option<(f32, f32)> {
    let mut values = map.iter().flatten().copied();
    let first = values.next()?;
    Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

// Rescale a height map in place so its samples span [0.0, 1.0]
// A flat map becomes 0.5 everywhere.
pub fn normalize2(map: &mut HeightMap2D) {
    let Some((min, max)) = range2(map) else {
        return;
    };

    let range = max - min;
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = if range < f32::EPSILON {
                0.5
            } else {
                (*val - min) / range
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten2_is_row_major() {
        let map = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(flatten2(&map), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn range2_spans_all_rows() {
        let map = vec![vec![0.5, -0.25], vec![0.75, 0.0]];
        assert_eq!(range2(&map), Some((-0.25, 0.75)));
        assert_eq!(range2(&HeightMap2D::new()), None);
    }

    #[test]
    fn normalize2_spans_unit_interval() {
        let mut map = vec![vec![-0.5, 0.0], vec![0.25, 0.5]];
        normalize2(&mut map);
        assert_eq!(map, vec![vec![0.0, 0.5], vec![0.75, 1.0]]);
    }

    #[test]
    fn normalize2_flat_map() {
        let mut map = vec![vec![0.3; 4]; 3];
        normalize2(&mut map);
        assert!(map.iter().flatten().all(|&v| v == 0.5));
    }
}

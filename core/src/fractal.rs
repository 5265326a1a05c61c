use crate::generator::NoiseGenerator;

// Fractal Brownian Motion over any noise source: octaves of the same
// generator at doubling frequency and geometrically shrinking amplitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fractal<G> {
    generator: G,
    frequency: f64,   // frequency of the first octave
    persistence: f64, // amplitude scaling per octave
    octaves: usize,   // number of octaves to sum
}

impl<G: NoiseGenerator> Fractal<G> {
    pub fn new(generator: G, frequency: f64, persistence: f64, octaves: usize) -> Self {
        Self {
            generator,
            frequency,
            persistence,
            octaves,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    // Weighted octave sum, normalized by the total amplitude.
    // `sample` receives the octave frequency.
    #[inline]
    fn accumulate<F: Fn(f64) -> f64>(&self, sample: F) -> f64 {
        let mut amplitude = 1.0;
        let mut freq = self.frequency;
        let mut total = 0.0;
        let mut max_amp = 0.0;

        for _ in 0..self.octaves {
            total += sample(freq) * amplitude;
            max_amp += amplitude;
            amplitude *= self.persistence;
            freq *= 2.0;
        }

        if max_amp == 0.0 { 0.0 } else { total / max_amp }
    }
}

impl<G: NoiseGenerator> NoiseGenerator for Fractal<G> {
    fn get2(&self, x: f64, y: f64) -> f64 {
        self.accumulate(|f| self.generator.get2(x * f, y * f))
    }

    fn get3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.accumulate(|f| self.generator.get3(x * f, y * f, z * f))
    }

    fn get4(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.accumulate(|f| self.generator.get4(x * f, y * f, z * f, w * f))
    }
}

#[cfg(test)]
mod tests {
    use super::Fractal;
    use crate::{NoiseGenerator, OpenSimplex};

    #[test]
    fn fractal_determinism() {
        let a = Fractal::new(OpenSimplex::new(1234), 0.05, 0.5, 4);
        let b = Fractal::new(OpenSimplex::new(1234), 0.05, 0.5, 4);
        assert_eq!(a.get3(10.5, -3.7, 2.2), b.get3(10.5, -3.7, 2.2));
    }

    #[test]
    fn single_octave_is_the_scaled_generator() {
        let g = OpenSimplex::new(9);
        let f = Fractal::new(g, 0.25, 0.5, 1);
        assert_eq!(f.get2(3.0, 5.0), g.get2(0.75, 1.25));
    }

    #[test]
    fn three_octaves_weigh_four_two_one() {
        let g = OpenSimplex::new(77374);
        let f = Fractal::new(g, 0.25, 0.5, 3);
        let (x, y) = (1.7, -0.4);
        let expected = g.get4(x / 4.0, y / 4.0, 0.0, 0.0) * 4.0 / 7.0
            + g.get4(x / 2.0, y / 2.0, 0.0, 0.0) * 2.0 / 7.0
            + g.get4(x, y, 0.0, 0.0) / 7.0;
        assert!((f.get4(x, y, 0.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_octaves_is_flat() {
        let f = Fractal::new(OpenSimplex::new(0), 1.0, 0.5, 0);
        assert_eq!(f.get2(1.5, 2.5), 0.0);
    }

    #[test]
    // Stays within [-1.0, 1.0] range
    fn fractal_range() {
        let f = Fractal::new(OpenSimplex::new(0), 0.1, 0.5, 6);
        for &(x, y) in &[(0.0, 0.0), (5.3, -1.2), (100.1, 200.2)] {
            let v = f.get2(x, y);
            assert!(v.is_finite() && (-1.0..=1.0).contains(&v));
        }
    }
}

//! Summary statistics of a vector of timing samples.

use crate::error::{Error, Result};

/// Quartiles needs this many samples.
pub const MIN_SAMPLES: usize = 4;

/// Five-number summary: `[min, Q1, median, Q3, max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quartiles(pub [f64; 5]);

impl Quartiles {
    /// Quartiles of `data`, which is sorted in place.
    ///
    /// `Q1` and `Q3` are read directly from the sorted data when
    /// `len % 4 >= 2`, and interpolated between neighbours otherwise.
    pub fn of(data: &mut [f64]) -> Result<Self> {
        let n = data.len();
        if n < MIN_SAMPLES {
            return Err(Error::TooFewSamples(n));
        }
        data.sort_unstable_by(f64::total_cmp);

        let median = if n % 2 == 1 {
            data[n / 2]
        } else {
            (data[n / 2 - 1] + data[n / 2]) / 2.0
        };

        let (p1, p3) = (n / 4, 3 * n / 4);
        let (q1, q3) = if n % 4 >= 2 {
            (data[p1], data[p3])
        } else {
            (
                0.25 * data[p1 - 1] + 0.75 * data[p1],
                0.75 * data[p3 - 1] + 0.25 * data[p3],
            )
        };

        Ok(Self([data[0], q1, median, q3, data[n - 1]]))
    }

    pub fn min(&self) -> f64 {
        self.0[0]
    }
    pub fn q1(&self) -> f64 {
        self.0[1]
    }
    pub fn median(&self) -> f64 {
        self.0[2]
    }
    pub fn q3(&self) -> f64 {
        self.0[3]
    }
    pub fn max(&self) -> f64 {
        self.0[4]
    }
}

/// Mean, unbiased standard deviation and quartiles of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub stdev: f64,
    pub quartiles: Quartiles,
}

impl Statistics {
    /// Reduces `samples`. The samples are left sorted.
    ///
    /// Mean and deviation are accumulated in the original sample order, so
    /// the result is reproducible bit for bit.
    pub fn of(samples: &mut [f64]) -> Result<Self> {
        let n = samples.len();
        if n < MIN_SAMPLES {
            return Err(Error::TooFewSamples(n));
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let stdev = (samples.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>()
            / (n - 1) as f64)
            .sqrt();
        let quartiles = Quartiles::of(samples)?;
        Ok(Self {
            mean,
            stdev,
            quartiles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quartiles(mut data: Vec<f64>) -> [f64; 5] {
        Quartiles::of(&mut data).unwrap().0
    }

    #[test]
    fn four_samples_interpolate() {
        // n % 4 == 0: Q1 = 0.25*1 + 0.75*2, Q3 = 0.75*3 + 0.25*4.
        assert_eq!(quartiles(vec![4., 2., 1., 3.]), [1., 1.75, 2.5, 3.25, 4.]);
    }

    #[test]
    fn direct_indexing_when_remainder_is_large() {
        // n = 6: p1 = 1, p3 = 4.
        assert_eq!(
            quartiles(vec![6., 5., 4., 3., 2., 1.]),
            [1., 2., 3.5, 5., 6.]
        );
        // n = 7: p1 = 1, p3 = 5, odd median.
        assert_eq!(
            quartiles(vec![1., 2., 3., 4., 5., 6., 7.]),
            [1., 2., 4., 6., 7.]
        );
    }

    #[test]
    fn interpolation_when_remainder_is_one() {
        // n = 5: p1 = 1, p3 = 3.
        assert_eq!(
            quartiles(vec![10., 20., 30., 40., 50.]),
            [10., 17.5, 30., 32.5, 50.]
        );
    }

    #[test]
    fn too_few_samples() {
        assert!(matches!(
            Quartiles::of(&mut [1., 2., 3.]),
            Err(Error::TooFewSamples(3))
        ));
        assert!(Statistics::of(&mut []).is_err());
    }

    #[test]
    fn unbiased_standard_deviation() {
        let mut data = [2., 4., 4., 4., 5., 5., 7., 9.];
        let s = Statistics::of(&mut data).unwrap();
        assert_eq!(s.mean, 5.);
        // Sum of squares is 32: population stdev would be exactly 2.
        assert!((s.stdev - (32f64 / 7.).sqrt()).abs() < 1e-12);
        assert_eq!(s.quartiles.0, [2., 4., 4.5, 5.5, 9.]);
    }

    #[test]
    fn constant_samples() {
        let mut data = vec![3.5; 32];
        let s = Statistics::of(&mut data).unwrap();
        assert_eq!(s.mean, 3.5);
        assert_eq!(s.stdev, 0.);
        assert_eq!(s.quartiles, Quartiles([3.5; 5]));
    }

    #[test]
    fn reproducible() {
        let data = vec![1.3, 0.2, 7.9, 4.4, 4.4, 0.01, 12.5, 3.3, 2.2];
        let a = Statistics::of(&mut data.clone()).unwrap();
        let b = Statistics::of(&mut data.clone()).unwrap();
        assert_eq!(a.mean.to_bits(), b.mean.to_bits());
        assert_eq!(a.stdev.to_bits(), b.stdev.to_bits());
    }
}

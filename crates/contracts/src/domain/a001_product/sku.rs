use super::aggregate::ProductId;
use crate::domain::common::{IdAllocator, RandomSource, UuidRandom};

const SKU_MIN: u32 = 1000;
const SKU_MAX: u32 = 9999;
const SKU_SPAN: u32 = SKU_MAX - SKU_MIN + 1;

/// Random draws before falling back to a linear scan
const MAX_DRAWS: usize = 32;

/// Random four-digit product codes ("AGR-4821"), redrawn on collision
#[derive(Debug, Clone, Default)]
pub struct SkuIds<S = UuidRandom> {
    source: S,
}

impl<S: RandomSource> SkuIds<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: RandomSource> IdAllocator<ProductId> for SkuIds<S> {
    fn allocate(&mut self, taken: &[ProductId]) -> Option<ProductId> {
        for _ in 0..MAX_DRAWS {
            let candidate = ProductId::from_number(SKU_MIN + self.source.next_u32() % SKU_SPAN);
            if !taken.contains(&candidate) {
                return Some(candidate);
            }
        }

        // First free code; past 9999 only once every four-digit code is used
        (SKU_MIN..=u32::MAX)
            .map(ProductId::from_number)
            .find(|candidate| !taken.contains(candidate))
            .inspect(|candidate| log::warn!("sku draws exhausted, using {}", candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(Vec<u32>);

    impl RandomSource for Fixed {
        fn next_u32(&mut self) -> u32 {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            }
        }
    }

    #[test]
    fn test_maps_into_four_digit_range() {
        let mut ids = SkuIds::with_source(Fixed(vec![0]));
        assert_eq!(ids.allocate(&[]), Some(ProductId::new("AGR-1000")));

        let mut ids = SkuIds::with_source(Fixed(vec![8999]));
        assert_eq!(ids.allocate(&[]), Some(ProductId::new("AGR-9999")));

        let mut ids = SkuIds::with_source(Fixed(vec![9000]));
        assert_eq!(ids.allocate(&[]), Some(ProductId::new("AGR-1000")));
    }

    #[test]
    fn test_redraws_on_collision() {
        let taken = vec![ProductId::new("AGR-1001")];
        let mut ids = SkuIds::with_source(Fixed(vec![1, 1, 5]));
        assert_eq!(ids.allocate(&taken), Some(ProductId::new("AGR-1005")));
    }

    #[test]
    fn test_falls_back_to_first_free_code() {
        let taken: Vec<ProductId> = (1000..1003).map(ProductId::from_number).collect();
        // always draws a taken code
        let mut ids = SkuIds::with_source(Fixed(vec![1]));
        assert_eq!(ids.allocate(&taken), Some(ProductId::new("AGR-1003")));
    }

    #[test]
    fn test_default_source_stays_in_range() {
        let mut ids: SkuIds = SkuIds::default();
        for _ in 0..100 {
            let id = ids.allocate(&[]).unwrap();
            let n: u32 = id.value()["AGR-".len()..].parse().unwrap();
            assert!((SKU_MIN..=SKU_MAX).contains(&n));
        }
    }
}

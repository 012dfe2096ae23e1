use crate::engine::constants::{BMI_NORMAL_MIN, BMI_OBESE_MIN, BMI_OVERWEIGHT_MIN};
use crate::models::BmiCategory;

/// Map a BMI to its band. Each band includes its lower bound.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(23.99), BmiCategory::Normal);
        assert_eq!(classify(24.0), BmiCategory::Overweight);
        assert_eq!(classify(27.99), BmiCategory::Overweight);
        assert_eq!(classify(28.0), BmiCategory::Obese);
        assert_eq!(classify(45.0), BmiCategory::Obese);
    }

    #[test]
    fn test_monotonic_sweep() {
        let mut previous = classify(0.0);
        let mut bmi = 0.0;
        while bmi < 60.0 {
            let current = classify(bmi);
            assert!(current >= previous, "band went down at {}", bmi);
            previous = current;
            bmi += 0.05;
        }
        assert_eq!(previous, BmiCategory::Obese);
    }
}

//! Subtask progress aggregation.

use crate::domain::Subtask;

/// Percentage of completed subtasks, rounded half up; 0 for an empty list.
pub fn aggregate(subtasks: &[Subtask]) -> u8 {
    let total = subtasks.len();
    if total == 0 {
        return 0;
    }
    let done = subtasks.iter().filter(|s| s.completed).count();
    // floor(100 * done / total + 1/2) in integers
    ((200 * done + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn checklist(done: usize, total: usize) -> Vec<Subtask> {
        (0..total)
            .map(|i| {
                let mut s = Subtask::new(i as u32, format!("Step {}", i), Utc::now());
                s.completed = i < done;
                s
            })
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(aggregate(&[]), 0);
    }

    #[test]
    fn test_api_integration_example() {
        assert_eq!(aggregate(&checklist(3, 5)), 60);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(aggregate(&checklist(1, 3)), 33);
        assert_eq!(aggregate(&checklist(2, 3)), 67);
        assert_eq!(aggregate(&checklist(1, 8)), 13); // 12.5 rounds up
        assert_eq!(aggregate(&checklist(0, 4)), 0);
        assert_eq!(aggregate(&checklist(4, 4)), 100);
    }

    #[test]
    fn test_always_within_bounds() {
        for total in 1..=40 {
            for done in 0..=total {
                let expected = (100.0 * done as f64 / total as f64).round() as u8;
                let got = aggregate(&checklist(done, total));
                assert_eq!(got, expected, "{}/{}", done, total);
                assert!(got <= 100);
            }
        }
    }
}

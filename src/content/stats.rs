//! Fake statistics for the floating widgets.

use std::ops::Range;

use rand::Rng;
use strum_macros::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum FakeStat {
    #[strum(serialize = "People who understand our project")]
    PeopleWhoUnderstand,
    #[strum(serialize = "Hours until moon")]
    HoursUntilMoon,
    #[strum(serialize = "Lambos ordered")]
    LambosOrdered,
    #[strum(serialize = "Regret percentage")]
    RegretPercentage,
}

impl FakeStat {
    pub const ALL: [FakeStat; 4] = [
        FakeStat::PeopleWhoUnderstand,
        FakeStat::HoursUntilMoon,
        FakeStat::LambosOrdered,
        FakeStat::RegretPercentage,
    ];

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Half-open range the value is drawn from
    pub fn range(&self) -> Range<u32> {
        match self {
            FakeStat::PeopleWhoUnderstand => 0..5,
            FakeStat::HoursUntilMoon => 0..8_760,
            FakeStat::LambosOrdered => 0..3,
            FakeStat::RegretPercentage => 0..100,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn samples_stay_inside_their_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        for stat in FakeStat::ALL {
            let range = stat.range();
            for _ in 0..2_000 {
                let value = stat.sample(&mut rng);
                assert!(range.contains(&value), "{} out of range: {}", stat.label(), value);
            }
        }
    }

    #[test]
    fn lambos_cover_their_whole_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..500 {
            seen[FakeStat::LambosOrdered.sample(&mut rng) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn labels_match_page_copy() {
        assert_eq!(FakeStat::LambosOrdered.label(), "Lambos ordered");
        assert_eq!(FakeStat::HoursUntilMoon.label(), "Hours until moon");
    }
}

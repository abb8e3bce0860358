//! Runtime options that differ between the browser page and a native run.

/// Options the controller is constructed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Equivalent of `prefers-reduced-motion: reduce`: floating stats are never shown
    pub reduced_motion: bool,
    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl PageOptions {
    /// Browser page defaults, honouring the `prefers-reduced-motion` media query
    pub fn for_browser(prefers_reduced_motion: bool) -> Self {
        Self {
            reduced_motion: prefers_reduced_motion,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_options_follow_the_motion_preference() {
        assert!(PageOptions::for_browser(true).reduced_motion);
        assert_eq!(PageOptions::for_browser(false), PageOptions::default());
        assert_eq!(PageOptions::for_browser(true).seed, None);
    }
}
